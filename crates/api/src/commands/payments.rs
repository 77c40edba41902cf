//! Payment endpoints. No processor is involved; each call records the
//! outcome of a completed checkout.

use axum::extract::State;
use axum::Json;
use familylegacy_core::entitlement::parse_tier;
use familylegacy_core::MockPayment;
use familylegacy_domain::{PlatformError, Profile, Result as DomainResult};
use serde::Deserialize;
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::auth::Caller;
use crate::context::SharedContext;
use crate::error::ApiError;
use crate::http::JsonBody;
use crate::utils::command_helpers::execute_logged;

const ONE_TIME: &str = "one-time";
const SUBSCRIPTION: &str = "subscription";

#[derive(Debug, Default, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MockPaymentRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub tier: Option<String>,
}

impl MockPaymentRequest {
    pub fn into_payment(self) -> DomainResult<MockPayment> {
        match self.kind.as_deref().map(str::trim) {
            Some(ONE_TIME) => Ok(MockPayment::OneTime),
            Some(SUBSCRIPTION) => {
                let tier = self.tier.as_deref().map(parse_tier).transpose()?;
                Ok(MockPayment::Subscription { tier })
            }
            Some(other) => Err(PlatformError::invalid(
                "type",
                format!("payment type must be '{ONE_TIME}' or '{SUBSCRIPTION}', got '{other}'"),
            )),
            None => Err(PlatformError::invalid("type", "payment type is required")),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(deny_unknown_fields)]
pub struct SubscribeRequest {
    pub tier: Option<String>,
}

// =============================================================================
// POST /api/profile/mock-payment
// =============================================================================

pub async fn mock_payment(
    State(ctx): State<SharedContext>,
    Caller(user_id): Caller,
    JsonBody(request): JsonBody<MockPaymentRequest>,
) -> Result<Json<Profile>, ApiError> {
    execute_logged("payments::mock_payment", async {
        let payment = request.into_payment()?;
        ctx.profile_service.record_mock_payment(&user_id, payment).await
    })
    .await
    .map(Json)
}

// =============================================================================
// POST /api/payments/onetime
// =============================================================================

pub async fn pay_one_time_fee(
    State(ctx): State<SharedContext>,
    Caller(user_id): Caller,
) -> Result<Json<Profile>, ApiError> {
    execute_logged(
        "payments::pay_one_time_fee",
        ctx.profile_service.record_one_time_payment(&user_id),
    )
    .await
    .map(Json)
}

// =============================================================================
// POST /api/payments/subscribe
// =============================================================================

pub async fn subscribe(
    State(ctx): State<SharedContext>,
    Caller(user_id): Caller,
    JsonBody(request): JsonBody<SubscribeRequest>,
) -> Result<Json<Profile>, ApiError> {
    execute_logged("payments::subscribe", async {
        let tier = request
            .tier
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| PlatformError::invalid("tier", "tier is required"))?;
        ctx.profile_service.record_subscription(&user_id, &tier).await
    })
    .await
    .map(Json)
}

#[cfg(test)]
mod tests {
    use familylegacy_domain::SubscriptionTier;
    use serde_json::json;

    use super::*;

    fn payment(body: serde_json::Value) -> DomainResult<MockPayment> {
        serde_json::from_value::<MockPaymentRequest>(body).unwrap().into_payment()
    }

    #[test]
    fn parses_both_payment_types() {
        assert_eq!(payment(json!({"type": "one-time"})).unwrap(), MockPayment::OneTime);
        assert_eq!(
            payment(json!({"type": "subscription", "tier": "uranium"})).unwrap(),
            MockPayment::Subscription { tier: Some(SubscriptionTier::Uranium) }
        );
        assert_eq!(
            payment(json!({"type": "subscription"})).unwrap(),
            MockPayment::Subscription { tier: None }
        );
    }

    #[test]
    fn rejects_unknown_type_and_tier() {
        assert_eq!(payment(json!({"type": "refund"})).unwrap_err().field(), Some("type"));
        assert_eq!(payment(json!({})).unwrap_err().field(), Some("type"));
        assert_eq!(
            payment(json!({"type": "subscription", "tier": "bronze"})).unwrap_err().field(),
            Some("tier")
        );
    }
}
