//! Profile endpoints: onboarding, reads and client edits.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use familylegacy_core::ProfileUpdate;
use familylegacy_domain::{
    EntitlementSummary, PlatformError, Profile, Result as DomainResult, Role, SubscriptionStatus,
    SubscriptionTier,
};
use serde::Deserialize;
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::auth::Caller;
use crate::context::SharedContext;
use crate::error::ApiError;
use crate::http::JsonBody;
use crate::utils::command_helpers::execute_logged;

/// Onboarding payload. Only the role is meaningful; the remaining fields are
/// accepted when they carry their default values.
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateProfileRequest {
    pub role: Option<String>,
    pub has_paid_one_time_fee: Option<bool>,
    pub subscription_tier: Option<String>,
    pub subscription_status: Option<String>,
    pub marketplace_access: Option<bool>,
}

impl CreateProfileRequest {
    /// Validate the payload and return the self-assigned role.
    pub fn into_role(self) -> DomainResult<Role> {
        let raw = self
            .role
            .filter(|r| !r.trim().is_empty())
            .ok_or_else(|| PlatformError::invalid("role", "role is required"))?;
        let role: Role = parse_field("role", &raw)?;
        if !role.is_self_service() {
            return Err(PlatformError::invalid(
                "role",
                format!("role '{role}' cannot be chosen at onboarding"),
            ));
        }

        if self.has_paid_one_time_fee == Some(true) {
            return Err(PlatformError::invalid(
                "hasPaidOneTimeFee",
                "the one-time fee is recorded through a payment",
            ));
        }
        if let Some(tier) = self.subscription_tier {
            if parse_field::<SubscriptionTier>("subscriptionTier", &tier)? != SubscriptionTier::None
            {
                return Err(PlatformError::invalid(
                    "subscriptionTier",
                    "a tier is selected through a subscription payment",
                ));
            }
        }
        if let Some(status) = self.subscription_status {
            if parse_field::<SubscriptionStatus>("subscriptionStatus", &status)?
                != SubscriptionStatus::Inactive
            {
                return Err(PlatformError::invalid(
                    "subscriptionStatus",
                    "a new profile starts inactive",
                ));
            }
        }
        if self.marketplace_access == Some(true) {
            return Err(PlatformError::invalid("marketplaceAccess", "marketplaceAccess is derived"));
        }

        Ok(role)
    }
}

/// Partial profile edit. Server-owned fields are listed so they can be
/// rejected by name.
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateProfileRequest {
    pub role: Option<String>,
    pub has_paid_one_time_fee: Option<bool>,
    pub subscription_tier: Option<String>,
    pub subscription_status: Option<String>,
    #[cfg_attr(feature = "ts-gen", ts(skip))]
    pub id: Option<serde_json::Value>,
    #[cfg_attr(feature = "ts-gen", ts(skip))]
    pub user_id: Option<serde_json::Value>,
    #[cfg_attr(feature = "ts-gen", ts(skip))]
    pub marketplace_access: Option<serde_json::Value>,
    #[cfg_attr(feature = "ts-gen", ts(skip))]
    pub created_at: Option<serde_json::Value>,
    #[cfg_attr(feature = "ts-gen", ts(skip))]
    pub updated_at: Option<serde_json::Value>,
}

impl UpdateProfileRequest {
    pub fn into_update(self) -> DomainResult<ProfileUpdate> {
        let read_only = [
            ("id", self.id.is_some()),
            ("userId", self.user_id.is_some()),
            ("marketplaceAccess", self.marketplace_access.is_some()),
            ("createdAt", self.created_at.is_some()),
            ("updatedAt", self.updated_at.is_some()),
        ];
        if let Some((field, _)) = read_only.iter().find(|(_, present)| *present) {
            return Err(PlatformError::invalid(*field, format!("{field} is not writable")));
        }

        Ok(ProfileUpdate {
            role: self.role.as_deref().map(|r| parse_field("role", r)).transpose()?,
            has_paid_one_time_fee: self.has_paid_one_time_fee,
            subscription_tier: self
                .subscription_tier
                .as_deref()
                .map(|t| parse_field("subscriptionTier", t))
                .transpose()?,
            subscription_status: self
                .subscription_status
                .as_deref()
                .map(|s| parse_field("subscriptionStatus", s))
                .transpose()?,
        })
    }
}

/// Parse an enum-valued payload field, naming `field` on failure.
pub(crate) fn parse_field<T>(field: &str, raw: &str) -> DomainResult<T>
where
    T: std::str::FromStr<Err = String>,
{
    raw.parse().map_err(|e: String| PlatformError::invalid(field, e))
}

// =============================================================================
// GET /api/profile
// =============================================================================

pub async fn get_profile(
    State(ctx): State<SharedContext>,
    Caller(user_id): Caller,
) -> Result<Json<Profile>, ApiError> {
    execute_logged("profile::get_profile", ctx.profile_service.get_or_not_found(&user_id))
        .await
        .map(Json)
}

// =============================================================================
// POST /api/profile
// =============================================================================

pub async fn create_profile(
    State(ctx): State<SharedContext>,
    Caller(user_id): Caller,
    JsonBody(request): JsonBody<CreateProfileRequest>,
) -> Result<(StatusCode, Json<Profile>), ApiError> {
    execute_logged("profile::create_profile", async {
        let role = request.into_role()?;
        ctx.profile_service.onboard(&user_id, role).await
    })
    .await
    .map(|profile| (StatusCode::CREATED, Json(profile)))
}

// =============================================================================
// PATCH /api/profile
// =============================================================================

pub async fn update_profile(
    State(ctx): State<SharedContext>,
    Caller(user_id): Caller,
    JsonBody(request): JsonBody<UpdateProfileRequest>,
) -> Result<Json<Profile>, ApiError> {
    execute_logged("profile::update_profile", async {
        let update = request.into_update()?;
        ctx.profile_service.update(&user_id, update).await
    })
    .await
    .map(Json)
}

// =============================================================================
// GET /api/profile/entitlements
// =============================================================================

pub async fn get_entitlements(
    State(ctx): State<SharedContext>,
    Caller(user_id): Caller,
) -> Result<Json<EntitlementSummary>, ApiError> {
    execute_logged("profile::get_entitlements", ctx.profile_service.entitlements(&user_id))
        .await
        .map(Json)
}
