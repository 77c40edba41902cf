//! Derived access decisions returned to the presentation layer

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::profile::{Role, SubscriptionStatus};

/// Outcome of the marketplace license check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct MarketplaceDecision {
    pub valid: bool,
    pub message: String,
}

impl MarketplaceDecision {
    pub fn granted(message: impl Into<String>) -> Self {
        Self { valid: true, message: message.into() }
    }

    pub fn denied(message: impl Into<String>) -> Self {
        Self { valid: false, message: message.into() }
    }
}

/// The next purchase a profile needs to unlock more of the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum NextStep {
    PayOneTimeFee,
    ChooseSubscription,
    None,
}

/// Everything the dashboard needs to pick a role-specific view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct EntitlementSummary {
    pub role: Role,
    pub can_download: bool,
    pub marketplace: MarketplaceDecision,
    pub effective_status: SubscriptionStatus,
    pub next_step: NextStep,
}
