//! Profile entitlement record and its enums
//!
//! One profile exists per externally-authenticated user. The profile carries
//! the role chosen at onboarding plus the payment and subscription flags the
//! entitlement rules read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;
use uuid::Uuid;

use crate::impl_domain_status_conversions;

/// Role selected at onboarding (or assigned to staff accounts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Family,
    Pro,
    Admin,
    Support,
    AffiliateManager,
    Developer,
}

impl_domain_status_conversions!(Role {
    Family => "family",
    Pro => "pro",
    Admin => "admin",
    Support => "support",
    AffiliateManager => "affiliate_manager",
    Developer => "developer",
});

impl Role {
    /// Roles a user may pick for themselves during onboarding.
    pub const SELF_SERVICE: [Self; 2] = [Self::Family, Self::Pro];

    /// Whether this role can be chosen through the onboarding flow.
    pub fn is_self_service(self) -> bool {
        Self::SELF_SERVICE.contains(&self)
    }

    /// Staff roles from the administrative variant of the schema.
    pub fn is_staff(self) -> bool {
        !self.is_self_service()
    }
}

/// Recurring plan level. `None` means no plan was ever selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionTier {
    #[default]
    None,
    Gold,
    Platinum,
    Uranium,
}

impl_domain_status_conversions!(SubscriptionTier {
    None => "none",
    Gold => "gold",
    Platinum => "platinum",
    Uranium => "uranium",
});

impl SubscriptionTier {
    /// Tiers that can be purchased.
    pub const PAID: [Self; 3] = [Self::Gold, Self::Platinum, Self::Uranium];

    pub fn is_paid(self) -> bool {
        Self::PAID.contains(&self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    #[default]
    Inactive,
}

impl_domain_status_conversions!(SubscriptionStatus {
    Active => "active",
    Inactive => "inactive",
});

/// Per-user entitlement record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    /// Identity issued by the external authentication provider.
    pub user_id: String,
    pub role: Role,
    pub has_paid_one_time_fee: bool,
    pub subscription_tier: SubscriptionTier,
    pub subscription_status: SubscriptionStatus,
    /// Stored copy of the marketplace decision, refreshed on every mutation.
    pub marketplace_access: bool,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub created_at: DateTime<Utc>,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Freshly onboarded profile with every entitlement field at its default.
    pub fn new(user_id: impl Into<String>, role: Role, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            role,
            has_paid_one_time_fee: false,
            subscription_tier: SubscriptionTier::None,
            subscription_status: SubscriptionStatus::Inactive,
            marketplace_access: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Mutable subset of a [`Profile`] accepted by the store's `update`.
///
/// `role`, `id`, `user_id` and `created_at` are deliberately absent: they are
/// fixed at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    pub has_paid_one_time_fee: Option<bool>,
    pub subscription_tier: Option<SubscriptionTier>,
    pub subscription_status: Option<SubscriptionStatus>,
    pub marketplace_access: Option<bool>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProfileChanges {
    /// Changes that overwrite every mutable field with the values in `profile`.
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            has_paid_one_time_fee: Some(profile.has_paid_one_time_fee),
            subscription_tier: Some(profile.subscription_tier),
            subscription_status: Some(profile.subscription_status),
            marketplace_access: Some(profile.marketplace_access),
            updated_at: Some(profile.updated_at),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Apply the set fields onto `profile` in place.
    pub fn apply_to(&self, profile: &mut Profile) {
        if let Some(value) = self.has_paid_one_time_fee {
            profile.has_paid_one_time_fee = value;
        }
        if let Some(value) = self.subscription_tier {
            profile.subscription_tier = value;
        }
        if let Some(value) = self.subscription_status {
            profile.subscription_status = value;
        }
        if let Some(value) = self.marketplace_access {
            profile.marketplace_access = value;
        }
        if let Some(value) = self.updated_at {
            profile.updated_at = value;
        }
    }
}
