//! Profile service - onboarding and payment state transitions

use std::sync::Arc;

use chrono::Utc;
use familylegacy_domain::{
    EntitlementSummary, MarketplaceDecision, PlatformError, Profile, ProfileChanges, Result, Role,
    SubscriptionStatus, SubscriptionTier,
};
use tracing::{debug, info};

use super::ports::ProfileRepository;
use crate::entitlement;

/// Validated client-side edit of a profile.
///
/// Every field is optional; `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub role: Option<Role>,
    pub has_paid_one_time_fee: Option<bool>,
    pub subscription_tier: Option<SubscriptionTier>,
    pub subscription_status: Option<SubscriptionStatus>,
}

/// Simulated payment submitted through the mock checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockPayment {
    OneTime,
    /// `None` re-activates the tier already on file.
    Subscription { tier: Option<SubscriptionTier> },
}

/// Profile service orchestrating the store and the entitlement engine
pub struct ProfileService {
    repository: Arc<dyn ProfileRepository>,
}

impl ProfileService {
    /// Create a new profile service
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    /// Create the caller's profile with `role` and default entitlements.
    pub async fn onboard(&self, user_id: &str, role: Role) -> Result<Profile> {
        if self.repository.get(user_id).await?.is_some() {
            return Err(PlatformError::Conflict("Profile already exists".into()));
        }

        let profile = self.repository.create(Profile::new(user_id, role, Utc::now())).await?;
        info!(user_id, role = %profile.role, profile_id = %profile.id, "profile onboarded");
        Ok(profile)
    }

    pub async fn get(&self, user_id: &str) -> Result<Option<Profile>> {
        self.repository.get(user_id).await
    }

    pub async fn get_or_not_found(&self, user_id: &str) -> Result<Profile> {
        self.repository
            .get(user_id)
            .await?
            .ok_or_else(|| PlatformError::NotFound("Profile not found".into()))
    }

    pub async fn record_one_time_payment(&self, user_id: &str) -> Result<Profile> {
        let current = self.get_or_not_found(user_id).await?;
        let next = entitlement::apply_one_time_payment(&current);
        let saved = self.persist(user_id, next).await?;
        info!(user_id, role = %saved.role, "one-time fee recorded");
        Ok(saved)
    }

    /// Record a subscription purchase. `tier` is raw user input.
    pub async fn record_subscription(&self, user_id: &str, tier: &str) -> Result<Profile> {
        let current = self.get_or_not_found(user_id).await?;
        let tier = entitlement::parse_tier(tier)?;
        let next = entitlement::apply_subscription(&current, tier)?;
        let saved = self.persist(user_id, next).await?;
        info!(user_id, tier = %tier, "subscription recorded");
        Ok(saved)
    }

    pub async fn record_mock_payment(
        &self,
        user_id: &str,
        payment: MockPayment,
    ) -> Result<Profile> {
        match payment {
            MockPayment::OneTime => self.record_one_time_payment(user_id).await,
            MockPayment::Subscription { tier } => {
                let current = self.get_or_not_found(user_id).await?;
                let tier = match tier {
                    Some(tier) => tier,
                    None if current.subscription_tier.is_paid() => current.subscription_tier,
                    None => {
                        return Err(PlatformError::invalid(
                            "tier",
                            "a tier is required for a first subscription",
                        ))
                    }
                };
                let next = entitlement::apply_subscription(&current, tier)?;
                let saved = self.persist(user_id, next).await?;
                info!(user_id, tier = %tier, "mock subscription recorded");
                Ok(saved)
            }
        }
    }

    pub async fn check_marketplace(&self, user_id: &str) -> Result<MarketplaceDecision> {
        let profile = self.get_or_not_found(user_id).await?;
        let decision = entitlement::can_access_marketplace(&profile);
        debug!(user_id, valid = decision.valid, "marketplace license checked");
        Ok(decision)
    }

    pub async fn entitlements(&self, user_id: &str) -> Result<EntitlementSummary> {
        let profile = self.get_or_not_found(user_id).await?;
        Ok(entitlement::summarize(&profile))
    }

    /// Apply a client edit after checking it against the stored profile.
    pub async fn update(&self, user_id: &str, update: ProfileUpdate) -> Result<Profile> {
        let current = self.get_or_not_found(user_id).await?;
        let next = apply_update(&current, &update)?;
        self.persist(user_id, next).await
    }

    async fn persist(&self, user_id: &str, mut next: Profile) -> Result<Profile> {
        entitlement::refresh_derived(&mut next);
        next.updated_at = Utc::now();
        self.repository.update(user_id, ProfileChanges::from_profile(&next)).await
    }
}

/// Merge `update` into `current`, enforcing the field constraints that depend
/// on stored state.
fn apply_update(current: &Profile, update: &ProfileUpdate) -> Result<Profile> {
    if let Some(role) = update.role {
        if role != current.role {
            return Err(PlatformError::invalid("role", "role cannot be changed after onboarding"));
        }
    }

    if update.has_paid_one_time_fee == Some(false) && current.has_paid_one_time_fee {
        return Err(PlatformError::invalid(
            "hasPaidOneTimeFee",
            "a paid one-time fee cannot be reverted",
        ));
    }

    // Flipping the fee on carries the same side effects as a recorded payment.
    let mut next = if update.has_paid_one_time_fee == Some(true) {
        entitlement::apply_one_time_payment(current)
    } else {
        current.clone()
    };
    if let Some(tier) = update.subscription_tier {
        next.subscription_tier = tier;
    }
    if let Some(status) = update.subscription_status {
        if status == SubscriptionStatus::Inactive
            && next.subscription_status == SubscriptionStatus::Active
        {
            return Err(PlatformError::invalid(
                "subscriptionStatus",
                "an active subscription cannot be cancelled",
            ));
        }
        next.subscription_status = status;
    }

    if next.role == Role::Pro
        && next.subscription_tier == SubscriptionTier::None
        && next.subscription_status == SubscriptionStatus::Active
    {
        return Err(PlatformError::invalid(
            "subscriptionStatus",
            "an active subscription requires a tier",
        ));
    }

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pro() -> Profile {
        Profile::new("user-1", Role::Pro, Utc::now())
    }

    #[test]
    fn update_rejects_role_change() {
        let update = ProfileUpdate { role: Some(Role::Family), ..ProfileUpdate::default() };
        assert_eq!(apply_update(&pro(), &update).unwrap_err().field(), Some("role"));
    }

    #[test]
    fn update_accepts_same_role() {
        let current = pro();
        let update = ProfileUpdate { role: Some(Role::Pro), ..ProfileUpdate::default() };
        assert_eq!(apply_update(&current, &update).unwrap(), current);
    }

    #[test]
    fn update_rejects_fee_reversal() {
        let mut paid = pro();
        paid.has_paid_one_time_fee = true;
        let update =
            ProfileUpdate { has_paid_one_time_fee: Some(false), ..ProfileUpdate::default() };

        assert_eq!(apply_update(&paid, &update).unwrap_err().field(), Some("hasPaidOneTimeFee"));
    }

    #[test]
    fn update_rejects_tierless_active_pro() {
        let update = ProfileUpdate {
            subscription_status: Some(SubscriptionStatus::Active),
            ..ProfileUpdate::default()
        };
        assert_eq!(apply_update(&pro(), &update).unwrap_err().field(), Some("subscriptionStatus"));
    }

    #[test]
    fn update_fee_on_family_activates_account() {
        let family = Profile::new("user-2", Role::Family, Utc::now());
        let update =
            ProfileUpdate { has_paid_one_time_fee: Some(true), ..ProfileUpdate::default() };

        let next = apply_update(&family, &update).unwrap();
        assert!(next.has_paid_one_time_fee);
        assert_eq!(next.subscription_status, SubscriptionStatus::Active);
    }

    #[test]
    fn update_fee_on_pro_leaves_status_alone() {
        let update =
            ProfileUpdate { has_paid_one_time_fee: Some(true), ..ProfileUpdate::default() };

        let next = apply_update(&pro(), &update).unwrap();
        assert!(next.has_paid_one_time_fee);
        assert_eq!(next.subscription_status, SubscriptionStatus::Inactive);
    }

    #[test]
    fn update_rejects_deactivation() {
        let mut active = pro();
        active.has_paid_one_time_fee = true;
        active.subscription_tier = SubscriptionTier::Gold;
        active.subscription_status = SubscriptionStatus::Active;
        let update = ProfileUpdate {
            subscription_status: Some(SubscriptionStatus::Inactive),
            ..ProfileUpdate::default()
        };

        assert_eq!(
            apply_update(&active, &update).unwrap_err().field(),
            Some("subscriptionStatus")
        );
    }

    #[test]
    fn update_allows_family_active_without_tier() {
        let family = Profile::new("user-2", Role::Family, Utc::now());
        let update = ProfileUpdate {
            subscription_status: Some(SubscriptionStatus::Active),
            ..ProfileUpdate::default()
        };
        let next = apply_update(&family, &update).unwrap();
        assert_eq!(next.subscription_status, SubscriptionStatus::Active);
    }
}
