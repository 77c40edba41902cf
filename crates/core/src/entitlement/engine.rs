//! Entitlement rules
//!
//! Every function here is pure: it reads a profile snapshot and returns a
//! decision or a new snapshot. Persistence and timestamps are the caller's
//! concern.

use familylegacy_domain::constants::{
    MSG_FEE_REQUIRED, MSG_LICENSE_VALID, MSG_SUBSCRIPTION_REQUIRED,
};
use familylegacy_domain::{
    EntitlementSummary, MarketplaceDecision, NextStep, PlatformError, Profile, Result, Role,
    SubscriptionStatus, SubscriptionTier,
};

/// Downloads unlock with the one-time fee, for every role.
pub fn can_download(profile: &Profile) -> bool {
    profile.has_paid_one_time_fee
}

/// Marketplace license check. Role-agnostic.
pub fn can_access_marketplace(profile: &Profile) -> MarketplaceDecision {
    if !profile.has_paid_one_time_fee {
        return MarketplaceDecision::denied(MSG_FEE_REQUIRED);
    }

    if profile.subscription_status != SubscriptionStatus::Active {
        return MarketplaceDecision::denied(MSG_SUBSCRIPTION_REQUIRED);
    }

    MarketplaceDecision::granted(MSG_LICENSE_VALID)
}

/// Record the one-time fee.
///
/// Family accounts have no tier selection: the fee also switches on their
/// recurring platform-maintenance status.
pub fn apply_one_time_payment(profile: &Profile) -> Profile {
    let mut next = profile.clone();
    next.has_paid_one_time_fee = true;
    if next.role == Role::Family {
        next.subscription_status = SubscriptionStatus::Active;
    }
    next
}

/// Record a subscription purchase for `tier`.
///
/// # Errors
/// `InvalidArgument` on field `tier` when `tier` is not a paid tier.
pub fn apply_subscription(profile: &Profile, tier: SubscriptionTier) -> Result<Profile> {
    if !tier.is_paid() {
        return Err(PlatformError::invalid(
            "tier",
            format!("a paid tier ({}) is required", paid_tier_names()),
        ));
    }

    let mut next = profile.clone();
    next.subscription_tier = tier;
    next.subscription_status = SubscriptionStatus::Active;
    Ok(next)
}

/// Apply both payment events in one step. The fee always lands before the
/// subscription.
pub fn apply_payment_events(
    profile: &Profile,
    one_time_fee: bool,
    tier: Option<SubscriptionTier>,
) -> Result<Profile> {
    let after_fee =
        if one_time_fee { apply_one_time_payment(profile) } else { profile.clone() };

    match tier {
        Some(tier) => apply_subscription(&after_fee, tier),
        None => Ok(after_fee),
    }
}

/// Parse a purchasable tier from user input.
///
/// # Errors
/// `InvalidArgument` on field `tier` for `none` or any unknown value.
pub fn parse_tier(raw: &str) -> Result<SubscriptionTier> {
    let tier = raw
        .parse::<SubscriptionTier>()
        .map_err(|_| unsupported_tier(raw))?;

    if tier.is_paid() {
        Ok(tier)
    } else {
        Err(unsupported_tier(raw))
    }
}

fn unsupported_tier(raw: &str) -> PlatformError {
    PlatformError::invalid(
        "tier",
        format!("unsupported tier '{raw}', expected one of {}", paid_tier_names()),
    )
}

fn paid_tier_names() -> String {
    SubscriptionTier::PAID.iter().map(|tier| tier.as_str()).collect::<Vec<_>>().join(", ")
}

/// Status used for gating and reporting.
///
/// A professional without a tier cannot be subscribed, whatever the stored
/// status says. Family accounts never pick a tier, so their stored status
/// stands.
pub fn effective_subscription_status(profile: &Profile) -> SubscriptionStatus {
    if profile.role == Role::Pro && profile.subscription_tier == SubscriptionTier::None {
        SubscriptionStatus::Inactive
    } else {
        profile.subscription_status
    }
}

pub fn next_step(profile: &Profile) -> NextStep {
    if !profile.has_paid_one_time_fee {
        return NextStep::PayOneTimeFee;
    }

    match profile.role {
        Role::Pro if effective_subscription_status(profile) != SubscriptionStatus::Active => {
            NextStep::ChooseSubscription
        }
        _ => NextStep::None,
    }
}

pub fn summarize(profile: &Profile) -> EntitlementSummary {
    EntitlementSummary {
        role: profile.role,
        can_download: can_download(profile),
        marketplace: can_access_marketplace(profile),
        effective_status: effective_subscription_status(profile),
        next_step: next_step(profile),
    }
}

/// Recompute the stored derived flag after a mutation.
pub fn refresh_derived(profile: &mut Profile) {
    profile.marketplace_access = can_access_marketplace(profile).valid;
}
