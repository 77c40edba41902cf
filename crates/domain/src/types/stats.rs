//! Statistics types for the administrative dashboard
//!
//! Counts are computed from a full profile/ticket listing; the platform is
//! small enough that no incremental counters are kept.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/* -------------------------------------------------------------------------- */
/* Admin Statistics */
/* -------------------------------------------------------------------------- */

/// Aggregate counts over all profiles and tickets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub total_profiles: u64,

    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub family_profiles: u64,

    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub pro_profiles: u64,

    /// Admin, support, affiliate manager and developer accounts
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub staff_profiles: u64,

    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub paid_one_time_fee: u64,

    /// Profiles whose effective subscription status is active
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub active_subscriptions: u64,

    pub tiers: TierBreakdown,

    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub marketplace_enabled: u64,

    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub open_tickets: u64,
}

/* -------------------------------------------------------------------------- */
/* Tier Breakdown */
/* -------------------------------------------------------------------------- */

/// Number of profiles on each paid tier (regardless of status).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct TierBreakdown {
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub gold: u64,

    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub platinum: u64,

    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub uranium: u64,
}
