//! Entitlement engine: the only place business rules live

pub mod engine;

pub use engine::{
    apply_one_time_payment, apply_payment_events, apply_subscription, can_access_marketplace,
    can_download, effective_subscription_status, next_step, parse_tier, refresh_derived,
    summarize,
};
