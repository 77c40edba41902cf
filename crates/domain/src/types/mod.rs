//! Domain types and models

pub mod entitlement;
pub mod profile;
pub mod stats;
pub mod ticket;

pub use entitlement::{EntitlementSummary, MarketplaceDecision, NextStep};
pub use profile::{Profile, ProfileChanges, Role, SubscriptionStatus, SubscriptionTier};
pub use stats::{AdminStats, TierBreakdown};
pub use ticket::{Ticket, TicketStatus};
