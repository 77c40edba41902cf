//! # FamilyLegacy Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The entitlement engine (download and marketplace rules)
//! - Port/adapter interfaces (traits)
//! - Profile, ticket and admin services
//!
//! ## Architecture Principles
//! - Only depends on `familylegacy-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod admin;
pub mod entitlement;
pub mod profile;
pub mod ticket;

// Re-export specific items to avoid ambiguity
pub use admin::AdminService;
pub use profile::ports::ProfileRepository;
pub use profile::{MockPayment, ProfileService, ProfileUpdate};
pub use ticket::ports::TicketRepository;
pub use ticket::TicketService;
