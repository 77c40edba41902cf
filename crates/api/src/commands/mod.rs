//! HTTP handlers grouped by area.
//!
//! Each handler resolves the caller, validates the payload into a service
//! input and delegates to `familylegacy-core`.

pub mod admin;
pub mod health;
pub mod marketplace;
pub mod payments;
pub mod profile;
pub mod tickets;
