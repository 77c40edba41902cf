//! Caller identity resolution
//!
//! Authentication happens upstream; this layer only turns request headers
//! into a user id.

pub mod identity;

pub use identity::{Caller, HeaderIdentityResolver, IdentityResolver};
