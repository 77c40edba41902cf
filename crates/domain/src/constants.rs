//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

use crate::types::Role;

// Marketplace license messages
pub const MSG_FEE_REQUIRED: &str = "One-time onboarding fee required for download access.";
pub const MSG_SUBSCRIPTION_REQUIRED: &str =
    "Active monthly subscription required for marketplace connection.";
pub const MSG_LICENSE_VALID: &str = "Marketplace license valid.";

// Admin route allow-lists
pub const ADMIN_USERS_ROLES: &[Role] = &[Role::Admin, Role::Support, Role::Developer];
pub const ADMIN_TICKETS_ROLES: &[Role] = &[Role::Admin, Role::Support];
pub const ADMIN_STATS_ROLES: &[Role] = &[Role::Admin, Role::Developer];
pub const ADMIN_DELETE_ROLES: &[Role] = &[Role::Admin];

// Ticket limits
pub const MAX_TICKET_SUBJECT_LENGTH: usize = 200;
pub const MAX_TICKET_BODY_LENGTH: usize = 5000;

// Defaults
pub const DEFAULT_USER_HEADER: &str = "x-user-id";
pub const DEFAULT_HTTP_PORT: u16 = 5000;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60;
pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;
