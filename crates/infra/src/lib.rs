//! # FamilyLegacy Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Database implementations (SQLite)
//! - In-memory repositories
//! - The profile read cache
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `familylegacy-core`
//! - Depends on `familylegacy-common` and `familylegacy-core`
//! - Contains all "impure" code (I/O, file system, environment)

pub mod cache;
pub mod config;
pub mod database;
pub mod errors;
pub mod memory;

// Re-export commonly used items
pub use cache::{CachedProfileRepository, ProfileCacheConfig};
pub use database::{DbManager, PoolMetrics, SqliteProfileRepository, SqliteTicketRepository};
pub use memory::{InMemoryProfileRepository, InMemoryTicketRepository};
