//! # FamilyLegacy API
//!
//! HTTP application layer - routes, handlers and the main entry point.
//!
//! This crate contains:
//! - axum handlers (HTTP → service bridge)
//! - Caller identity resolution
//! - Application context (dependency injection)
//!
//! ## Architecture
//! - Depends on `common`, `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Maps domain errors onto HTTP status codes

pub mod auth;
pub mod commands;
pub mod context;
pub mod error;
pub mod http;
pub mod utils;

// Re-export for convenience
pub use context::{AppContext, SharedContext};
pub use error::ApiError;
pub use http::router;
