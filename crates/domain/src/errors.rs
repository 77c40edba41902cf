//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for FamilyLegacy
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail")]
pub enum PlatformError {
    /// No caller identity could be resolved for the request.
    #[error("Authentication required")]
    Unauthenticated,

    /// Caller is authenticated but its role is not permitted.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Malformed input; `field` names the offending payload field.
    #[error("Invalid {field}: {message}")]
    InvalidArgument { field: String, message: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PlatformError {
    /// Shorthand for an [`PlatformError::InvalidArgument`] on `field`.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument { field: field.into(), message: message.into() }
    }

    /// Name of the offending field for validation errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }
}

/// Result type alias for FamilyLegacy operations
pub type Result<T> = std::result::Result<T, PlatformError>;
