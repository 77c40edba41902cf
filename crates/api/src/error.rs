//! Boundary error type and its HTTP mapping.
//!
//! Every handler returns [`ApiError`]; the domain taxonomy is translated to a
//! status code and a `{message, field?}` JSON body here and nowhere else.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use familylegacy_domain::PlatformError;
use serde::Serialize;
use thiserror::Error;

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Error returned by HTTP handlers.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub PlatformError);

/// JSON error payload.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ApiError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match &self.0 {
            PlatformError::Unauthenticated => StatusCode::UNAUTHORIZED,
            PlatformError::Forbidden(_) => StatusCode::FORBIDDEN,
            PlatformError::NotFound(_) => StatusCode::NOT_FOUND,
            PlatformError::Conflict(_) | PlatformError::InvalidArgument { .. } => {
                StatusCode::BAD_REQUEST
            }
            PlatformError::Database(_)
            | PlatformError::Config(_)
            | PlatformError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing body. Server-side failures never expose their detail.
    pub fn body(&self) -> ErrorBody {
        let (message, field) = match &self.0 {
            PlatformError::Unauthenticated => ("Authentication required".to_string(), None),
            PlatformError::Forbidden(msg)
            | PlatformError::NotFound(msg)
            | PlatformError::Conflict(msg) => (msg.clone(), None),
            PlatformError::InvalidArgument { field, message } => {
                (message.clone(), Some(field.clone()))
            }
            PlatformError::Database(_)
            | PlatformError::Config(_)
            | PlatformError::Internal(_) => (INTERNAL_MESSAGE.to_string(), None),
        };
        ErrorBody { message, field }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(PlatformError::invalid("body", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        (status, Json(self.body())).into_response()
    }
}
