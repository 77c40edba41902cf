use std::time::Duration;

use familylegacy_domain::PlatformError;
use tracing::{info, warn};

/// Log the outcome of a handler execution with structured fields.
///
/// # Parameters
/// * `command` - Logical handler identifier (e.g. `"profile::get_profile"`).
/// * `elapsed` - Duration the handler took.
/// * `error_type` - `None` on success, otherwise the [`error_label`] of the
///   failure.
///
/// Callers must avoid forwarding user ids or payload values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error_type: Option<&str>) {
    let duration_ms = elapsed.as_millis() as u64;

    match error_type {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(error_type) => {
            warn!(command, duration_ms, error_type, "command_execution_failure");
        }
    }
}

/// Convert a `PlatformError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &PlatformError) -> &'static str {
    match error {
        PlatformError::Unauthenticated => "unauthenticated",
        PlatformError::Forbidden(_) => "forbidden",
        PlatformError::NotFound(_) => "not_found",
        PlatformError::Conflict(_) => "conflict",
        PlatformError::InvalidArgument { .. } => "invalid_argument",
        PlatformError::Database(_) => "database",
        PlatformError::Config(_) => "config",
        PlatformError::Internal(_) => "internal",
    }
}
