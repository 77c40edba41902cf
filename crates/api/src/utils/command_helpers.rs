//! Handler execution helpers
//!
//! Reduces boilerplate in handlers by timing the service call and emitting
//! the structured execution log in one place.

use std::future::Future;
use std::time::Instant;

use familylegacy_domain::Result as DomainResult;

use crate::error::ApiError;
use crate::utils::logging::{error_label, log_command_execution};

/// Run a service call, log its outcome and convert the error for axum.
///
/// # Example
///
/// ```rust,ignore
/// pub async fn get_profile(
///     State(ctx): State<SharedContext>,
///     caller: Caller,
/// ) -> Result<Json<Profile>, ApiError> {
///     execute_logged("profile::get_profile", async {
///         ctx.profile_service.get_or_not_found(&caller.0).await
///     })
///     .await
///     .map(Json)
/// }
/// ```
pub async fn execute_logged<Fut, T>(command_name: &str, command: Fut) -> Result<T, ApiError>
where
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();
    let result = command.await;

    let error_type = result.as_ref().err().map(error_label);
    log_command_execution(command_name, start.elapsed(), error_type);

    result.map_err(ApiError::from)
}
