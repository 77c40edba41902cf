use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use familylegacy_infra::PoolMetrics;
use serde::Serialize;
use tracing::warn;

use crate::context::SharedContext;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub storage: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool: Option<PoolMetrics>,
}

/// `GET /api/health` - unauthenticated liveness and storage probe.
pub async fn health(State(ctx): State<SharedContext>) -> (StatusCode, Json<HealthResponse>) {
    let storage = ctx.storage_label();
    match ctx.check_storage().await {
        Ok(pool) => (StatusCode::OK, Json(HealthResponse { status: "ok", storage, pool })),
        Err(err) => {
            warn!(storage, error = %err, "storage health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse { status: "unavailable", storage, pool: None }),
            )
        }
    }
}
