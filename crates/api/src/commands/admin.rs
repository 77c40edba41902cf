//! Administrative endpoints. Authorization is decided by the caller's own
//! profile role inside `AdminService`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use familylegacy_domain::{AdminStats, Profile, Ticket};

use crate::auth::Caller;
use crate::context::SharedContext;
use crate::error::ApiError;
use crate::utils::command_helpers::execute_logged;

pub async fn list_users(
    State(ctx): State<SharedContext>,
    Caller(caller_id): Caller,
) -> Result<Json<Vec<Profile>>, ApiError> {
    execute_logged("admin::list_users", ctx.admin_service.list_users(&caller_id)).await.map(Json)
}

pub async fn list_tickets(
    State(ctx): State<SharedContext>,
    Caller(caller_id): Caller,
) -> Result<Json<Vec<Ticket>>, ApiError> {
    execute_logged("admin::list_tickets", ctx.admin_service.list_tickets(&caller_id))
        .await
        .map(Json)
}

pub async fn stats(
    State(ctx): State<SharedContext>,
    Caller(caller_id): Caller,
) -> Result<Json<AdminStats>, ApiError> {
    execute_logged("admin::stats", ctx.admin_service.stats(&caller_id)).await.map(Json)
}

/// `DELETE /api/admin/users/{user_id}`
pub async fn delete_user(
    State(ctx): State<SharedContext>,
    Caller(caller_id): Caller,
    Path(user_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    execute_logged("admin::delete_user", ctx.admin_service.delete_user(&caller_id, &user_id))
        .await
        .map(|()| StatusCode::NO_CONTENT)
}
