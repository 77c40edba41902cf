//! Support tickets raised by the caller.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use familylegacy_domain::Ticket;
use serde::Deserialize;
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::auth::Caller;
use crate::context::SharedContext;
use crate::error::ApiError;
use crate::http::JsonBody;
use crate::utils::command_helpers::execute_logged;

/// Missing fields deserialize as empty and are rejected by the service with
/// the field name.
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(default, deny_unknown_fields)]
pub struct CreateTicketRequest {
    pub subject: String,
    pub body: String,
}

pub async fn create_ticket(
    State(ctx): State<SharedContext>,
    Caller(user_id): Caller,
    JsonBody(request): JsonBody<CreateTicketRequest>,
) -> Result<(StatusCode, Json<Ticket>), ApiError> {
    execute_logged(
        "tickets::create_ticket",
        ctx.ticket_service.open(&user_id, &request.subject, &request.body),
    )
    .await
    .map(|ticket| (StatusCode::CREATED, Json(ticket)))
}

pub async fn list_my_tickets(
    State(ctx): State<SharedContext>,
    Caller(user_id): Caller,
) -> Result<Json<Vec<Ticket>>, ApiError> {
    execute_logged("tickets::list_my_tickets", ctx.ticket_service.list_for_user(&user_id))
        .await
        .map(Json)
}
