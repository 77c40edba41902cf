//! HTTP routing

pub mod extract;

use axum::routing::{delete, get, post};
use axum::Router;
use familylegacy_domain::PlatformError;

use crate::commands::{admin, health, marketplace, payments, profile, tickets};
use crate::context::SharedContext;
use crate::error::ApiError;

pub use extract::JsonBody;

/// Build the application router over a shared context.
pub fn router(ctx: SharedContext) -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .route(
            "/api/profile",
            get(profile::get_profile).post(profile::create_profile).patch(profile::update_profile),
        )
        .route("/api/profile/entitlements", get(profile::get_entitlements))
        .route("/api/profile/mock-payment", post(payments::mock_payment))
        .route("/api/payments/onetime", post(payments::pay_one_time_fee))
        .route("/api/payments/subscribe", post(payments::subscribe))
        .route("/api/marketplace/validate", get(marketplace::validate_license))
        .route("/api/tickets", get(tickets::list_my_tickets).post(tickets::create_ticket))
        .route("/api/admin/users", get(admin::list_users))
        .route("/api/admin/users/{user_id}", delete(admin::delete_user))
        .route("/api/admin/tickets", get(admin::list_tickets))
        .route("/api/admin/stats", get(admin::stats))
        .fallback(unknown_route)
        .with_state(ctx)
}

async fn unknown_route() -> ApiError {
    ApiError(PlatformError::NotFound("Route not found".into()))
}
