use axum::extract::State;
use axum::Json;
use familylegacy_domain::MarketplaceDecision;

use crate::auth::Caller;
use crate::context::SharedContext;
use crate::error::ApiError;
use crate::utils::command_helpers::execute_logged;

/// `GET /api/marketplace/validate` - license check for listing sales.
pub async fn validate_license(
    State(ctx): State<SharedContext>,
    Caller(user_id): Caller,
) -> Result<Json<MarketplaceDecision>, ApiError> {
    execute_logged("marketplace::validate_license", ctx.profile_service.check_marketplace(&user_id))
        .await
        .map(Json)
}
