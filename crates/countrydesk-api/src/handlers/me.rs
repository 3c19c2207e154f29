//! Handlers acting on the bearer's own account.

use axum::Json;
use axum::extract::State;

use crate::dto::request::UpdatePasswordRequest;
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::{BearerToken, JsonBody};
use crate::state::AppState;

/// POST /api/me/update-password
pub async fn update_password(
    State(state): State<AppState>,
    bearer: BearerToken,
    JsonBody(req): JsonBody<UpdatePasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .auth_service
        .update_password(bearer.as_deref(), req.old_password(), req.new_password())
        .await?;

    Ok(Json(MessageResponse::new("Password updated successfully!")))
}
