//! Auth handlers: register, sign-in.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::CredentialsRequest;
use crate::dto::response::{MessageResponse, TokenResponse};
use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CredentialsRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    state
        .auth_service
        .register(req.login(), req.password())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully!")),
    ))
}

/// POST /api/auth/sign-in
pub async fn sign_in(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CredentialsRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let issued = state
        .auth_service
        .sign_in(req.login(), req.password())
        .await?;

    Ok(Json(TokenResponse {
        token: issued.token,
    }))
}
