//! Health check handlers.

use axum::Json;

use crate::dto::response::StatusResponse;

/// GET /api/ping
pub async fn ping() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
    })
}
