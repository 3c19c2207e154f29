//! Route definitions for the CountryDesk HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.request_body_limit_bytes;
    let cors = build_cors_layer(&state.config.server.cors);

    let api_routes = Router::new()
        .merge(health_routes())
        .merge(country_routes())
        .merge(auth_routes())
        .merge(me_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(request_logging))
        .with_state(state)
}

/// Liveness probe
fn health_routes() -> Router<AppState> {
    Router::new().route("/ping", get(handlers::health::ping))
}

/// Read-only country lookup
fn country_routes() -> Router<AppState> {
    Router::new()
        .route("/countries", get(handlers::country::list_countries))
        .route("/countries/{alpha2}", get(handlers::country::get_country))
}

/// Registration and sign-in
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/sign-in", post(handlers::auth::sign_in))
}

/// Bearer-authenticated account operations
fn me_routes() -> Router<AppState> {
    Router::new()
        .route("/me/update-password", post(handlers::me::update_password))
        // Legacy camel-case path kept for older clients
        .route("/me/updatePassword", post(handlers::me::update_password))
}
