//! Router configuration.
//!
//! Builds the complete Axum router with all endpoints.

use crate::handlers::{
    create, delete, favicon, health_check, index, not_found, readiness_check, toggle,
};
use crate::middleware::request_id_layer;
use crate::state::AppState;
use axum::{
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;

/// Build the complete Axum router.
///
/// The form routes accept any method so that non-POST requests can be
/// redirected by the handler instead of answered with 405. Every path
/// without a route gets a 404.
///
/// # Arguments
///
/// - `state`: Application state to share with handlers
#[must_use]
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(index))
        .route("/create", any(create))
        .route("/toggle", any(toggle))
        .route("/delete", any(delete))
        .route("/favicon.ico", get(favicon))
        // Health checks
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
