/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Health check
 * 2. Public auth routes
 * 3. Protected routes behind `require_auth`
 * 4. Fallback handler (404 in the JSON error shape)
 *
 * A `TraceLayer` wraps everything so every request and response is logged.
 */

use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::backend::error::ApiError;
use crate::backend::routes::api_routes::{configure_auth_routes, configure_protected_routes};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/health", get(health));

    let router = configure_auth_routes(router);
    let router = configure_protected_routes(router, &app_state);

    router
        .fallback(|| async { ApiError::not_found("Route") })
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
