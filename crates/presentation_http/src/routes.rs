//! Route definitions

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Web pages
        .route("/", get(handlers::pages::index))
        .route("/nearest_mbta", post(handlers::pages::nearest_mbta))
        // JSON API (v1)
        .route("/v1/stops/nearest", get(handlers::stops::nearest_stop))
        // Health
        .route("/health", get(handlers::health::health_check))
        .fallback(handlers::pages::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(crate::middleware::request_id))
        // Attach state
        .with_state(state)
}
