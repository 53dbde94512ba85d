pub mod health;
pub mod metrics;
pub mod search;

use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::error::panic_response;

/// API routes with their middleware stack.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::status))
        .route("/test-api", get(health::test_api))
        .route("/api/search", post(search::search_hotels))
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(1024 * 1024)) // 1 MB limit
}
