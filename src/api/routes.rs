//! API Route Configuration

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{self, AppState};
use super::middleware::logging_middleware;
use crate::utils::constants::{FN_CHAT_ASSISTANT, FN_REFRESH_ACCESS_TOKEN};

/// Create the API router with all callables and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    // The browser frontend calls us cross-origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // One semaphore shared by every route
    let instance_cap = GlobalConcurrencyLimitLayer::new(state.config.server.max_instances);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            &format!("/{}", FN_REFRESH_ACCESS_TOKEN),
            post(handlers::refresh_access_token),
        )
        .route(&format!("/{}", FN_CHAT_ASSISTANT), post(handlers::chat_assistant))
        .with_state(state)
        // Middleware (order matters - bottom runs first)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
        .layer(instance_cap)
}
