//! HTTP routes for the relay
//!
//! This module defines all HTTP endpoints exposed by the service.

pub mod docs;
pub mod generate;
pub mod health;
pub mod metrics;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, middleware::security_headers, AppState};

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/ai/generate", post(generate::generate));

    if state.config.metrics_enabled {
        router = router.route("/metrics", get(metrics::prometheus_metrics));
    }

    if state.config.docs_enabled {
        router = router.merge(docs::create_docs_router(state.config.docs_api_key.clone()));
    }

    router
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        // Global middleware; the last layer added runs first
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(middleware::from_fn(security_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}
