//! Health check endpoint
//!
//! `/api/health` reports liveness only. It does not probe providers, so it
//! answers identically whether or not credentials are configured.

use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::SecondsFormat;
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

/// Health status enum
#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
    /// RFC 3339 UTC timestamp with millisecond precision
    #[schema(example = "2024-01-01T00:00:00.000Z")]
    pub timestamp: String,
    pub service: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Health check
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HealthStatus::Healthy,
        timestamp: chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        service: state.config.service_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}
