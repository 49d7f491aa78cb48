//! Prometheus metrics endpoint
//!
//! Exposes relay metrics in Prometheus format for monitoring.

use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;

/// Global Prometheus handle for metrics export
static PROMETHEUS_HANDLE: Lazy<PrometheusHandle> = Lazy::new(|| {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
});

/// Initialize metrics (call once at startup)
pub fn init_metrics() {
    let _ = &*PROMETHEUS_HANDLE;

    register_metrics();
}

fn register_metrics() {
    metrics::describe_counter!(
        "relay_requests_total",
        "Generation requests dispatched to a provider"
    );
    metrics::describe_histogram!(
        "relay_request_duration_seconds",
        "Provider call duration in seconds"
    );
    metrics::describe_counter!(
        "relay_validation_failures_total",
        "Generation requests rejected before dispatch"
    );
}

/// Prometheus metrics endpoint handler
pub async fn prometheus_metrics() -> impl IntoResponse {
    render()
}

/// Current metrics in Prometheus text format
pub(crate) fn render() -> String {
    PROMETHEUS_HANDLE.render()
}

/// Record one dispatched generation
pub fn record_generation(provider: &str, status: &str, duration_secs: f64) {
    metrics::counter!(
        "relay_requests_total",
        "provider" => provider.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("relay_request_duration_seconds", "provider" => provider.to_string())
        .record(duration_secs);
}

/// Record a request rejected by validation
pub fn record_validation_failure() {
    metrics::counter!("relay_validation_failures_total").increment(1);
}
