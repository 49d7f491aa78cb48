//! Health endpoint integration tests

use axum::http::StatusCode;
use serde_json::Value;

use crate::common::{config_from, constants, server_for};

#[tokio::test]
async fn test_health_reports_healthy_without_credentials() {
    // No provider keys configured at all
    let server = server_for(config_from(&[]));

    let response = server.get("/api/health").await;
    response.assert_status_ok();

    let json: Value = response.json();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], constants::TEST_SERVICE_NAME);
    assert!(json["uptime_seconds"].is_u64());

    let version = json["version"].as_str().unwrap();
    assert!(version.contains('.'), "Version should be in semver format");
}

#[tokio::test]
async fn test_health_timestamp_is_rfc3339_utc() {
    let server = server_for(config_from(&[]));

    let json: Value = server.get("/api/health").await.json();
    let timestamp = json["timestamp"].as_str().unwrap();

    let parsed = chrono::DateTime::parse_from_rfc3339(timestamp);
    assert!(parsed.is_ok(), "Timestamp should be valid RFC3339: {}", timestamp);
    assert!(timestamp.ends_with('Z'), "Timestamp should be UTC: {}", timestamp);
}

#[tokio::test]
async fn test_health_accepts_get_only() {
    let server = server_for(config_from(&[]));

    let response = server.post("/api/health").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
