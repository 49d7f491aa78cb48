//! Router-level behaviour shared by every endpoint

use axum::http::{HeaderName, HeaderValue, StatusCode};
use serde_json::{json, Value};

use promptrelay::middleware::CONTENT_SECURITY_POLICY;

use crate::common::{config_from, server_for};

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let server = server_for(config_from(&[]));

    let response = server.get("/api/unknown").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>(), json!({ "error": "Not found" }));
}

#[tokio::test]
async fn test_security_headers_are_set() {
    let server = server_for(config_from(&[]));

    let response = server.get("/api/health").await;

    assert_eq!(response.header("x-content-type-options"), "nosniff");
    assert_eq!(response.header("x-frame-options"), "SAMEORIGIN");
    assert_eq!(response.header("referrer-policy"), "no-referrer");
    assert_eq!(response.header("content-security-policy"), CONTENT_SECURITY_POLICY);
}

#[tokio::test]
async fn test_swagger_ui_keeps_its_own_policy() {
    let server = server_for(config_from(&[("DOCS_ENABLED", "true")]));

    let response = server.get("/api/docs").await;

    response.assert_status_ok();
    let csp = response.header("content-security-policy");
    assert_ne!(csp, CONTENT_SECURITY_POLICY);
    assert!(csp.to_str().unwrap().contains("https://unpkg.com"));
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let server = server_for(config_from(&[]));

    let response = server
        .get("/api/health")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("https://app.example.com"),
        )
        .await;

    assert_eq!(response.header("access-control-allow-origin"), "*");
}

#[tokio::test]
async fn test_metrics_route_follows_config() {
    let disabled = server_for(config_from(&[]));
    disabled.get("/metrics").await.assert_status(StatusCode::NOT_FOUND);

    let enabled = server_for(config_from(&[("METRICS_ENABLED", "true")]));
    enabled.get("/metrics").await.assert_status_ok();
}

#[tokio::test]
async fn test_docs_hidden_by_default() {
    let server = server_for(config_from(&[]));

    server
        .get("/api/docs/openapi.json")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_docs_served_when_enabled() {
    let server = server_for(config_from(&[("DOCS_ENABLED", "true")]));

    let response = server.get("/api/docs/openapi.json").await;
    response.assert_status_ok();

    let spec: Value = response.json();
    assert!(spec["paths"]["/api/ai/generate"]["post"].is_object());
    assert!(spec["paths"]["/api/health"]["get"].is_object());

    server.get("/api/docs").await.assert_status_ok();
}

#[tokio::test]
async fn test_docs_key_is_enforced() {
    let server = server_for(config_from(&[
        ("DOCS_ENABLED", "true"),
        ("DOCS_API_KEY", "docs-secret"),
    ]));

    server
        .get("/api/docs/openapi.json")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    server
        .get("/api/docs/openapi.json")
        .add_header(
            HeaderName::from_static("x-docs-key"),
            HeaderValue::from_static("docs-secret"),
        )
        .await
        .assert_status_ok();
}
