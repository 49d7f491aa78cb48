//! Documentation endpoints
//!
//! Serves Swagger UI and the raw OpenAPI spec. When a docs key is configured
//! the endpoints require a matching `X-Docs-Key` header and answer 404
//! otherwise, hiding their existence.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use utoipa::OpenApi;

use crate::{docs::RelayApiDoc, error::AppError};

/// Header carrying the docs key
pub const DOCS_KEY_HEADER: &str = "X-Docs-Key";

#[derive(Clone)]
struct DocsKey(Option<Arc<str>>);

async fn docs_auth_middleware(
    State(DocsKey(expected)): State<DocsKey>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = expected else {
        return next.run(request).await;
    };

    let provided = request
        .headers()
        .get(DOCS_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match provided {
        Some(provided) if provided == &*expected => next.run(request).await,
        _ => AppError::NotFound.into_response(),
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(RelayApiDoc::openapi())
}

/// The Swagger UI page loads its bundle from unpkg and boots it inline
const SWAGGER_UI_CSP: &str = "default-src 'self';base-uri 'self';\
img-src 'self' data: https://unpkg.com;object-src 'none';\
script-src 'self' 'unsafe-inline' https://unpkg.com;\
style-src 'self' 'unsafe-inline' https://unpkg.com;frame-ancestors 'self'";

async fn swagger_ui() -> impl IntoResponse {
    (
        [(header::CONTENT_SECURITY_POLICY, SWAGGER_UI_CSP)],
        Html(SWAGGER_UI_HTML),
    )
}

/// Create the docs router
///
/// Routes:
/// - GET /api/docs - Swagger UI
/// - GET /api/docs/openapi.json - Raw OpenAPI spec
///
/// Generic over the parent router's state so it can be merged directly.
pub fn create_docs_router<S>(api_key: Option<String>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let key = DocsKey(api_key.map(Arc::from));

    Router::new()
        .route("/api/docs", get(swagger_ui))
        .route("/api/docs/", get(swagger_ui))
        .route("/api/docs/openapi.json", get(openapi_json))
        .layer(axum::middleware::from_fn_with_state(key, docs_auth_middleware))
}

const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Prompt Relay API</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
        window.onload = function() {
            window.ui = SwaggerUIBundle({
                url: "/api/docs/openapi.json",
                dom_id: '#swagger-ui',
                deepLinking: true
            });
        };
    </script>
</body>
</html>"#;
