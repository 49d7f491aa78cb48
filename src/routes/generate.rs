//! AI generation endpoint

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header::CONTENT_TYPE, HeaderMap},
    Json,
};
use tracing::debug;

use crate::{
    error::{AppError, ErrorResponse},
    relay::{GenerationRequest, GenerationResponse},
    routes::metrics::record_validation_failure,
    AppState,
};

/// Relay a prompt to the selected provider
///
/// A body sent without a JSON content type, or an empty JSON body, is read as
/// an empty object, so it fails with "Prompt is required" rather than a
/// media-type or syntax error.
#[utoipa::path(
    post,
    path = "/api/ai/generate",
    tag = "Generation",
    request_body = GenerationRequest,
    responses(
        (status = 200, description = "Generated text", body = GenerationResponse),
        (status = 400, description = "Missing prompt, unknown provider or malformed body", body = ErrorResponse),
        (status = 413, description = "Request body too large", body = ErrorResponse),
        (status = 500, description = "Provider call failed", body = ErrorResponse)
    )
)]
pub async fn generate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<GenerationResponse>, AppError> {
    let body = body.map_err(|rejection| {
        debug!(error = %rejection.body_text(), "Failed to read generation request body");
        AppError::from(rejection)
    })?;

    let blank = body.iter().all(u8::is_ascii_whitespace);
    let request = if blank || !is_json_content_type(&headers) {
        GenerationRequest::default()
    } else {
        match Json::<GenerationRequest>::from_bytes(&body) {
            Ok(Json(request)) => request,
            Err(rejection) => {
                debug!(error = %rejection.body_text(), "Rejected generation request body");
                return Err(rejection.into());
            }
        }
    };

    match state.relay.generate(request).await {
        Ok(response) => Ok(Json(response)),
        Err(err) => {
            if let AppError::Validation(ref reason) = err {
                record_validation_failure();
                debug!(reason = %reason, "Generation request failed validation");
            }
            Err(err)
        }
    }
}

/// `application/json` or any `application/*+json` type, parameters ignored
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
