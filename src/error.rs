//! Error types for the relay
//!
//! [`AppError`] is the HTTP-facing error. Every failure reaching a handler is
//! converted into a status code and an `{"error": "..."}` body here.

use axum::{
    extract::rejection::{BytesRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

use crate::proxy::ProviderError;

/// Generic message returned for every generation failure
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate response";

/// Caller input that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Prompt is required")]
    PromptRequired,

    #[error("Invalid provider")]
    InvalidProvider(String),
}

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Payload too large")]
    PayloadTooLarge,

    #[error("Not found")]
    NotFound,

    #[error("Generation failed: {0}")]
    Generation(#[from] ProviderError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[schema(example = "Prompt is required")]
    pub error: String,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::InvalidBody(rejection.body_text())
        }
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::InvalidBody(rejection.body_text())
        }
    }
}

impl AppError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Generation(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Validation(e) => e.to_string(),
            AppError::InvalidBody(_) => "Invalid request body".to_string(),
            AppError::PayloadTooLarge | AppError::NotFound => self.to_string(),
            // Already logged where the provider call failed
            AppError::Generation(_) => GENERATION_FAILED_MESSAGE.to_string(),
            AppError::Internal(e) => {
                error!(error = ?e, "Unhandled error while serving request");
                GENERATION_FAILED_MESSAGE.to_string()
            }
        };

        (self.status(), Json(ErrorResponse { error: message })).into_response()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
