//! AI provider abstraction layer
//!
//! Defines the text-generation capability every provider client exposes.
//! The relay depends only on [`TextGenerator`], so providers can be swapped
//! for stubs in tests.

use async_trait::async_trait;
use reqwest::header::InvalidHeaderValue;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

/// Errors raised while calling an upstream provider
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{provider} API key is not configured")]
    MissingCredential { provider: &'static str },

    #[error("invalid {provider} credential header: {source}")]
    InvalidCredential {
        provider: &'static str,
        #[source]
        source: InvalidHeaderValue,
    },

    #[error("request to {provider} timed out")]
    Timeout { provider: &'static str },

    #[error("HTTP client error calling {provider}: {source}")]
    Http {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} returned {status}: {body}")]
    Upstream {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("malformed {provider} response: {reason}")]
    MalformedResponse {
        provider: &'static str,
        reason: String,
    },
}

impl ProviderError {
    /// Classify a transport error, separating client-side timeouts
    pub fn from_reqwest(provider: &'static str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            ProviderError::Timeout { provider }
        } else {
            ProviderError::Http { provider, source }
        }
    }
}

/// Text-generation capability shared by all providers
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Provider name for logging and metrics
    fn name(&self) -> &'static str;

    /// Generate a completion for a single user prompt
    ///
    /// Issues exactly one upstream request; no retries.
    async fn generate_text(
        &self,
        model: &str,
        prompt: &str,
        max_output_tokens: u32,
    ) -> Result<String, ProviderError>;
}

/// Send a prepared request and decode a successful JSON body
///
/// Non-2xx statuses become [`ProviderError::Upstream`] carrying the raw body,
/// undecodable payloads become [`ProviderError::MalformedResponse`].
pub(crate) async fn send_json<R: DeserializeOwned>(
    provider: &'static str,
    request: reqwest::RequestBuilder,
) -> Result<R, ProviderError> {
    let response = request
        .send()
        .await
        .map_err(|e| ProviderError::from_reqwest(provider, e))?;

    let status = response.status();
    debug!(provider, status = %status, "Received provider response");

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::Upstream {
            provider,
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| ProviderError::from_reqwest(provider, e))?;

    serde_json::from_slice(&bytes).map_err(|e| ProviderError::MalformedResponse {
        provider,
        reason: e.to_string(),
    })
}
