//! Header construction for provider requests
//!
//! Client headers are never forwarded upstream. Each provider request carries
//! only the provider's own credential and a JSON content type.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use super::ProviderError;

/// Anthropic API version sent with every messages request
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

const X_API_KEY: HeaderName = HeaderName::from_static("x-api-key");
const ANTHROPIC_VERSION_HEADER: HeaderName = HeaderName::from_static("anthropic-version");

/// Headers for OpenAI-compatible requests (`Authorization: Bearer <key>`)
pub fn openai_headers(api_key: &str) -> Result<HeaderMap, ProviderError> {
    let mut headers = json_headers();
    headers.insert(
        AUTHORIZATION,
        credential("openai", &format!("Bearer {}", api_key))?,
    );
    Ok(headers)
}

/// Headers for Anthropic-compatible requests (`x-api-key` plus API version)
pub fn anthropic_headers(api_key: &str) -> Result<HeaderMap, ProviderError> {
    let mut headers = json_headers();
    headers.insert(X_API_KEY, credential("anthropic", api_key)?);
    headers.insert(
        ANTHROPIC_VERSION_HEADER,
        HeaderValue::from_static(ANTHROPIC_VERSION),
    );
    Ok(headers)
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

fn credential(provider: &'static str, value: &str) -> Result<HeaderValue, ProviderError> {
    let mut value = HeaderValue::from_str(value)
        .map_err(|source| ProviderError::InvalidCredential { provider, source })?;
    value.set_sensitive(true);
    Ok(value)
}
