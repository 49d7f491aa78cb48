//! Configuration management for the relay
//!
//! Configuration is loaded once from environment variables at startup and
//! passed explicitly into [`crate::AppState`].

use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Default maximum number of tokens requested from a provider per call
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1000;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Service name reported by the health endpoint
    pub service_name: String,

    /// OpenAI API URL
    pub openai_api_url: String,
    /// OpenAI API key
    pub openai_api_key: Option<String>,
    /// Model used for `openai` requests that name no model
    pub openai_default_model: String,

    /// Anthropic API URL
    pub anthropic_api_url: String,
    /// Anthropic API key
    pub anthropic_api_key: Option<String>,
    /// Model used for `anthropic` requests that name no model
    pub anthropic_default_model: String,

    /// Upper bound on generated tokens per provider call
    pub max_output_tokens: u32,
    /// Timeout applied to outbound provider calls. `None` waits indefinitely.
    pub upstream_timeout: Option<Duration>,
    /// Maximum accepted request body size in bytes
    pub max_body_bytes: usize,

    /// Expose the Prometheus `/metrics` endpoint
    pub metrics_enabled: bool,
    /// Expose the API documentation endpoints
    pub docs_enabled: bool,
    /// Key required in `X-Docs-Key` to read the docs. Open access when unset.
    pub docs_api_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&get, "PORT", 8080)?,
            service_name: get("SERVICE_NAME").unwrap_or_else(|| "bizcap-ai-service".to_string()),

            openai_api_url: get("OPENAI_API_URL")
                .unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            openai_api_key: get("OPENAI_API_KEY"),
            openai_default_model: get("OPENAI_DEFAULT_MODEL")
                .unwrap_or_else(|| "gpt-4-turbo".to_string()),

            anthropic_api_url: get("ANTHROPIC_API_URL")
                .unwrap_or_else(|| "https://api.anthropic.com/v1".to_string()),
            anthropic_api_key: get("ANTHROPIC_API_KEY"),
            anthropic_default_model: get("ANTHROPIC_DEFAULT_MODEL")
                .unwrap_or_else(|| "claude-3-5-sonnet-latest".to_string()),

            max_output_tokens: parse_or(&get, "MAX_OUTPUT_TOKENS", DEFAULT_MAX_OUTPUT_TOKENS)?,
            upstream_timeout: get("UPSTREAM_TIMEOUT_SECS")
                .map(|v| v.parse::<u64>().context("Invalid UPSTREAM_TIMEOUT_SECS"))
                .transpose()?
                .map(Duration::from_secs),
            max_body_bytes: parse_or(&get, "MAX_BODY_BYTES", 100 * 1024)?,

            metrics_enabled: flag(&get, "METRICS_ENABLED", true),
            docs_enabled: flag(&get, "DOCS_ENABLED", false),
            docs_api_key: get("DOCS_API_KEY"),
        })
    }
}

fn parse_or<T, F>(get: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw.parse().with_context(|| format!("Invalid {}", key)),
        None => Ok(default),
    }
}

fn flag<F>(get: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    get(key)
        .map(|v| v == "true" || v == "1")
        .unwrap_or(default)
}
