//! Prompt relay - forwards a prompt to OpenAI or Anthropic
//!
//! This library provides the core functionality for the relay server: request
//! validation, provider selection and the single upstream generation call.

pub mod config;
pub mod docs;
pub mod error;
pub mod middleware;
pub mod proxy;
pub mod relay;
pub mod routes;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::proxy::{AnthropicProvider, OpenAIProvider, TextGenerator};
pub use crate::relay::{Provider, Relay, RelaySettings};

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    pub relay: Relay,
    pub start_time: Instant,
}

impl AppState {
    /// Create a new application state with real provider clients
    pub fn new(config: Config) -> Result<Self> {
        // One pooled client shared by both providers
        let mut builder = reqwest::Client::builder().pool_max_idle_per_host(100);
        if let Some(timeout) = config.upstream_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        let openai: Arc<dyn TextGenerator> =
            Arc::new(OpenAIProvider::new(http_client.clone(), &config));
        let anthropic: Arc<dyn TextGenerator> =
            Arc::new(AnthropicProvider::new(http_client, &config));

        Ok(Self::with_providers(config, openai, anthropic))
    }

    /// Create application state around the given provider clients
    ///
    /// Used by tests to inject stub providers.
    pub fn with_providers(
        config: Config,
        openai: Arc<dyn TextGenerator>,
        anthropic: Arc<dyn TextGenerator>,
    ) -> Self {
        let relay = Relay::new(openai, anthropic, RelaySettings::from(&config));

        Self {
            config,
            relay,
            start_time: Instant::now(),
        }
    }
}
