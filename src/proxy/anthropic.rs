//! Anthropic provider
//!
//! Sends single-prompt generations to an Anthropic-compatible `/messages`
//! endpoint and joins the returned text blocks.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{headers::anthropic_headers, provider::send_json, ProviderError, TextGenerator};
use crate::config::Config;

const PROVIDER: &str = "anthropic";

/// Anthropic messages client
pub struct AnthropicProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

impl AnthropicProvider {
    /// Create a new Anthropic provider
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.anthropic_api_url.trim_end_matches('/').to_string(),
            api_key: config.anthropic_api_key.clone(),
        }
    }
}

/// Concatenate every text block; non-text blocks (tool use, thinking) are skipped
fn extract_text(response: MessagesResponse) -> String {
    response
        .content
        .into_iter()
        .filter_map(|block| match block {
            ContentBlock::Text { text } => Some(text),
            ContentBlock::Other => None,
        })
        .collect()
}

#[async_trait]
impl TextGenerator for AnthropicProvider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    #[instrument(skip(self, prompt), fields(provider = PROVIDER))]
    async fn generate_text(
        &self,
        model: &str,
        prompt: &str,
        max_output_tokens: u32,
    ) -> Result<String, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential { provider: PROVIDER })?;

        let url = format!("{}/messages", self.base_url);
        let body = MessagesRequest {
            model,
            max_tokens: max_output_tokens,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };

        debug!(url = %url, prompt_len = prompt.len(), "Sending request to Anthropic");

        let request = self
            .client
            .post(&url)
            .headers(anthropic_headers(api_key)?)
            .json(&body);

        let response: MessagesResponse = send_json(PROVIDER, request).await?;
        Ok(extract_text(response))
    }
}
