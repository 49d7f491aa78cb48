//! OpenAI provider
//!
//! Sends single-prompt generations to an OpenAI-compatible
//! `/chat/completions` endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{headers::openai_headers, provider::send_json, ProviderError, TextGenerator};
use crate::config::Config;

const PROVIDER: &str = "openai";

/// OpenAI chat completions client
pub struct OpenAIProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.openai_api_url.trim_end_matches('/').to_string(),
            api_key: config.openai_api_key.clone(),
        }
    }
}

fn extract_text(response: ChatResponse) -> Result<String, ProviderError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| ProviderError::MalformedResponse {
            provider: PROVIDER,
            reason: "response contained no message content".to_string(),
        })
}

#[async_trait]
impl TextGenerator for OpenAIProvider {
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

        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatRequest {
            model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: max_output_tokens,
        };

        debug!(url = %url, prompt_len = prompt.len(), "Sending request to OpenAI");

        let request = self
            .client
            .post(&url)
            .headers(openai_headers(api_key)?)
            .json(&body);

        let response: ChatResponse = send_json(PROVIDER, request).await?;
        extract_text(response)
    }
}
