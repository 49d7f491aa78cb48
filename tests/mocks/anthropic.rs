//! Mock Anthropic API for testing
//!
//! Provides wiremock-based mocks for `POST /messages`.

use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::common::constants::{MAX_OUTPUT_TOKENS, TEST_ANTHROPIC_API_KEY};

/// Mock Anthropic server wrapper
pub struct MockAnthropic {
    server: MockServer,
}

impl MockAnthropic {
    /// Start a new mock Anthropic server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get the mock server URI
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Expect exactly one well-formed messages call and answer with `blocks`
    /// as consecutive text content blocks
    pub async fn mock_message(&self, model: &str, prompt: &str, blocks: &[&str]) {
        let content: Vec<_> = blocks
            .iter()
            .map(|text| json!({ "type": "text", "text": text }))
            .collect();

        Mock::given(method("POST"))
            .and(path("/messages"))
            .and(header("x-api-key", TEST_ANTHROPIC_API_KEY))
            .and(header("anthropic-version", "2023-06-01"))
            .and(body_json(json!({
                "model": model,
                "max_tokens": MAX_OUTPUT_TOKENS,
                "messages": [{ "role": "user", "content": prompt }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "msg_test123",
                "type": "message",
                "role": "assistant",
                "model": model,
                "content": content,
                "stop_reason": "end_turn",
                "usage": { "input_tokens": 5, "output_tokens": 7 }
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Answer every messages call with an Anthropic error envelope
    pub async fn mock_error(&self, status: u16, message: &str) {
        Mock::given(method("POST"))
            .and(path("/messages"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "type": "error",
                "error": { "type": "overloaded_error", "message": message }
            })))
            .mount(&self.server)
            .await;
    }
}
