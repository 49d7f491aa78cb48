//! In-process stub provider
//!
//! Implements `TextGenerator` without any network I/O and records every call,
//! so tests can assert exactly how many upstream calls were made and with
//! which arguments.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use promptrelay::{proxy::ProviderError, TextGenerator};

/// Upstream detail a failing stub reports; must never reach an HTTP body
pub const STUB_UPSTREAM_DETAIL: &str = "upstream exploded: invalid_api_key sk-live-0000";

/// One recorded `generate_text` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub model: String,
    pub prompt: String,
    pub max_output_tokens: u32,
}

enum Outcome {
    Reply(String),
    Fail,
}

/// Stub provider client
pub struct StubGenerator {
    name: &'static str,
    outcome: Outcome,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubGenerator {
    /// Stub that always returns `text`
    pub fn replying(name: &'static str, text: &str) -> Arc<Self> {
        Arc::new(Self {
            name,
            outcome: Outcome::Reply(text.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Stub that always fails with an upstream error
    pub fn failing(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            outcome: Outcome::Fail,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn generate_text(
        &self,
        model: &str,
        prompt: &str,
        max_output_tokens: u32,
    ) -> Result<String, ProviderError> {
        self.calls.lock().unwrap().push(RecordedCall {
            model: model.to_string(),
            prompt: prompt.to_string(),
            max_output_tokens,
        });

        match &self.outcome {
            Outcome::Reply(text) => Ok(text.clone()),
            Outcome::Fail => Err(ProviderError::Upstream {
                provider: self.name,
                status: 500,
                body: STUB_UPSTREAM_DETAIL.to_string(),
            }),
        }
    }
}
