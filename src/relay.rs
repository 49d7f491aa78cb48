//! Request relay
//!
//! Validates a generation request, selects the provider client named by the
//! request and awaits exactly one upstream call.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::{
    config::Config,
    error::{AppError, AppResult, ValidationError},
    proxy::TextGenerator,
    routes::metrics::record_generation,
};

/// Supported upstream providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    OpenAI,
    Anthropic,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAI => "openai",
            Provider::Anthropic => "anthropic",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = ValidationError;

    /// Exact, case-sensitive match on the wire name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(Provider::OpenAI),
            "anthropic" => Ok(Provider::Anthropic),
            other => Err(ValidationError::InvalidProvider(other.to_string())),
        }
    }
}

/// Incoming generation request
///
/// Fields are kept loose so that validation can report which one is wrong.
/// A missing `provider` defaults to `openai`, while an explicit `null` is
/// rejected. `null` prompt and model count as absent.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct GenerationRequest {
    /// Prompt text, must be non-empty
    #[serde(default)]
    #[schema(example = "Write a haiku about the sea")]
    pub prompt: Option<String>,
    /// `openai` or `anthropic`, defaults to `openai` when omitted
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, example = "openai")]
    pub provider: Option<Option<String>>,
    /// Provider-specific model identifier, defaults per provider
    #[serde(default)]
    #[schema(example = "gpt-4-turbo")]
    pub model: Option<String>,
}

/// Wraps any value that is present in the body, `null` included, in `Some`
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Successful generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerationResponse {
    /// Generated text
    pub response: String,
}

/// A request that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub prompt: String,
    pub provider: Provider,
    pub model: Option<String>,
}

impl GenerationRequest {
    /// Check the prompt first, then the provider
    pub fn validate(self) -> Result<ValidatedRequest, ValidationError> {
        let prompt = match self.prompt {
            Some(prompt) if !prompt.is_empty() => prompt,
            _ => return Err(ValidationError::PromptRequired),
        };

        let provider = match self.provider {
            Some(Some(name)) => name.parse()?,
            Some(None) => return Err(ValidationError::InvalidProvider("null".to_string())),
            None => Provider::default(),
        };

        Ok(ValidatedRequest {
            prompt,
            provider,
            model: self.model,
        })
    }
}

/// Per-call settings taken from configuration
#[derive(Debug, Clone)]
pub struct RelaySettings {
    pub openai_default_model: String,
    pub anthropic_default_model: String,
    pub max_output_tokens: u32,
}

impl From<&Config> for RelaySettings {
    fn from(config: &Config) -> Self {
        Self {
            openai_default_model: config.openai_default_model.clone(),
            anthropic_default_model: config.anthropic_default_model.clone(),
            max_output_tokens: config.max_output_tokens,
        }
    }
}

/// Maps a [`Provider`] tag to its client and performs the generation call
pub struct Relay {
    openai: Arc<dyn TextGenerator>,
    anthropic: Arc<dyn TextGenerator>,
    settings: RelaySettings,
}

impl Relay {
    pub fn new(
        openai: Arc<dyn TextGenerator>,
        anthropic: Arc<dyn TextGenerator>,
        settings: RelaySettings,
    ) -> Self {
        Self {
            openai,
            anthropic,
            settings,
        }
    }

    fn client(&self, provider: Provider) -> &dyn TextGenerator {
        match provider {
            Provider::OpenAI => self.openai.as_ref(),
            Provider::Anthropic => self.anthropic.as_ref(),
        }
    }

    /// Model used when a request names none
    pub fn default_model(&self, provider: Provider) -> &str {
        match provider {
            Provider::OpenAI => &self.settings.openai_default_model,
            Provider::Anthropic => &self.settings.anthropic_default_model,
        }
    }

    /// Validate and relay one request
    ///
    /// Validation failures return before any provider call. Provider failures
    /// are logged here with full detail and returned as
    /// [`AppError::Generation`], which renders a generic message.
    pub async fn generate(&self, request: GenerationRequest) -> AppResult<GenerationResponse> {
        let ValidatedRequest {
            prompt,
            provider,
            model,
        } = request.validate()?;

        let model = model.unwrap_or_else(|| self.default_model(provider).to_string());
        let client = self.client(provider);
        let start = Instant::now();

        let result = client
            .generate_text(&model, &prompt, self.settings.max_output_tokens)
            .await;
        let duration = start.elapsed().as_secs_f64();

        match result {
            Ok(text) => {
                record_generation(client.name(), "success", duration);
                info!(
                    provider = client.name(),
                    model = %model,
                    duration_ms = %format!("{:.2}", duration * 1000.0),
                    "Generation completed"
                );
                Ok(GenerationResponse { response: text })
            }
            Err(e) => {
                record_generation(client.name(), "error", duration);
                error!(
                    provider = client.name(),
                    model = %model,
                    error = %e,
                    "AI generation error"
                );
                Err(AppError::Generation(e))
            }
        }
    }
}
