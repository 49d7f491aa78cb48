//! Proxy module
//!
//! Provider clients that turn one prompt into one upstream generation call.

pub mod anthropic;
pub mod headers;
pub mod openai;
pub mod provider;

pub use anthropic::AnthropicProvider;
pub use openai::OpenAIProvider;
pub use provider::{ProviderError, TextGenerator};
