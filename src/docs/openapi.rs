//! OpenAPI specification for the relay API

use utoipa::OpenApi;

use crate::{
    error::ErrorResponse,
    relay::{GenerationRequest, GenerationResponse, Provider},
    routes::health::{HealthResponse, HealthStatus},
};

/// OpenAPI specification for the relay
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Prompt Relay API",
        version = "1.0.0",
        description = "Forwards a prompt to OpenAI or Anthropic and returns the generated text"
    ),
    paths(
        crate::routes::health::health_check,
        crate::routes::generate::generate
    ),
    components(
        schemas(
            HealthStatus,
            HealthResponse,
            Provider,
            GenerationRequest,
            GenerationResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Generation", description = "Text generation relay")
    )
)]
pub struct RelayApiDoc;
