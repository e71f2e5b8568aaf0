//! Text-generation provider abstraction.
//!
//! The service needs exactly one capability from a provider: a single
//! prompt in, a single completion out. Everything provider-specific (wire
//! format, auth, candidate extraction) lives behind this trait.

use async_trait::async_trait;
use thiserror::Error;

/// One generation request: the rendered prompt as the sole user message.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub model: String,
    pub temperature: f32,
}

/// The first candidate completion returned by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResponse {
    pub content: String,
}

#[derive(Debug, Error)]
pub enum LLMError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("provider error: {0}")]
    Provider(String),
}

/// Universal text-generation provider trait
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Provider name (e.g. "openai")
    fn name(&self) -> &str;

    /// Generate a completion for a single prompt.
    async fn generate(&self, request: CompletionRequest) -> Result<CompletionResponse, LLMError>;

    /// Get supported models
    fn supported_models(&self) -> Vec<String>;

    /// Validate request for this provider
    fn validate_request(&self, request: &CompletionRequest) -> Result<(), LLMError> {
        if request.prompt.is_empty() {
            return Err(LLMError::InvalidRequest(
                "Prompt cannot be empty".to_string(),
            ));
        }
        if request.model.is_empty() {
            return Err(LLMError::InvalidRequest(
                "Model cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
