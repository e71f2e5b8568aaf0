//! Generation gateway: provider trait and the OpenAI adapter.

pub mod openai;
pub mod provider;

pub use openai::OpenAIProvider;
pub use provider::{CompletionRequest, CompletionResponse, LLMError, LLMProvider};
