//! # opslag-core - Runtime for the opslag service
//!
//! `opslag-core` powers a small post-drafting service: given a person's
//! historical social-media posts stored as CSV, it builds a deterministic
//! style-imitation prompt and runs it through a text-generation provider.
//!
//! ## Architecture Overview
//!
//! - `config/`: configuration loader, defaults, and centralized constants.
//! - `dataset/`: dataset registry, RFC 4180 tabular parsing, column
//!   selection, and the raw-text source strategy (registry fetch vs.
//!   caller upload).
//! - `prompt/`: closed parameter enums and the fixed instruction template.
//! - `llm/`: provider trait and the OpenAI chat-completions adapter.
//! - `serve/`: the axum HTTP surface the browser UI talks to.
//! - `error`: the shared error taxonomy with HTTP status mapping.
//!
//! ## Quickstart
//!
//! ```rust,ignore
//! use opslag_core::{config::OpslagConfig, serve};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), anyhow::Error> {
//!     let config = OpslagConfig::load_or_default("opslag.toml".as_ref())?;
//!     serve::run(config).await
//! }
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod llm;
pub mod prompt;
pub mod serve;

// Re-exports for convenience
pub use config::OpslagConfig;
pub use dataset::{DatasetRegistry, ParsedTable, RegistryFetch, TableSource, Upload, select_column};
pub use error::{Error, Result};
pub use llm::{CompletionRequest, CompletionResponse, LLMError, LLMProvider, OpenAIProvider};
pub use prompt::{GenerationParameters, Length, Platform, Tone, build_prompt};
