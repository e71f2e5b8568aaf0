use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::{Value, json};
use tracing::debug;

use crate::config::constants::{generation, models, urls};
use crate::llm::provider::{CompletionRequest, CompletionResponse, LLMError, LLMProvider};

#[derive(Debug)]
pub struct OpenAIProvider {
    api_key: String,
    http_client: HttpClient,
    base_url: String,
}

impl OpenAIProvider {
    pub fn new(api_key: String) -> Self {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(generation::REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        Self {
            api_key,
            http_client,
            base_url: urls::OPENAI_API_BASE.to_string(),
        }
    }

    #[cfg(test)]
    fn with_base_url(api_key: String, base_url: String) -> Self {
        let mut provider = Self::new(api_key);
        provider.base_url = base_url;
        provider
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, request: CompletionRequest) -> Result<CompletionResponse, LLMError> {
        self.validate_request(&request)?;

        let url = format!("{}/chat/completions", self.base_url);
        let body = json!({
            "model": request.model,
            "messages": [{ "role": "user", "content": request.prompt }],
            "temperature": request.temperature,
        });

        debug!(model = %request.model, prompt_len = request.prompt.len(), "sending generation request");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LLMError::Network(format!("OpenAI network error: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(LLMError::Provider(format!(
                "OpenAI HTTP {status}: {error_text}"
            )));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| LLMError::Provider(format!("Failed to parse OpenAI response: {e}")))?;

        parse_response(response_json)
    }

    fn supported_models(&self) -> Vec<String> {
        models::openai::SUPPORTED_MODELS
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

/// Extract the first candidate's text from a chat-completions body.
///
/// A well-formed body with zero candidates (or an empty message) answers
/// with the fixed fallback reply rather than an error; a body without a
/// `choices` array is malformed and fails.
fn parse_response(response_json: Value) -> Result<CompletionResponse, LLMError> {
    let choices = response_json
        .get("choices")
        .and_then(|c| c.as_array())
        .ok_or_else(|| {
            LLMError::Provider("Invalid response format: missing choices".to_string())
        })?;

    let content = choices
        .first()
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .filter(|content| !content.is_empty())
        .unwrap_or(generation::EMPTY_REPLY);

    Ok(CompletionResponse {
        content: content.to_string(),
    })
}
