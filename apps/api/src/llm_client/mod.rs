//! LLM transport — the single point of entry for completion calls.
//!
//! ARCHITECTURAL RULE: no other module may talk to the model backend
//! directly. The pipeline depends on the `CompletionBackend` trait only, so
//! tests swap in a canned backend and the Ollama client stays the one place
//! that knows about HTTP.
//!
//! No retry or backoff here: a transport failure propagates to the caller
//! as-is and the enclosing handler turns it into an error response.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Backend returned empty content")]
    EmptyContent,
}

/// A completion backend: takes a prompt string, returns the model's raw
/// text reply. Carried in `AppState` as `Arc<dyn CompletionBackend>`.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    response: String,
}

/// Completion backend for a local Ollama server (`POST /api/generate`).
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(base_url: String, model: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
            model,
        }
    }
}

#[async_trait]
impl CompletionBackend for OllamaClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = OllamaRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: OllamaResponse = response.json().await?;
        if body.response.trim().is_empty() {
            return Err(LlmError::EmptyContent);
        }

        debug!("Completion call succeeded: {} chars", body.response.len());
        Ok(body.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ollama_request_serializes_expected_shape() {
        let body = OllamaRequest {
            model: "llama3",
            prompt: "Say hello",
            stream: false,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["model"], "llama3");
        assert_eq!(value["prompt"], "Say hello");
        assert_eq!(value["stream"], false);
    }

    #[test]
    fn test_ollama_response_deserializes_response_field() {
        let json = r#"{"model": "llama3", "response": "Hello!", "done": true}"#;
        let body: OllamaResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.response, "Hello!");
    }
}
