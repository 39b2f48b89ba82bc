//! Single-shot chat completion against a local model runtime.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::error::InferenceError;
use crate::core::config::DEFAULT_HOST;
use crate::core::model::{Model, Temperature};

/// Everything one run sends to the model.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceRequest {
    pub system_prompt: String,
    pub user_input: String,
    pub model: Model,
    pub temperature: Temperature,
}

/// A chat endpoint that answers one system + user exchange.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn chat(&self, request: &InferenceRequest) -> Result<String, InferenceError>;
}

/// Talks to an Ollama server over its `/api/chat` endpoint.
#[derive(Debug, Clone)]
pub struct OllamaBackend {
    client: Client,
    base_url: String,
}

impl OllamaBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    message: OllamaMessage,
}

#[derive(Debug, Deserialize)]
struct OllamaMessage {
    content: String,
}

impl Default for OllamaBackend {
    fn default() -> Self {
        Self::new(DEFAULT_HOST)
    }
}

#[async_trait]
impl ChatBackend for OllamaBackend {
    async fn chat(&self, request: &InferenceRequest) -> Result<String, InferenceError> {
        let url = format!("{}/api/chat", self.base_url);
        let body = json!({
            "model": request.model.as_str(),
            "messages": [
                { "role": "system", "content": request.system_prompt },
                { "role": "user", "content": request.user_input },
            ],
            "stream": false,
            "options": { "temperature": request.temperature.value() },
        });

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(InferenceError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        let parsed: OllamaResponse = response.json().await?;
        Ok(parsed.message.content)
    }
}

/// Wraps a backend so every outcome comes back as display text.
pub struct InferenceClient<B> {
    backend: B,
}

impl<B: ChatBackend> InferenceClient<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Sends `request` once. `Ok` carries the generated text untouched; `Err`
    /// carries a diagnostic with the error detail and remediation hints.
    pub async fn complete(&self, request: &InferenceRequest) -> Result<String, String> {
        tracing::info!(
            model = %request.model,
            temperature = request.temperature.value(),
            "sending chat request"
        );
        match self.backend.chat(request).await {
            Ok(text) => {
                tracing::debug!(chars = text.len(), "chat request completed");
                Ok(text)
            }
            Err(e) => {
                tracing::warn!(model = %request.model, error = %e, "chat request failed");
                Err(diagnostic(request.model, &e.to_string()))
            }
        }
    }
}

/// Formats a failed request for display.
pub fn diagnostic(model: Model, detail: &str) -> String {
    format!(
        "Ollama error:\n\n{}\n\nTry:\n• run `ollama run {}`\n• disable GPU\n• use a smaller model",
        detail, model
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    #[async_trait]
    impl ChatBackend for Failing {
        async fn chat(&self, _request: &InferenceRequest) -> Result<String, InferenceError> {
            Err(InferenceError::Backend("model 'phi3' not found".into()))
        }
    }

    struct Echo;

    #[async_trait]
    impl ChatBackend for Echo {
        async fn chat(&self, request: &InferenceRequest) -> Result<String, InferenceError> {
            Ok(format!("  {}\n", request.user_input))
        }
    }

    fn request(model: Model) -> InferenceRequest {
        InferenceRequest {
            system_prompt: "You are a helpful assistant.".into(),
            user_input: "What is 2+2?".into(),
            model,
            temperature: Temperature::default(),
        }
    }

    #[tokio::test]
    async fn success_text_is_not_post_processed() {
        let client = InferenceClient::new(Echo);
        let out = client.complete(&request(Model::Llama3)).await;
        assert_eq!(out, Ok("  What is 2+2?\n".to_string()));
    }

    #[tokio::test]
    async fn failure_becomes_diagnostic() {
        let client = InferenceClient::new(Failing);
        let msg = client.complete(&request(Model::Phi3)).await.unwrap_err();
        assert!(msg.contains("model 'phi3' not found"));
        assert!(msg.contains("ollama run phi3"));
        assert!(msg.contains("disable GPU"));
        assert!(msg.contains("smaller model"));
    }
}
