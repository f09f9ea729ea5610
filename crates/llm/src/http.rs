use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, warn};

use crate::client::{ChatMessage, LlmClient};
use crate::completion::ChatCompletion;
use crate::config::LlmConfig;
use crate::error::LlmError;

/// Chat completion client for an OpenAI-compatible HTTP API.
#[derive(Debug)]
pub struct HttpLlmClient {
    client: reqwest::Client,
    config: LlmConfig,
}

impl HttpLlmClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        if config.api_key.trim().is_empty() {
            return Err(LlmError::Configuration("API key must not be empty".into()));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder
            .build()
            .map_err(|e| LlmError::Configuration(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn request_body(&self, messages: &[ChatMessage]) -> serde_json::Value {
        json!({
            "model": self.config.model,
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
            "messages": messages,
        })
    }

    /// Only a configured timeout is reported as [`LlmError::Timeout`].
    fn transport_error(&self, e: &reqwest::Error) -> LlmError {
        match self.config.timeout_seconds {
            Some(seconds) if e.is_timeout() => LlmError::Timeout(seconds),
            _ => LlmError::Network(e.to_string()),
        }
    }
}

#[async_trait]
impl LlmClient for HttpLlmClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<ChatCompletion, LlmError> {
        let request_body = self.request_body(messages);

        debug!(
            endpoint = %self.config.endpoint,
            model = %self.config.model,
            messages = messages.len(),
            "sending chat completion request"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(&e))?;

        if !status.is_success() {
            warn!(status = %status, "chat completion endpoint returned an error");
            return Err(LlmError::from_status(status.as_u16(), body));
        }

        debug!(body_len = body.len(), "chat completion received");
        Ok(ChatCompletion::parse(&body))
    }
}
