use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::{ChatMessage, LlmClient};
use crate::completion::ChatCompletion;
use crate::error::LlmError;

/// A mock client that returns a fixed completion and records every request.
#[derive(Debug, Default)]
pub struct MockLlmClient {
    completion: ChatCompletion,
    requests: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockLlmClient {
    /// Create a mock whose single choice carries `content`.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self::with_completion(ChatCompletion::from_content(content))
    }

    /// Create a mock returning an arbitrary envelope.
    pub fn with_completion(completion: ChatCompletion) -> Self {
        Self {
            completion,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Messages of every request received so far, oldest first.
    pub fn requests(&self) -> Vec<Vec<ChatMessage>> {
        self.requests
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<ChatCompletion, LlmError> {
        if let Ok(mut guard) = self.requests.lock() {
            guard.push(messages.to_vec());
        }
        Ok(self.completion.clone())
    }
}

/// A mock client whose every call fails with a network error.
#[derive(Debug, Clone)]
pub struct FailingLlmClient {
    error_message: String,
}

impl FailingLlmClient {
    /// Create a failing client with the given error message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error_message: message.into(),
        }
    }
}

#[async_trait]
impl LlmClient for FailingLlmClient {
    async fn complete(&self, _messages: &[ChatMessage]) -> Result<ChatCompletion, LlmError> {
        Err(LlmError::Network(self.error_message.clone()))
    }
}
