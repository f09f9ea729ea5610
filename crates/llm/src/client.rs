use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::completion::ChatCompletion;
use crate::error::LlmError;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single message in a chat completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A chat completion backend.
///
/// Implementations return the raw completion envelope; callers decide how to
/// treat missing choices or empty content via [`ChatCompletion::into_reply`].
#[async_trait]
pub trait LlmClient: Send + Sync + std::fmt::Debug {
    /// Send `messages` and wait for the model's completion.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<ChatCompletion, LlmError>;
}
