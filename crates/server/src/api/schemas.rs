use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use aeval_advisor::ChatReply;
use aeval_core::Recommendation;

use crate::error::ServerError;

/// Longest accepted chat message, in characters.
pub const MAX_MESSAGE_CHARS: usize = 10_000;

/// Request body for `POST /api/chat`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ChatRequest {
    /// Free-text description of what the user wants to evaluate.
    #[schema(
        example = "I want to test my RAG system for hallucinations",
        min_length = 1,
        max_length = 10000
    )]
    pub message: String,
}

impl ChatRequest {
    /// Check the length bounds on the raw message and return it trimmed.
    pub fn validate(&self) -> Result<&str, ServerError> {
        let chars = self.message.chars().count();
        if chars == 0 {
            return Err(ServerError::Validation("message must not be empty".into()));
        }
        if chars > MAX_MESSAGE_CHARS {
            return Err(ServerError::Validation(format!(
                "message must be at most {MAX_MESSAGE_CHARS} characters, got {chars}"
            )));
        }
        let trimmed = self.message.trim();
        if trimmed.is_empty() {
            return Err(ServerError::Validation("message must not be blank".into()));
        }
        Ok(trimmed)
    }
}

/// Response body for `POST /api/chat`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    /// Assistant reply text.
    pub content: String,
    /// Recommended configuration, or `null` when the catalog cannot supply one.
    pub recommendation: Option<Recommendation>,
    /// Suggested follow-up messages.
    #[schema(example = json!([
        "Accept and continue",
        "Make it cheaper",
        "Add more safety metrics"
    ]))]
    pub quick_replies: Vec<String>,
}

impl From<ChatReply> for ChatResponse {
    fn from(reply: ChatReply) -> Self {
        Self {
            content: reply.content,
            recommendation: reply.recommendation,
            quick_replies: reply.quick_replies,
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    #[schema(example = "healthy")]
    pub status: String,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    #[schema(example = "message must not be blank")]
    pub error: String,
}
