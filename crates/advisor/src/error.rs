use thiserror::Error;

use aeval_catalog::CatalogError;
use aeval_llm::LlmError;

/// The model answered, but not with something usable.
#[derive(Debug, Error)]
pub enum ModelResponseError {
    /// The completion had no choices.
    #[error("LLM returned no choices")]
    EmptyChoices,

    /// The first choice carried no message.
    #[error("LLM choice has no message")]
    NoMessage,

    /// The message text was absent or empty.
    #[error("LLM returned empty response")]
    EmptyContent,

    /// The reply body is not JSON, or a level of the completion envelope has
    /// the wrong type.
    #[error("LLM returned a malformed response: {0}")]
    MalformedEnvelope(String),

    /// The text is not a JSON object.
    #[error("invalid JSON response from LLM: {0}")]
    InvalidJson(String),

    /// The JSON object lacks required keys (listed in schema order).
    #[error("LLM response missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// Errors surfaced while answering a chat message.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// The catalog could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The model call itself failed.
    #[error("LLM API call failed: {0}")]
    ModelInvocation(#[from] LlmError),

    /// The model replied with an unusable response.
    #[error(transparent)]
    ModelResponse(#[from] ModelResponseError),
}
