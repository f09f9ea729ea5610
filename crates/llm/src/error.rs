use thiserror::Error;

/// Ways a chat completion call can fail before a reply body is in hand.
///
/// A call that returned 2xx never produces one of these; whatever the body
/// holds is judged by [`ChatCompletion::into_reply`](crate::ChatCompletion::into_reply).
#[derive(Debug, Error)]
pub enum LlmError {
    /// The endpoint could not be reached or the connection broke mid-call.
    #[error("network error: {0}")]
    Network(String),

    /// No response within the configured timeout.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// The endpoint refused the credentials (401 / 403).
    #[error("authentication rejected (HTTP {status}): {body}")]
    Auth { status: u16, body: String },

    /// The endpoint is throttling this key (429).
    #[error("rate limited (HTTP 429): {body}")]
    RateLimited { body: String },

    /// Any other non-success status.
    #[error("endpoint returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// The client could not be built from its configuration.
    #[error("invalid client configuration: {0}")]
    Configuration(String),
}

impl LlmError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => Self::Auth { status, body },
            429 => Self::RateLimited { body },
            _ => Self::Api { status, body },
        }
    }
}
