//! Turns a free-text evaluation request into a catalog-backed
//! [`Recommendation`](aeval_core::Recommendation).
//!
//! [`EvaluationAdvisor`] runs one request through the model: it renders the
//! catalog into the system prompt, decodes the completion, strips code
//! fences, parses the structured answer, and reconciles the chosen ids
//! against the catalog. [`ChatService`] wraps it with catalog loading and the
//! fixed follow-up suggestions.

pub mod advisor;
pub mod chat;
pub mod compose;
pub mod error;
pub mod intent;
pub mod parse;
pub mod prompt;
pub mod reconcile;
pub mod sanitize;

#[cfg(test)]
mod fixtures;

pub use advisor::{AdvisorReply, EvaluationAdvisor};
pub use chat::{ChatReply, ChatService, QUICK_REPLIES};
pub use compose::compose_reply;
pub use error::{AdvisorError, ModelResponseError};
pub use intent::Intent;
pub use parse::{ParsedIntent, REQUIRED_FIELDS, parse_intent};
pub use reconcile::{DEFAULT_REASON, reconcile};
pub use sanitize::strip_code_fence;
