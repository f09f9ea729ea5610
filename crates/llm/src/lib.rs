pub mod client;
pub mod completion;
pub mod config;
pub mod error;
pub mod http;
pub mod mock;

pub use client::{ChatMessage, LlmClient, Role};
pub use completion::{ChatCompletion, CompletionReply};
pub use config::LlmConfig;
pub use error::LlmError;
pub use http::HttpLlmClient;
pub use mock::{FailingLlmClient, MockLlmClient};
