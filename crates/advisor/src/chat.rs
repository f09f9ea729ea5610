use std::sync::Arc;

use tracing::info;

use aeval_catalog::CatalogProvider;
use aeval_core::Recommendation;

use crate::advisor::EvaluationAdvisor;
use crate::error::AdvisorError;

/// Follow-up suggestions offered with every successful reply.
pub const QUICK_REPLIES: [&str; 3] = [
    "Accept and continue",
    "Make it cheaper",
    "Add more safety metrics",
];

/// Everything returned for one chat message.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub content: String,
    pub recommendation: Option<Recommendation>,
    pub quick_replies: Vec<String>,
}

/// Per-message entry point: loads the (cached) catalog and runs the advisor.
///
/// Holds no per-conversation state; one instance serves every request.
#[derive(Debug, Clone)]
pub struct ChatService {
    catalog: Arc<CatalogProvider>,
    advisor: EvaluationAdvisor,
}

impl ChatService {
    pub fn new(catalog: Arc<CatalogProvider>, advisor: EvaluationAdvisor) -> Self {
        Self { catalog, advisor }
    }

    /// Answer `message` with a recommendation drawn from the catalog.
    pub async fn process_message(&self, message: &str) -> Result<ChatReply, AdvisorError> {
        let snapshot = self.catalog.snapshot().await?;
        let reply = self.advisor.process(message, snapshot).await?;

        info!(
            recommended = reply.recommendation.is_some(),
            dataset = reply.recommendation.as_ref().map(|r| r.dataset.id.as_str()),
            "chat message answered"
        );

        Ok(ChatReply {
            content: reply.content,
            recommendation: reply.recommendation,
            quick_replies: QUICK_REPLIES.iter().map(|&s| s.to_owned()).collect(),
        })
    }
}
