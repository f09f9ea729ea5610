use std::sync::Arc;

use tracing::{debug, instrument, warn};

use aeval_core::{CatalogSnapshot, Recommendation};
use aeval_llm::{CompletionReply, LlmClient};

use crate::compose::compose_reply;
use crate::error::{AdvisorError, ModelResponseError};
use crate::parse::parse_intent;
use crate::prompt::build_messages;
use crate::reconcile::reconcile;
use crate::sanitize::strip_code_fence;

/// Reply text plus the recommendation it describes, if one could be built.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorReply {
    pub content: String,
    pub recommendation: Option<Recommendation>,
}

/// Classifies a request with the model and resolves its answer against the
/// catalog.
#[derive(Debug, Clone)]
pub struct EvaluationAdvisor {
    llm: Arc<dyn LlmClient>,
}

impl EvaluationAdvisor {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Answer one user message.
    ///
    /// Model failures and malformed answers are errors. Ids the catalog does
    /// not know are not: they resolve to catalog defaults.
    #[instrument(skip_all, fields(input_len = user_input.len()))]
    pub async fn process(
        &self,
        user_input: &str,
        catalog: CatalogSnapshot<'_>,
    ) -> Result<AdvisorReply, AdvisorError> {
        let messages = build_messages(user_input, catalog);
        debug!(
            system_prompt_len = messages[0].content.len(),
            "sending evaluation request to LLM"
        );

        let completion = self.llm.complete(&messages).await.map_err(|e| {
            warn!(error = %e, "LLM call failed");
            AdvisorError::ModelInvocation(e)
        })?;

        let content = match completion.into_reply() {
            CompletionReply::Content(content) => content,
            CompletionReply::EmptyChoices => return Err(rejected(ModelResponseError::EmptyChoices)),
            CompletionReply::NoMessage => return Err(rejected(ModelResponseError::NoMessage)),
            CompletionReply::EmptyContent => return Err(rejected(ModelResponseError::EmptyContent)),
            CompletionReply::Malformed(detail) => {
                return Err(rejected(ModelResponseError::MalformedEnvelope(detail)));
            }
        };

        let parsed = parse_intent(&strip_code_fence(&content)).map_err(rejected)?;
        let recommendation = reconcile(&parsed, catalog);

        debug!(
            intent = %parsed.intent,
            recommended = recommendation.is_some(),
            "LLM answer reconciled"
        );

        let content = compose_reply(&parsed.intent, recommendation.as_ref());
        Ok(AdvisorReply {
            content,
            recommendation,
        })
    }
}

fn rejected(error: ModelResponseError) -> AdvisorError {
    warn!(error = %error, "unusable LLM response");
    AdvisorError::ModelResponse(error)
}

#[cfg(test)]
mod tests {
    use aeval_llm::{
        ChatCompletion, FailingLlmClient, HttpLlmClient, LlmConfig, MockLlmClient, Role,
    };
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;
    use crate::fixtures::{self, Catalog};
    use crate::intent::Intent;

    const ANSWER: &str = r#"{"intent": "rag_safety", "dataset_id": "ds-1", "metric_ids": ["m-1"],
        "scenario_id": "s-1", "agent_id": "a-1", "reason": "fits"}"#;

    fn advisor(client: MockLlmClient) -> (EvaluationAdvisor, Arc<MockLlmClient>) {
        let client = Arc::new(client);
        (EvaluationAdvisor::new(client.clone()), client)
    }

    #[tokio::test]
    async fn full_round_trip() {
        let catalog = Catalog::single();
        let (advisor, client) = advisor(MockLlmClient::with_content(ANSWER));

        let reply = advisor
            .process("Test my RAG agent for safety", catalog.snapshot())
            .await
            .unwrap();

        assert_eq!(reply.recommendation, Some(fixtures::recommendation()));
        assert_eq!(
            reply.content,
            format!("{}\n\nfits", Intent::RagSafety.explanation())
        );

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0][0].role, Role::System);
        assert!(requests[0][0].content.contains("ds-1: Test Dataset"));
        assert_eq!(requests[0][1].content, "Test my RAG agent for safety");
    }

    #[tokio::test]
    async fn fenced_answer_is_accepted() {
        let catalog = Catalog::single();
        let (advisor, _) = advisor(MockLlmClient::with_content(format!("```json\n{ANSWER}\n```")));
        let reply = advisor.process("hi", catalog.snapshot()).await.unwrap();
        assert_eq!(reply.recommendation.unwrap().reason, "fits");
    }

    #[tokio::test]
    async fn unknown_ids_degrade_instead_of_failing() {
        let catalog = Catalog::several();
        let (advisor, _) = advisor(MockLlmClient::with_content(
            r#"{"intent": "code_eval", "dataset_id": "unknown", "metric_ids": ["nope"],
                "scenario_id": "unknown", "agent_id": "unknown"}"#,
        ));
        let reply = advisor.process("eval my coder", catalog.snapshot()).await.unwrap();
        let rec = reply.recommendation.unwrap();
        assert_eq!(rec.dataset.id, "ds-1");
        assert_eq!(rec.metrics.len(), 1);
        assert_eq!(rec.metrics[0].id, "m-1");
        assert_eq!(
            reply.content,
            format!("{}\n\n{}", Intent::CodeEval.explanation(), crate::DEFAULT_REASON)
        );
    }

    #[tokio::test]
    async fn empty_collection_omits_recommendation_but_still_replies() {
        let mut catalog = Catalog::single();
        catalog.scenarios.clear();
        let (advisor, _) = advisor(MockLlmClient::with_content(ANSWER));
        let reply = advisor.process("hi", catalog.snapshot()).await.unwrap();
        assert!(reply.recommendation.is_none());
        assert_eq!(reply.content, Intent::RagSafety.explanation());
    }

    #[tokio::test]
    async fn call_failure_is_model_invocation_error() {
        let catalog = Catalog::single();
        let advisor = EvaluationAdvisor::new(Arc::new(FailingLlmClient::new("401 unauthorized")));
        let err = advisor.process("hi", catalog.snapshot()).await.unwrap_err();
        assert!(matches!(err, AdvisorError::ModelInvocation(_)));
        assert!(err.to_string().starts_with("LLM API call failed"));
        assert!(err.to_string().contains("401 unauthorized"));
    }

    #[tokio::test]
    async fn envelope_problems_are_distinct_errors() {
        let catalog = Catalog::single();
        let cases = [
            (ChatCompletion::default(), "no choices"),
            (
                ChatCompletion::from_value(json!({"choices": [{}]})),
                "no message",
            ),
            (
                ChatCompletion::from_value(json!({"choices": [{"message": {}}]})),
                "empty response",
            ),
            (
                ChatCompletion::from_value(json!({"choices": [{"message": "text"}]})),
                "malformed response",
            ),
            (ChatCompletion::from_content(""), "empty response"),
        ];

        for (completion, expected) in cases {
            let (advisor, _) = advisor(MockLlmClient::with_completion(completion));
            let err = advisor.process("hi", catalog.snapshot()).await.unwrap_err();
            assert!(matches!(err, AdvisorError::ModelResponse(_)), "{err}");
            assert!(err.to_string().contains(expected), "{err}");
        }
    }

    #[tokio::test]
    async fn non_json_answer_is_rejected() {
        let catalog = Catalog::single();
        let (advisor, _) = advisor(MockLlmClient::with_content("Sure! Use the RAG dataset."));
        let err = advisor.process("hi", catalog.snapshot()).await.unwrap_err();
        assert!(matches!(
            err,
            AdvisorError::ModelResponse(ModelResponseError::InvalidJson(_))
        ));
    }

    #[tokio::test]
    async fn missing_keys_are_rejected() {
        let catalog = Catalog::single();
        let (advisor, _) = advisor(MockLlmClient::with_content(
            r#"{"intent": "safety", "reason": "no ids"}"#,
        ));
        let err = advisor.process("hi", catalog.snapshot()).await.unwrap_err();
        match err {
            AdvisorError::ModelResponse(ModelResponseError::MissingFields(missing)) => {
                assert_eq!(missing, vec!["dataset_id", "metric_ids", "scenario_id", "agent_id"]);
            }
            other => panic!("expected missing fields, got {other}"),
        }
    }

    #[tokio::test]
    async fn content_parts_from_endpoint_are_a_response_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 8192];
            // Read until the JSON request body has arrived.
            while !request.ends_with(b"}") {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
            }
            let body = r#"{"choices":[{"message":{"content":[{"type":"text","text":"{}"}]}}]}"#;
            let response = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\n\
                 content-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });

        let client = HttpLlmClient::new(LlmConfig::new(
            format!("http://{addr}/v1/chat/completions"),
            "glm-4.7",
            "sk-test",
        ))
        .unwrap();
        let advisor = EvaluationAdvisor::new(Arc::new(client));
        let catalog = Catalog::single();

        let err = advisor.process("hi", catalog.snapshot()).await.unwrap_err();
        assert!(
            matches!(
                err,
                AdvisorError::ModelResponse(ModelResponseError::MalformedEnvelope(_))
            ),
            "{err}"
        );
        assert!(!err.to_string().starts_with("LLM API call failed"));
    }
}
