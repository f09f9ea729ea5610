#![allow(clippy::needless_for_each)]

use aeval_core::{AgentProfile, CostTier, Dataset, Metric, Recommendation, Scenario};

use super::schemas::{ChatRequest, ChatResponse, ErrorResponse, HealthResponse};

#[derive(utoipa::OpenApi)]
#[openapi(
    info(
        title = "AEval API",
        version = "0.1.0",
        description = "Chat assistant that recommends an evaluation configuration (dataset, metrics, scenario and agent) from a free-text request.",
        license(name = "Apache-2.0")
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Chat", description = "Evaluation configuration assistant"),
    ),
    paths(
        super::health::health,
        super::chat::chat,
    ),
    components(schemas(
        ChatRequest,
        ChatResponse,
        HealthResponse,
        ErrorResponse,
        Recommendation,
        Dataset,
        Metric,
        CostTier,
        Scenario,
        AgentProfile,
    ))
)]
pub struct ApiDoc;
