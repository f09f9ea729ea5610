use serde::{Deserialize, Serialize};

/// Relative computational cost of running a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum CostTier {
    Low,
    Medium,
    High,
}

/// An evaluation metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", schema(example = json!({
    "id": "m-hallucination",
    "name": "Hallucination Rate",
    "category": "safety",
    "description": "Share of answers containing claims unsupported by the retrieved context",
    "cost": "Medium"
})))]
pub struct Metric {
    /// Unique metric identifier.
    pub id: String,
    pub name: String,
    /// Metric family (e.g. `safety`, `accuracy`).
    pub category: String,
    pub description: String,
    pub cost: CostTier,
}
