use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ConstraintViolation;
use crate::serde_helpers::{flexible_timestamp, null_as_default};

/// An evaluation dataset that can be recommended to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", schema(example = json!({
    "id": "ds-rag-adversarial",
    "name": "Adversarial RAG Prompts",
    "description": "Prompts crafted to induce hallucination in retrieval pipelines",
    "tags": ["rag", "safety"],
    "size": "5K",
    "total_records": 5000,
    "file_format": "jsonl",
    "metadata_quality_score": 0.92,
    "application_context": "customer support",
    "created_at": "2025-01-15T10:30:00Z"
})))]
pub struct Dataset {
    /// Unique dataset identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    pub description: String,
    /// Categorization tags, in catalog order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Size descriptor (e.g. `"1000"`, `"10K"`).
    pub size: String,
    /// Record count as declared by the catalog; not range-checked.
    pub total_records: Option<i64>,
    /// File format tag (e.g. `json`, `csv`).
    pub file_format: String,
    /// Metadata quality score, `0.0..=1.0`.
    pub metadata_quality_score: f64,
    pub application_context: Option<String>,
    #[serde(default, deserialize_with = "flexible_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Dataset {
    /// Check the constraints serde cannot express.
    pub fn validate(&self) -> Result<(), ConstraintViolation> {
        if !(0.0..=1.0).contains(&self.metadata_quality_score) {
            return Err(ConstraintViolation::new(
                "metadata_quality_score",
                format!(
                    "must be between 0.0 and 1.0, got {}",
                    self.metadata_quality_score
                ),
            ));
        }
        Ok(())
    }
}
