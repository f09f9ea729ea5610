use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;

/// An agent under evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AgentProfile {
    pub id: String,
    pub name: String,
    /// Free-form agent kind (e.g. `rag`, `code`, `chat`).
    #[serde(rename = "type")]
    pub agent_type: String,
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub capabilities: Vec<String>,
}
