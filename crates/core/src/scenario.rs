use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;

/// An evaluation scenario. `recommended_metrics` holds metric ids that are
/// not checked against the metric catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommended_metrics: Vec<String>,
}
