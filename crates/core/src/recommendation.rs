use serde::{Deserialize, Serialize};

use crate::agent::AgentProfile;
use crate::dataset::Dataset;
use crate::metric::Metric;
use crate::scenario::Scenario;

/// A complete evaluation configuration built for a single chat message.
///
/// Every item is a clone of a catalog record; `metrics` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Recommendation {
    pub dataset: Dataset,
    pub metrics: Vec<Metric>,
    pub agent: AgentProfile,
    pub scenario: Scenario,
    /// Explanation of why this configuration was chosen.
    pub reason: String,
}
