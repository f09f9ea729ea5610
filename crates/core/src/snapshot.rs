use crate::agent::AgentProfile;
use crate::dataset::Dataset;
use crate::metric::Metric;
use crate::scenario::Scenario;

/// Read-only view over the four catalog collections, in stored order.
#[derive(Debug, Clone, Copy)]
pub struct CatalogSnapshot<'a> {
    pub datasets: &'a [Dataset],
    pub metrics: &'a [Metric],
    pub scenarios: &'a [Scenario],
    pub agents: &'a [AgentProfile],
}

impl CatalogSnapshot<'_> {
    /// Whether every collection holds at least one item.
    pub fn is_complete(&self) -> bool {
        !self.datasets.is_empty()
            && !self.metrics.is_empty()
            && !self.scenarios.is_empty()
            && !self.agents.is_empty()
    }
}
