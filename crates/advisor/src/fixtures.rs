use aeval_core::{
    AgentProfile, CatalogSnapshot, CostTier, Dataset, Metric, Recommendation, Scenario,
};

pub(crate) fn dataset(id: &str, name: &str) -> Dataset {
    Dataset {
        id: id.into(),
        name: name.into(),
        description: "A test dataset".into(),
        tags: vec!["rag".into(), "safety".into()],
        size: "100".into(),
        total_records: Some(100),
        file_format: "json".into(),
        metadata_quality_score: 0.9,
        application_context: None,
        created_at: None,
    }
}

pub(crate) fn metric(id: &str, name: &str) -> Metric {
    Metric {
        id: id.into(),
        name: name.into(),
        category: "accuracy".into(),
        description: "Measures accuracy".into(),
        cost: CostTier::Low,
    }
}

pub(crate) fn scenario(id: &str, name: &str) -> Scenario {
    Scenario {
        id: id.into(),
        name: name.into(),
        description: "A test scenario".into(),
        recommended_metrics: Vec::new(),
    }
}

pub(crate) fn agent(id: &str, name: &str) -> AgentProfile {
    AgentProfile {
        id: id.into(),
        name: name.into(),
        agent_type: "rag".into(),
        description: "A test agent".into(),
        capabilities: Vec::new(),
    }
}

pub(crate) fn recommendation() -> Recommendation {
    Recommendation {
        dataset: dataset("ds-1", "Test Dataset"),
        metrics: vec![metric("m-1", "Accuracy")],
        agent: agent("a-1", "Test Agent"),
        scenario: scenario("s-1", "Test Scenario"),
        reason: "fits".into(),
    }
}

/// Owned catalog collections for building snapshots in tests.
#[derive(Debug, Default, Clone)]
pub(crate) struct Catalog {
    pub datasets: Vec<Dataset>,
    pub metrics: Vec<Metric>,
    pub scenarios: Vec<Scenario>,
    pub agents: Vec<AgentProfile>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// One item per collection: `ds-1`, `m-1`, `s-1`, `a-1`.
    pub fn single() -> Self {
        Self {
            datasets: vec![dataset("ds-1", "Test Dataset")],
            metrics: vec![metric("m-1", "Accuracy")],
            scenarios: vec![scenario("s-1", "Test Scenario")],
            agents: vec![agent("a-1", "Test Agent")],
        }
    }

    /// Several items per collection, ids numbered from 1 in stored order.
    pub fn several() -> Self {
        Self {
            datasets: vec![
                dataset("ds-1", "Adversarial RAG"),
                dataset("ds-2", "Support Tickets"),
                dataset("ds-3", "HumanEval"),
            ],
            metrics: vec![
                metric("m-1", "Hallucination Rate"),
                metric("m-2", "Toxicity"),
                metric("m-3", "Pass@1"),
            ],
            scenarios: vec![
                scenario("s-1", "Red Team"),
                scenario("s-2", "Regression"),
            ],
            agents: vec![agent("a-1", "Support Bot"), agent("a-2", "Code Assistant")],
        }
    }

    pub fn snapshot(&self) -> CatalogSnapshot<'_> {
        CatalogSnapshot {
            datasets: &self.datasets,
            metrics: &self.metrics,
            scenarios: &self.scenarios,
            agents: &self.agents,
        }
    }
}
