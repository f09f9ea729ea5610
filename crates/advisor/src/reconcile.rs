use aeval_core::{CatalogItem, CatalogSnapshot, Metric, Recommendation};

use crate::parse::ParsedIntent;

/// Reason used when the model did not give one.
pub const DEFAULT_REASON: &str = "Based on your request, here's a recommended configuration.";

/// Resolve the model's choices against the catalog.
///
/// Returns `None` only when one of the four collections is empty. Unknown or
/// missing ids fall back to the first item of the collection; metric ids not
/// in the catalog are dropped, and an empty selection becomes the first
/// metric. Selected metrics keep catalog order.
pub fn reconcile(parsed: &ParsedIntent, catalog: CatalogSnapshot<'_>) -> Option<Recommendation> {
    if !catalog.is_complete() {
        return None;
    }
    let dataset = select(catalog.datasets, parsed.dataset_id.as_deref())?;
    let scenario = select(catalog.scenarios, parsed.scenario_id.as_deref())?;
    let agent = select(catalog.agents, parsed.agent_id.as_deref())?;
    let metrics = select_metrics(catalog.metrics, &parsed.metric_ids)?;

    Some(Recommendation {
        dataset: dataset.clone(),
        metrics,
        agent: agent.clone(),
        scenario: scenario.clone(),
        reason: parsed
            .reason
            .clone()
            .unwrap_or_else(|| DEFAULT_REASON.to_owned()),
    })
}

/// First item whose id matches `wanted`, else the first item.
fn select<'a, T: CatalogItem>(items: &'a [T], wanted: Option<&str>) -> Option<&'a T> {
    let first = items.first()?;
    Some(
        wanted
            .and_then(|id| items.iter().find(|item| item.id() == id))
            .unwrap_or(first),
    )
}

fn select_metrics(metrics: &[Metric], wanted: &[String]) -> Option<Vec<Metric>> {
    let first = metrics.first()?;
    let selected: Vec<Metric> = metrics
        .iter()
        .filter(|m| wanted.iter().any(|id| *id == m.id))
        .cloned()
        .collect();

    if selected.is_empty() {
        Some(vec![first.clone()])
    } else {
        Some(selected)
    }
}
