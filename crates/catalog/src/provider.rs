use std::path::{Path, PathBuf};

use tokio::sync::OnceCell;
use tracing::{debug, info};

use aeval_core::{AgentProfile, CatalogSnapshot, Dataset, Metric, Scenario};

use crate::error::CatalogError;
use crate::kind::CatalogKind;
use crate::loader::{self, CatalogRecord};

/// Loads the catalog files from a data directory on first access and keeps
/// them for the lifetime of the provider.
///
/// Each collection is cached independently. A failed load leaves its cell
/// empty, so the next access tries again. Concurrent first accesses share a
/// single load.
#[derive(Debug)]
pub struct CatalogProvider {
    data_dir: PathBuf,
    datasets: OnceCell<Vec<Dataset>>,
    metrics: OnceCell<Vec<Metric>>,
    scenarios: OnceCell<Vec<Scenario>>,
    agents: OnceCell<Vec<AgentProfile>>,
}

impl CatalogProvider {
    /// Create a provider reading from `data_dir`. Nothing is read until the
    /// first accessor call.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            datasets: OnceCell::new(),
            metrics: OnceCell::new(),
            scenarios: OnceCell::new(),
            agents: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Location of the file backing `kind`.
    pub fn path_for(&self, kind: CatalogKind) -> PathBuf {
        self.data_dir.join(kind.file_name())
    }

    /// Whether `kind` has already been loaded into the cache.
    pub fn is_loaded(&self, kind: CatalogKind) -> bool {
        match kind {
            CatalogKind::Datasets => self.datasets.initialized(),
            CatalogKind::Metrics => self.metrics.initialized(),
            CatalogKind::Scenarios => self.scenarios.initialized(),
            CatalogKind::Agents => self.agents.initialized(),
        }
    }

    pub async fn datasets(&self) -> Result<&[Dataset], CatalogError> {
        self.cached(&self.datasets, CatalogKind::Datasets).await
    }

    pub async fn metrics(&self) -> Result<&[Metric], CatalogError> {
        self.cached(&self.metrics, CatalogKind::Metrics).await
    }

    pub async fn scenarios(&self) -> Result<&[Scenario], CatalogError> {
        self.cached(&self.scenarios, CatalogKind::Scenarios).await
    }

    pub async fn agents(&self) -> Result<&[AgentProfile], CatalogError> {
        self.cached(&self.agents, CatalogKind::Agents).await
    }

    /// All four collections, loading whichever are not cached yet.
    ///
    /// Collections are loaded in the order datasets, metrics, scenarios,
    /// agents; the first failure is returned.
    pub async fn snapshot(&self) -> Result<CatalogSnapshot<'_>, CatalogError> {
        Ok(CatalogSnapshot {
            datasets: self.datasets().await?,
            metrics: self.metrics().await?,
            scenarios: self.scenarios().await?,
            agents: self.agents().await?,
        })
    }

    async fn cached<'a, T: CatalogRecord>(
        &'a self,
        cell: &'a OnceCell<Vec<T>>,
        kind: CatalogKind,
    ) -> Result<&'a [T], CatalogError> {
        cell.get_or_try_init(|| self.load(kind))
            .await
            .map(Vec::as_slice)
    }

    async fn load<T: CatalogRecord>(&self, kind: CatalogKind) -> Result<Vec<T>, CatalogError> {
        let path = self.path_for(kind);
        debug!(kind = %kind, path = %path.display(), "loading catalog file");

        let records = loader::load::<T>(&path).await?;
        info!(kind = %kind, count = records.len(), path = %path.display(), "catalog loaded");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tempfile::TempDir;

    use super::*;

    const DATASETS: &str = r#"[
        {"id": "ds-1", "name": "Dataset One", "description": "first", "tags": ["rag"],
         "size": "1K", "file_format": "json", "metadata_quality_score": 0.8},
        {"id": "ds-2", "name": "Dataset Two", "description": "second",
         "size": "10K", "total_records": 10000, "file_format": "csv",
         "metadata_quality_score": 1.0, "created_at": "2024-03-01T00:00:00Z"}
    ]"#;
    const METRICS: &str = r#"[
        {"id": "m-1", "name": "Accuracy", "category": "accuracy", "description": "d", "cost": "Low"}
    ]"#;
    const SCENARIOS: &str = r#"[
        {"id": "s-1", "name": "Scenario", "description": "d", "recommended_metrics": ["m-1"]}
    ]"#;
    const AGENTS: &str = r#"[
        {"id": "a-1", "name": "Agent", "type": "rag", "description": "d", "capabilities": ["search"]}
    ]"#;

    fn write_catalog(dir: &Path) {
        std::fs::write(dir.join("datasets.json"), DATASETS).unwrap();
        std::fs::write(dir.join("metrics.json"), METRICS).unwrap();
        std::fs::write(dir.join("scenarios.json"), SCENARIOS).unwrap();
        std::fs::write(dir.join("agents.json"), AGENTS).unwrap();
    }

    #[tokio::test]
    async fn loads_all_collections_in_order() {
        let dir = TempDir::new().unwrap();
        write_catalog(dir.path());
        let provider = CatalogProvider::new(dir.path());

        let snapshot = provider.snapshot().await.unwrap();
        let ids: Vec<_> = snapshot.datasets.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["ds-1", "ds-2"]);
        assert_eq!(snapshot.metrics[0].id, "m-1");
        assert_eq!(snapshot.scenarios[0].recommended_metrics, vec!["m-1"]);
        assert_eq!(snapshot.agents[0].capabilities, vec!["search"]);
        assert!(snapshot.is_complete());
    }

    #[tokio::test]
    async fn nothing_is_read_before_first_access() {
        let dir = TempDir::new().unwrap();
        let provider = CatalogProvider::new(dir.path());
        for kind in CatalogKind::ALL {
            assert!(!provider.is_loaded(kind));
        }
    }

    #[tokio::test]
    async fn cached_after_first_load() {
        let dir = TempDir::new().unwrap();
        write_catalog(dir.path());
        let provider = CatalogProvider::new(dir.path());

        assert_eq!(provider.datasets().await.unwrap().len(), 2);
        assert!(provider.is_loaded(CatalogKind::Datasets));
        assert!(!provider.is_loaded(CatalogKind::Metrics));

        // Later changes on disk are not observed.
        std::fs::write(dir.path().join("datasets.json"), "[]").unwrap();
        assert_eq!(provider.datasets().await.unwrap().len(), 2);

        std::fs::remove_file(dir.path().join("datasets.json")).unwrap();
        assert_eq!(provider.datasets().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn missing_file_is_not_found_with_path() {
        let dir = TempDir::new().unwrap();
        let provider = CatalogProvider::new(dir.path());

        let err = provider.metrics().await.unwrap_err();
        match &err {
            CatalogError::NotFound { path } => {
                assert_eq!(path, &dir.path().join("metrics.json"));
            }
            other => panic!("expected not found, got {other}"),
        }
        assert!(err.to_string().contains("metrics.json"));
    }

    #[tokio::test]
    async fn failed_load_is_retried_on_next_access() {
        let dir = TempDir::new().unwrap();
        let provider = CatalogProvider::new(dir.path());
        assert!(provider.agents().await.is_err());
        assert!(!provider.is_loaded(CatalogKind::Agents));

        std::fs::write(dir.path().join("agents.json"), AGENTS).unwrap();
        assert_eq!(provider.agents().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn malformed_and_invalid_files_are_distinguished() {
        let dir = TempDir::new().unwrap();
        write_catalog(dir.path());
        std::fs::write(dir.path().join("scenarios.json"), "[{").unwrap();
        std::fs::write(
            dir.path().join("datasets.json"),
            r#"[{"id": "ds-1", "name": "n", "description": "d", "size": "1",
                 "file_format": "json", "metadata_quality_score": 2.0}]"#,
        )
        .unwrap();
        let provider = CatalogProvider::new(dir.path());

        assert!(matches!(
            provider.scenarios().await.unwrap_err(),
            CatalogError::InvalidFormat { .. }
        ));
        assert!(matches!(
            provider.datasets().await.unwrap_err(),
            CatalogError::Validation { .. }
        ));
    }

    #[tokio::test]
    async fn snapshot_reports_first_failure() {
        let dir = TempDir::new().unwrap();
        write_catalog(dir.path());
        std::fs::remove_file(dir.path().join("scenarios.json")).unwrap();
        std::fs::remove_file(dir.path().join("agents.json")).unwrap();
        let provider = CatalogProvider::new(dir.path());

        let err = provider.snapshot().await.unwrap_err();
        assert!(err.path().ends_with("scenarios.json"));
        assert!(provider.is_loaded(CatalogKind::Datasets));
        assert!(provider.is_loaded(CatalogKind::Metrics));
    }

    #[tokio::test]
    async fn empty_collections_load_as_empty() {
        let dir = TempDir::new().unwrap();
        write_catalog(dir.path());
        std::fs::write(dir.path().join("agents.json"), "[]").unwrap();
        let provider = CatalogProvider::new(dir.path());

        let snapshot = provider.snapshot().await.unwrap();
        assert!(snapshot.agents.is_empty());
        assert!(!snapshot.is_complete());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_first_access_sees_one_value() {
        let dir = TempDir::new().unwrap();
        write_catalog(dir.path());
        let provider = Arc::new(CatalogProvider::new(dir.path()));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let provider = Arc::clone(&provider);
                tokio::spawn(async move {
                    let datasets = provider.datasets().await.unwrap();
                    (datasets.as_ptr() as usize, datasets.len())
                })
            })
            .collect();

        let mut seen = Vec::new();
        for handle in handles {
            seen.push(handle.await.unwrap());
        }
        assert!(seen.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(seen[0].1, 2);
    }
}
