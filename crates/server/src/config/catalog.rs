use serde::Deserialize;

/// Location of the catalog JSON files.
#[derive(Debug, Deserialize)]
pub struct CatalogConfig {
    /// Directory holding `datasets.json`, `metrics.json`, `scenarios.json`
    /// and `agents.json`.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> String {
    "data".to_owned()
}
