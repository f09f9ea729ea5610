use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::error::Category;

use aeval_core::{AgentProfile, ConstraintViolation, Dataset, Metric, Scenario};

use crate::error::CatalogError;

/// A record type stored in one of the catalog files.
pub(crate) trait CatalogRecord: DeserializeOwned {
    /// Constraints checked after deserialization.
    fn validate(&self) -> Result<(), ConstraintViolation> {
        Ok(())
    }
}

impl CatalogRecord for Dataset {
    fn validate(&self) -> Result<(), ConstraintViolation> {
        Dataset::validate(self)
    }
}

impl CatalogRecord for Metric {}
impl CatalogRecord for Scenario {}
impl CatalogRecord for AgentProfile {}

/// Read and decode a catalog file.
pub(crate) async fn load<T: CatalogRecord>(path: &Path) -> Result<Vec<T>, CatalogError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(CatalogError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(CatalogError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    decode(path, &bytes)
}

/// Decode a JSON array of records and check each one.
pub(crate) fn decode<T: CatalogRecord>(path: &Path, bytes: &[u8]) -> Result<Vec<T>, CatalogError> {
    let records: Vec<T> = serde_json::from_slice(bytes).map_err(|e| match e.classify() {
        // Well-formed JSON with the wrong shape, a missing field, or a value
        // outside an enum's literals.
        Category::Data => CatalogError::Validation {
            path: path.to_path_buf(),
            detail: e.to_string(),
        },
        Category::Syntax | Category::Eof | Category::Io => CatalogError::InvalidFormat {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    for (index, record) in records.iter().enumerate() {
        record
            .validate()
            .map_err(|violation| CatalogError::Validation {
                path: path.to_path_buf(),
                detail: format!("record {index}: {violation}"),
            })?;
    }

    Ok(records)
}
