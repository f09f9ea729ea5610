use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file does not exist.
    #[error("data file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The catalog file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not syntactically valid JSON.
    #[error("invalid JSON in {}: {source}", path.display())]
    InvalidFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The JSON is well formed but a record breaks its field constraints.
    #[error("data validation error in {}: {detail}", path.display())]
    Validation { path: PathBuf, detail: String },
}

impl CatalogError {
    /// Path of the catalog file the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path }
            | Self::Io { path, .. }
            | Self::InvalidFormat { path, .. }
            | Self::Validation { path, .. } => path,
        }
    }
}
