use std::fmt;

/// The four collections that make up the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Datasets,
    Metrics,
    Scenarios,
    Agents,
}

impl CatalogKind {
    pub const ALL: [Self; 4] = [Self::Datasets, Self::Metrics, Self::Scenarios, Self::Agents];

    /// File name of this collection inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Datasets => "datasets.json",
            Self::Metrics => "metrics.json",
            Self::Scenarios => "scenarios.json",
            Self::Agents => "agents.json",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Datasets => "datasets",
            Self::Metrics => "metrics",
            Self::Scenarios => "scenarios",
            Self::Agents => "agents",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
