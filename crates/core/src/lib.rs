pub mod agent;
pub mod dataset;
pub mod error;
pub mod item;
pub mod metric;
pub mod recommendation;
pub mod scenario;
pub mod snapshot;

mod serde_helpers;

pub use agent::AgentProfile;
pub use dataset::Dataset;
pub use error::ConstraintViolation;
pub use item::CatalogItem;
pub use metric::{CostTier, Metric};
pub use recommendation::Recommendation;
pub use scenario::Scenario;
pub use snapshot::CatalogSnapshot;
