use crate::agent::AgentProfile;
use crate::dataset::Dataset;
use crate::metric::Metric;
use crate::scenario::Scenario;

/// Common access to the identifier every catalog record carries.
pub trait CatalogItem {
    fn id(&self) -> &str;
}

macro_rules! impl_catalog_item {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl CatalogItem for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )+
    };
}

impl_catalog_item!(Dataset, Metric, Scenario, AgentProfile);
