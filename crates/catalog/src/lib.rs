pub mod error;
pub mod kind;
pub mod provider;

mod loader;

pub use error::CatalogError;
pub use kind::CatalogKind;
pub use provider::CatalogProvider;
