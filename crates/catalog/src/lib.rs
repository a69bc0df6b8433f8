//! Provider catalog.
//!
//! The catalog is loaded once at process start from static configuration and is
//! read-only afterwards. There are no mutation operations: an "update" is the
//! construction of a new [`ProviderCatalog`].

pub mod catalog;
pub mod error;
pub mod provider;
pub mod source;

pub use catalog::{CATALOG_PATH_ENV, ProviderCatalog};
pub use error::CatalogError;
pub use provider::{ContractTerms, DiscountTier, Provider, ProviderStatus};
pub use source::{CatalogSource, EmbeddedCatalog, JsonFileCatalog, StaticCatalog};
