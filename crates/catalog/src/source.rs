//! Where a catalog comes from.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CatalogError;
use crate::provider::Provider;

/// Built-in catalog compiled into the binary.
const EMBEDDED_CATALOG: &str = include_str!("../config/providers.json");

/// On-disk / embedded catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    providers: Vec<Provider>,
}

fn parse_document(raw: &str) -> Result<Vec<Provider>, CatalogError> {
    let doc: CatalogDocument = serde_json::from_str(raw)?;
    Ok(doc.providers)
}

/// Catalog load interface.
///
/// Sources only produce raw provider records; validation happens when the
/// [`ProviderCatalog`](crate::ProviderCatalog) is built.
pub trait CatalogSource {
    /// Human-readable origin, for logs.
    fn describe(&self) -> String;

    fn load(&self) -> Result<Vec<Provider>, CatalogError>;
}

/// The default provider list shipped with the engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedCatalog;

impl CatalogSource for EmbeddedCatalog {
    fn describe(&self) -> String {
        "embedded".to_string()
    }

    fn load(&self) -> Result<Vec<Provider>, CatalogError> {
        parse_document(EMBEDDED_CATALOG)
    }
}

/// A JSON catalog file (`{ "providers": [...] }`).
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileCatalog {
    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }

    fn load(&self) -> Result<Vec<Provider>, CatalogError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_document(&raw)
    }
}

/// An in-memory provider list handed over by the caller.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    providers: Vec<Provider>,
}

impl StaticCatalog {
    pub fn new(providers: Vec<Provider>) -> Self {
        Self { providers }
    }
}

impl CatalogSource for StaticCatalog {
    fn describe(&self) -> String {
        format!("static({} providers)", self.providers.len())
    }

    fn load(&self) -> Result<Vec<Provider>, CatalogError> {
        Ok(self.providers.clone())
    }
}
