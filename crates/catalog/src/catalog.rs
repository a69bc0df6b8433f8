use std::collections::HashSet;

use tracing::{info, warn};

use commcost_core::{EngineError, EngineResult, ProviderId};

use crate::error::CatalogError;
use crate::provider::Provider;
use crate::source::{CatalogSource, EmbeddedCatalog, JsonFileCatalog};

/// Environment variable pointing at a JSON catalog file overriding the embedded one.
pub const CATALOG_PATH_ENV: &str = "COMMCOST_CATALOG_PATH";

/// Immutable, validated provider list.
///
/// Order is configuration order and is what selection tie-breaks on. Share it by
/// reference (or `Arc`) across concurrent callers; it needs no synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderCatalog {
    providers: Vec<Provider>,
}

impl ProviderCatalog {
    /// Validate and wrap a provider list.
    ///
    /// Rejects duplicate ids and any provider failing [`Provider::validate`].
    pub fn new(providers: Vec<Provider>) -> EngineResult<Self> {
        let mut seen: HashSet<&ProviderId> = HashSet::with_capacity(providers.len());
        for provider in &providers {
            if !seen.insert(&provider.id) {
                return Err(EngineError::validation(format!(
                    "duplicate provider id: {}",
                    provider.id
                )));
            }
            provider.validate()?;
        }
        Ok(Self { providers })
    }

    /// Load and validate a catalog from `source`.
    pub fn load(source: &impl CatalogSource) -> Result<Self, CatalogError> {
        let providers = source.load()?;
        let catalog = Self::new(providers)?;
        info!(
            source = %source.describe(),
            providers = catalog.len(),
            active = catalog.providers.iter().filter(|p| p.is_active()).count(),
            "provider catalog loaded"
        );
        Ok(catalog)
    }

    /// Load from `COMMCOST_CATALOG_PATH` when set, otherwise the embedded catalog.
    pub fn from_env() -> Result<Self, CatalogError> {
        match std::env::var(CATALOG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::load(&JsonFileCatalog::new(path)),
            Ok(_) => {
                warn!("{CATALOG_PATH_ENV} is set but empty; using embedded catalog");
                Self::load(&EmbeddedCatalog)
            }
            Err(_) => Self::load(&EmbeddedCatalog),
        }
    }

    /// Providers in configuration order.
    pub fn list_providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn find_provider(&self, id: &ProviderId) -> EngineResult<&Provider> {
        self.providers
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| EngineError::provider_not_found(id.clone()))
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
