//! `CostEngine`: the catalog-bound entry point to every engine operation.

use tracing::{info, instrument};

use commcost_catalog::{Provider, ProviderCatalog};
use commcost_core::{EngineResult, ProviderId, ServiceKind, Volume};

use crate::config::EngineConfig;
use crate::discount;
use crate::negotiation::{self, NegotiationResult};
use crate::projection::{self, Cohort, CostProjection};
use crate::selector::{self, ProviderQuote};

/// Entry point tying the catalog and configuration to the four components.
///
/// Holds no mutable state: every call is a pure function of its arguments, the
/// borrowed catalog and the configuration. Cheap to construct per request.
#[derive(Debug, Clone)]
pub struct CostEngine<'c> {
    catalog: &'c ProviderCatalog,
    config: EngineConfig,
}

impl<'c> CostEngine<'c> {
    pub fn new(catalog: &'c ProviderCatalog, config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    /// Engine with the default configuration.
    pub fn with_defaults(catalog: &'c ProviderCatalog) -> Self {
        Self {
            catalog,
            config: EngineConfig::default(),
        }
    }

    pub fn catalog(&self) -> &'c ProviderCatalog {
        self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn resolve_discount(&self, provider: &Provider, volume: Volume) -> f64 {
        discount::resolve_discount(provider, volume)
    }

    #[instrument(skip(self), err)]
    pub fn select_optimal_provider(
        &self,
        service: ServiceKind,
        volume: Volume,
    ) -> EngineResult<ProviderQuote<'c>> {
        let quote = selector::select_optimal_provider(self.catalog, service, volume)?;
        info!(
            provider_id = %quote.provider_id,
            effective_unit_cost = quote.effective_unit_cost,
            "selected provider"
        );
        Ok(quote)
    }

    #[instrument(skip(self), err)]
    pub fn rank_providers(
        &self,
        service: ServiceKind,
        volume: Volume,
    ) -> EngineResult<Vec<ProviderQuote<'c>>> {
        selector::rank_providers(self.catalog, service, volume)
    }

    #[instrument(skip(self), err)]
    pub fn simulate_negotiation(
        &self,
        provider_id: &ProviderId,
        expected_monthly_volume: Volume,
    ) -> EngineResult<NegotiationResult> {
        let provider = self.catalog.find_provider(provider_id)?;
        let result = negotiation::simulate_negotiation(provider, expected_monthly_volume, &self.config)?;
        info!(
            proposed_discount_percent = result.proposed_discount_percent,
            minimum_annual_commitment = result.minimum_annual_commitment,
            "negotiation simulated"
        );
        Ok(result)
    }

    #[instrument(skip(self, cohorts), fields(cohorts = cohorts.len()), err)]
    pub fn project_costs(&self, cohorts: &[Cohort]) -> EngineResult<CostProjection> {
        projection::project_costs(self.catalog, &self.config, cohorts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commcost_catalog::EmbeddedCatalog;
    use commcost_core::EngineError;

    fn catalog() -> ProviderCatalog {
        ProviderCatalog::load(&EmbeddedCatalog).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let catalog = catalog();
        let config = EngineConfig::default().with_negotiation_saturation_volume(0);
        assert!(CostEngine::new(&catalog, config).is_err());
    }

    #[test]
    fn unknown_provider_fails_negotiation() {
        let catalog = catalog();
        let engine = CostEngine::with_defaults(&catalog);
        let err = engine
            .simulate_negotiation(&"nobody".parse().unwrap(), Volume::new(10_000))
            .unwrap_err();
        match err {
            EngineError::ProviderNotFound { provider_id } => assert_eq!(provider_id.as_str(), "nobody"),
            _ => panic!("Expected ProviderNotFound"),
        }
    }

    #[test]
    fn negotiation_is_available_for_non_active_providers() {
        // The simulator looks providers up by id; status only matters for selection.
        let catalog = catalog();
        let engine = CostEngine::with_defaults(&catalog);
        let result = engine
            .simulate_negotiation(&"plivo".parse().unwrap(), Volume::new(400_000))
            .unwrap();
        assert_eq!(result.proposed_discount_percent, 10);
    }

    #[test]
    fn embedded_catalog_covers_every_service() {
        let catalog = catalog();
        let engine = CostEngine::with_defaults(&catalog);
        for kind in ServiceKind::ALL {
            let quote = engine.select_optimal_provider(kind, Volume::new(10_000)).unwrap();
            assert!(quote.provider.is_eligible_for(kind));
        }
    }
}
