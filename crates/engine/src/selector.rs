//! Provider Selector.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::{debug, warn};

use commcost_catalog::{Provider, ProviderCatalog};
use commcost_core::{EngineError, EngineResult, ProviderId, ServiceKind, Volume};

use crate::discount::{discounted_price, resolve_discount};

/// One eligible provider priced for a service at a volume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderQuote<'c> {
    #[serde(skip)]
    pub provider: &'c Provider,
    pub provider_id: ProviderId,
    pub service: ServiceKind,
    pub volume: Volume,
    pub base_unit_price: f64,
    pub discount_percent: f64,
    pub effective_unit_cost: f64,
}

fn quote<'c>(provider: &'c Provider, service: ServiceKind, volume: Volume) -> ProviderQuote<'c> {
    let base_unit_price = provider.unit_price(service);
    let discount_percent = resolve_discount(provider, volume);
    ProviderQuote {
        provider,
        provider_id: provider.id.clone(),
        service,
        volume,
        base_unit_price,
        discount_percent,
        effective_unit_cost: discounted_price(base_unit_price, discount_percent),
    }
}

/// Active providers able to deliver `service`, in catalog order.
pub fn eligible_providers(
    catalog: &ProviderCatalog,
    service: ServiceKind,
) -> impl Iterator<Item = &Provider> {
    catalog
        .list_providers()
        .iter()
        .filter(move |p| p.is_eligible_for(service))
}

/// Cheapest eligible provider for `service` at `volume`.
///
/// Ties go to the provider listed first in the catalog. `minimum_volume` contract
/// terms are advisory and do not affect eligibility.
pub fn select_optimal_provider(
    catalog: &ProviderCatalog,
    service: ServiceKind,
    volume: Volume,
) -> EngineResult<ProviderQuote<'_>> {
    let mut best: Option<ProviderQuote<'_>> = None;

    for provider in eligible_providers(catalog, service) {
        let candidate = quote(provider, service, volume);
        debug!(
            service = %service,
            volume = volume.get(),
            provider_id = %candidate.provider_id,
            discount_percent = candidate.discount_percent,
            effective_unit_cost = candidate.effective_unit_cost,
            "evaluated provider"
        );

        // Strict `<` keeps the earlier provider on ties.
        let better = match &best {
            None => true,
            Some(current) => candidate.effective_unit_cost < current.effective_unit_cost,
        };
        if better {
            best = Some(candidate);
        }
    }

    best.ok_or_else(|| {
        warn!(service = %service, volume = volume.get(), "no eligible provider");
        EngineError::no_eligible_provider(service, volume.get())
    })
}

/// Every eligible provider, cheapest first; equal costs keep catalog order.
///
/// The first entry is always the provider [`select_optimal_provider`] returns.
pub fn rank_providers(
    catalog: &ProviderCatalog,
    service: ServiceKind,
    volume: Volume,
) -> EngineResult<Vec<ProviderQuote<'_>>> {
    let mut quotes: Vec<ProviderQuote<'_>> = eligible_providers(catalog, service)
        .map(|p| quote(p, service, volume))
        .collect();

    if quotes.is_empty() {
        return Err(EngineError::no_eligible_provider(service, volume.get()));
    }

    // Stable sort: ties stay in catalog order.
    quotes.sort_by(|a, b| {
        a.effective_unit_cost
            .partial_cmp(&b.effective_unit_cost)
            .unwrap_or(Ordering::Equal)
    });
    Ok(quotes)
}
