//! Negotiation Simulator.
//!
//! Produces a proposed, non-contractual discount offer scaled by how much volume
//! the customer is willing to commit. The offer ignores the provider's published
//! tier schedule entirely.

use serde::{Deserialize, Serialize};

use commcost_catalog::Provider;
use commcost_core::{EngineError, EngineResult, ProviderId, ServiceMap, Volume};

use crate::config::EngineConfig;
use crate::discount::discounted_price;
use crate::format::format_thousands;

/// Unit prices for all four service kinds.
pub type RateSheet = ServiceMap<f64>;

/// Apply one discount uniformly to every rate in the sheet.
pub fn discount_rate_sheet(rates: &RateSheet, discount_percent: f64) -> RateSheet {
    rates.map(|_, price| discounted_price(*price, discount_percent))
}

/// Outcome of a simulated negotiation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegotiationResult {
    pub provider_id: ProviderId,
    pub provider_name: String,
    pub current_rates: RateSheet,
    pub proposed_rates: RateSheet,
    /// Saturating score in `[0, 1]`.
    pub negotiation_power: f64,
    pub proposed_discount_percent: u64,
    pub expected_monthly_volume: Volume,
    pub minimum_annual_commitment: u64,
    pub summary: String,
}

/// `min(volume / saturation, 1.0)`.
pub fn negotiation_power(volume: Volume, saturation_volume: u64) -> f64 {
    if saturation_volume == 0 {
        return 1.0;
    }
    (volume.as_f64() / saturation_volume as f64).min(1.0)
}

/// `floor(negotiation_power × max_discount)`, in exact integer arithmetic.
pub fn proposed_discount_percent(volume: Volume, saturation_volume: u64, max_discount: u64) -> u64 {
    if saturation_volume == 0 {
        return max_discount;
    }
    let capped = volume.get().min(saturation_volume) as u128;
    (capped * max_discount as u128 / saturation_volume as u128) as u64
}

/// Simulate a rate negotiation with `provider` at `expected_monthly_volume`.
///
/// The proposed discount applies to all four unit prices, including services the
/// provider does not deliver.
pub fn simulate_negotiation(
    provider: &Provider,
    expected_monthly_volume: Volume,
    config: &EngineConfig,
) -> EngineResult<NegotiationResult> {
    let saturation = config.negotiation_saturation_volume;
    let power = negotiation_power(expected_monthly_volume, saturation);
    let discount = proposed_discount_percent(
        expected_monthly_volume,
        saturation,
        config.max_negotiated_discount_percent,
    );

    let minimum_annual_commitment = expected_monthly_volume.get().checked_mul(12).ok_or_else(|| {
        EngineError::validation(format!(
            "expected monthly volume {expected_monthly_volume} overflows the annual commitment"
        ))
    })?;

    let current_rates = provider.unit_pricing;
    let proposed_rates = discount_rate_sheet(&current_rates, discount as f64);

    let summary = format!(
        "Based on a committed volume of {} units per month, {} can offer a {}% discount \
         across all services (minimum annual commitment: {} units).",
        format_thousands(expected_monthly_volume.get()),
        provider.name,
        discount,
        format_thousands(minimum_annual_commitment),
    );

    Ok(NegotiationResult {
        provider_id: provider.id.clone(),
        provider_name: provider.name.clone(),
        current_rates,
        proposed_rates,
        negotiation_power: power,
        proposed_discount_percent: discount,
        expected_monthly_volume,
        minimum_annual_commitment,
        summary,
    })
}
