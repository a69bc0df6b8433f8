//! Discount Resolver.

use commcost_catalog::Provider;
use commcost_core::Volume;

/// Best discount `provider` grants at `volume`.
///
/// Takes the **maximum** percent among tiers whose threshold is at or below
/// `volume`, not the percent of the highest qualifying threshold: a schedule may
/// configure a lower threshold with a better rate and the customer already
/// qualifies for it. No qualifying tier (or no tiers) resolves to `0`.
///
/// Non-decreasing in `volume`: raising the volume only adds qualifying tiers.
pub fn resolve_discount(provider: &Provider, volume: Volume) -> f64 {
    provider
        .discount_tiers
        .iter()
        .filter(|tier| tier.applies_to(volume))
        .map(|tier| tier.discount_percent)
        .fold(0.0_f64, f64::max)
        .clamp(0.0, 100.0)
}

/// Unit price after applying `discount_percent`.
pub fn discounted_price(base_price: f64, discount_percent: f64) -> f64 {
    (base_price * (1.0 - discount_percent / 100.0)).max(0.0)
}
