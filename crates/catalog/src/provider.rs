use serde::{Deserialize, Serialize};

use commcost_core::{EngineError, ProviderId, ServiceKind, ServiceMap, Volume};

/// Provider participation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderStatus {
    Active,
    Negotiating,
    Inactive,
}

/// Volume-based discount step: at or above `volume_threshold` monthly units the
/// provider grants `discount_percent` off its unit prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountTier {
    pub volume_threshold: u64,
    pub discount_percent: f64,
}

impl DiscountTier {
    pub fn new(volume_threshold: u64, discount_percent: f64) -> Self {
        Self {
            volume_threshold,
            discount_percent,
        }
    }

    pub fn applies_to(&self, volume: Volume) -> bool {
        self.volume_threshold <= volume.get()
    }
}

fn default_duration_months() -> u32 {
    12
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Contract terms as published by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractTerms {
    /// Advisory floor below which the provider is not normally engaged.
    /// Not an eligibility filter.
    pub minimum_volume: u64,
    #[serde(default = "default_duration_months")]
    pub duration_months: u32,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl ContractTerms {
    pub fn new(minimum_volume: u64) -> Self {
        Self {
            minimum_volume,
            duration_months: default_duration_months(),
            currency: default_currency(),
        }
    }
}

/// An external communications vendor.
///
/// Discount tiers are scoped to the whole provider: one schedule applies to every
/// service kind it delivers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: ProviderId,
    pub name: String,
    pub country: String,
    pub capabilities: ServiceMap<bool>,
    /// SMS per message, voice per minute, WhatsApp per message, email per 1,000 messages.
    pub unit_pricing: ServiceMap<f64>,
    pub status: ProviderStatus,
    pub discount_tiers: Vec<DiscountTier>,
    pub contract_terms: ContractTerms,
}

impl Provider {
    pub fn is_active(&self) -> bool {
        self.status == ProviderStatus::Active
    }

    pub fn supports(&self, service: ServiceKind) -> bool {
        self.capabilities[service]
    }

    /// Active and capable of delivering `service`.
    pub fn is_eligible_for(&self, service: ServiceKind) -> bool {
        self.is_active() && self.supports(service)
    }

    /// Catalog (undiscounted) price of one billing unit of `service`.
    pub fn unit_price(&self, service: ServiceKind) -> f64 {
        self.unit_pricing[service]
    }

    /// Check field-level invariants.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.name.trim().is_empty() {
            return Err(EngineError::validation(format!("provider {}: name cannot be empty", self.id)));
        }

        if self.country.trim().is_empty() {
            return Err(EngineError::validation(format!(
                "provider {}: country cannot be empty",
                self.id
            )));
        }

        for (kind, price) in self.unit_pricing.iter() {
            if !(price.is_finite() && *price >= 0.0) {
                return Err(EngineError::validation(format!(
                    "provider {}: {kind} unit price (per {}) must be a finite non-negative number (got {price})",
                    self.id,
                    kind.billing_unit()
                )));
            }
        }

        for tier in &self.discount_tiers {
            let pct = tier.discount_percent;
            if !(pct.is_finite() && (0.0..=100.0).contains(&pct)) {
                return Err(EngineError::validation(format!(
                    "provider {}: discount percent must be within [0, 100] (got {pct} at threshold {})",
                    self.id, tier.volume_threshold
                )));
            }
        }

        if self.contract_terms.currency.trim().is_empty() {
            return Err(EngineError::validation(format!(
                "provider {}: contract currency cannot be empty",
                self.id
            )));
        }

        Ok(())
    }
}
