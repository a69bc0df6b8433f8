//! Engine tuning knobs.

use serde::{Deserialize, Serialize};

use commcost_core::{EngineError, EngineResult, ServiceMap};

/// Engine configuration.
///
/// Defaults reproduce the reference coefficients: per user per month, 100 SMS,
/// 50 voice minutes, 500 WhatsApp messages and 200 emails; negotiation power
/// saturates at one million monthly units; offers are capped at 25%.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Expected monthly usage per user, per service kind.
    pub usage_per_user: ServiceMap<u64>,
    /// Volume at which negotiation power reaches 1.0.
    pub negotiation_saturation_volume: u64,
    /// Discount offered at full negotiation power.
    pub max_negotiated_discount_percent: u64,
    /// Static advisory text attached to every projection.
    pub recommendations: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            usage_per_user: ServiceMap {
                sms: 100,
                voice: 50,
                whatsapp: 500,
                email: 200,
            },
            negotiation_saturation_volume: 1_000_000,
            max_negotiated_discount_percent: 25,
            recommendations: default_recommendations(),
        }
    }
}

fn default_recommendations() -> Vec<String> {
    [
        "Consolidate SMS and WhatsApp traffic with one provider to reach discount tiers sooner.",
        "Commit to annual volumes to lock in negotiated rates before renewal.",
        "Keep transactional and marketing email on separate sending infrastructure.",
        "Re-run this projection quarterly as tenant adoption grows.",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl EngineConfig {
    pub fn with_usage_per_user(mut self, usage: ServiceMap<u64>) -> Self {
        self.usage_per_user = usage;
        self
    }

    pub fn with_negotiation_saturation_volume(mut self, volume: u64) -> Self {
        self.negotiation_saturation_volume = volume;
        self
    }

    pub fn with_max_negotiated_discount_percent(mut self, percent: u64) -> Self {
        self.max_negotiated_discount_percent = percent;
        self
    }

    pub fn with_recommendations<I, S>(mut self, recommendations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recommendations = recommendations.into_iter().map(Into::into).collect();
        self
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.negotiation_saturation_volume == 0 {
            return Err(EngineError::validation(
                "negotiation_saturation_volume must be greater than zero",
            ));
        }
        if self.max_negotiated_discount_percent > 100 {
            return Err(EngineError::validation(format!(
                "max_negotiated_discount_percent must be within [0, 100] (got {})",
                self.max_negotiated_discount_percent
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = EngineConfig::default();
        config.validate().unwrap();
        assert_eq!(config.usage_per_user.whatsapp, 500);
        assert_eq!(config.usage_per_user.email, 200);
        assert_eq!(config.usage_per_user.voice, 50);
        assert_eq!(config.usage_per_user.sms, 100);
        assert!(!config.recommendations.is_empty());
    }

    #[test]
    fn zero_saturation_volume_is_rejected() {
        let config = EngineConfig::default().with_negotiation_saturation_volume(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn discount_cap_above_one_hundred_is_rejected() {
        let config = EngineConfig::default().with_max_negotiated_discount_percent(101);
        assert!(config.validate().is_err());
    }
}
