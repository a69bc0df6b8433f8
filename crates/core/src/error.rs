//! Engine error model.

use thiserror::Error;

use crate::id::ProviderId;
use crate::service::ServiceKind;

/// Result type used across the engine.
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine-level error.
///
/// Every variant is a local, recoverable condition. Each one carries enough
/// context (service kind, volume, provider id) for a caller to react without
/// re-running the computation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    /// No active provider in the catalog can deliver the requested service.
    #[error("no eligible provider for {service} at volume {volume}")]
    NoEligibleProvider { service: ServiceKind, volume: u64 },

    /// A provider id did not resolve in the catalog.
    #[error("provider not found: {provider_id}")]
    ProviderNotFound { provider_id: ProviderId },

    /// A negative volume (or user count) was supplied.
    #[error("invalid volume {value} for {context}: volumes must be non-negative")]
    InvalidVolume { value: i64, context: String },

    /// A projection produced negative savings (discount schedule inversion).
    #[error(
        "inconsistent savings for {service} via {provider_id} at volume {volume}: \
         negotiated cost {negotiated_cost} exceeds current cost {current_cost}"
    )]
    InconsistentSavings {
        service: ServiceKind,
        provider_id: ProviderId,
        volume: u64,
        current_cost: f64,
        negotiated_cost: f64,
    },

    /// Boundary data was absent or malformed.
    #[error("validation failed: {0}")]
    Validation(String),
}

impl EngineError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_volume(value: i64, context: impl Into<String>) -> Self {
        Self::InvalidVolume {
            value,
            context: context.into(),
        }
    }

    pub fn provider_not_found(provider_id: ProviderId) -> Self {
        Self::ProviderNotFound { provider_id }
    }

    pub fn no_eligible_provider(service: ServiceKind, volume: u64) -> Self {
        Self::NoEligibleProvider { service, volume }
    }
}
