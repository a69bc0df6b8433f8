//! Communications cost-optimization engine.
//!
//! Components, leaf-first:
//! - [`discount`]: best tier discount a provider grants at a volume.
//! - [`selector`]: cheapest eligible provider for a service at a volume.
//! - [`negotiation`]: simulated, volume-scaled discount offer.
//! - [`projection`]: multi-service cost projection over plan cohorts.
//!
//! Everything here is synchronous and pure over a read-only
//! [`ProviderCatalog`](commcost_catalog::ProviderCatalog).

pub mod config;
pub mod discount;
pub mod engine;
pub mod format;
pub mod negotiation;
pub mod projection;
pub mod selector;

pub use config::EngineConfig;
pub use discount::resolve_discount;
pub use engine::CostEngine;
pub use format::format_thousands;
pub use negotiation::{NegotiationResult, RateSheet};
pub use projection::{Cohort, CostProjection, ProjectionTotals, ServiceCostBreakdown};
pub use selector::ProviderQuote;
