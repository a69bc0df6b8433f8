//! `commcost-core` — shared building blocks for the cost-optimization engine.
//!
//! This crate contains **pure** primitives (no IO, no logging setup): service
//! kinds, per-service maps, validated volumes, provider identifiers and the
//! error model every other crate reports through.

pub mod error;
pub mod id;
pub mod service;
pub mod volume;

pub use error::{EngineError, EngineResult};
pub use id::ProviderId;
pub use service::{ServiceKind, ServiceMap};
pub use volume::Volume;
