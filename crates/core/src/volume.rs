//! Non-negative volumes.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Monthly units (messages, minutes, ...) or user counts.
///
/// Signed input is accepted at the boundary and rejected when negative; it is
/// never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "VolumeRecord", into = "u64")]
pub struct Volume(u64);

impl Volume {
    pub const ZERO: Volume = Volume(0);

    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    /// Validate a signed value, naming what it was for in the error.
    pub fn from_signed(value: i64, context: impl Into<String>) -> Result<Self, EngineError> {
        if value < 0 {
            return Err(EngineError::invalid_volume(value, context));
        }
        Ok(Self(value as u64))
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl core::fmt::Display for Volume {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for Volume {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Volume> for u64 {
    fn from(value: Volume) -> Self {
        value.0
    }
}

/// Wire shape of a volume: any JSON integer, so the full `u64` range is
/// accepted and negative values reach validation instead of a type error.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum VolumeRecord {
    Unsigned(u64),
    Signed(i64),
}

impl TryFrom<VolumeRecord> for Volume {
    type Error = EngineError;

    fn try_from(record: VolumeRecord) -> Result<Self, Self::Error> {
        match record {
            VolumeRecord::Unsigned(units) => Ok(Self(units)),
            VolumeRecord::Signed(value) => Self::from_signed(value, "volume"),
        }
    }
}

impl TryFrom<i64> for Volume {
    type Error = EngineError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_signed(value, "volume")
    }
}
