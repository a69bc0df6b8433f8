//! Service kinds and per-service maps.

use core::ops::{Index, IndexMut};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Communication channel a provider can deliver.
///
/// Closed set: adding a kind means adding a field to [`ServiceMap`], which in
/// turn forces every pricing struct to be extended in lockstep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Sms,
    Voice,
    Whatsapp,
    Email,
}

impl ServiceKind {
    /// All kinds, in reporting order.
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::Sms,
        ServiceKind::Voice,
        ServiceKind::Whatsapp,
        ServiceKind::Email,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceKind::Sms => "sms",
            ServiceKind::Voice => "voice",
            ServiceKind::Whatsapp => "whatsapp",
            ServiceKind::Email => "email",
        }
    }

    /// Billing unit a unit price refers to.
    pub fn billing_unit(self) -> &'static str {
        match self {
            ServiceKind::Sms => "message",
            ServiceKind::Voice => "minute",
            ServiceKind::Whatsapp => "message",
            ServiceKind::Email => "1,000 messages",
        }
    }
}

impl core::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sms" => Ok(ServiceKind::Sms),
            "voice" => Ok(ServiceKind::Voice),
            "whatsapp" => Ok(ServiceKind::Whatsapp),
            "email" => Ok(ServiceKind::Email),
            other => Err(EngineError::validation(format!("unknown service kind: {other}"))),
        }
    }
}

/// One value per [`ServiceKind`].
///
/// Used for capability flags, unit prices, rate sheets and usage coefficients.
/// Every field is required on the wire; a payload missing a kind fails to
/// deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceMap<T> {
    pub sms: T,
    pub voice: T,
    pub whatsapp: T,
    pub email: T,
}

impl<T> ServiceMap<T> {
    pub fn new(sms: T, voice: T, whatsapp: T, email: T) -> Self {
        Self {
            sms,
            voice,
            whatsapp,
            email,
        }
    }

    /// Build a map by evaluating `f` once per kind.
    pub fn from_fn(mut f: impl FnMut(ServiceKind) -> T) -> Self {
        Self {
            sms: f(ServiceKind::Sms),
            voice: f(ServiceKind::Voice),
            whatsapp: f(ServiceKind::Whatsapp),
            email: f(ServiceKind::Email),
        }
    }

    pub fn get(&self, kind: ServiceKind) -> &T {
        match kind {
            ServiceKind::Sms => &self.sms,
            ServiceKind::Voice => &self.voice,
            ServiceKind::Whatsapp => &self.whatsapp,
            ServiceKind::Email => &self.email,
        }
    }

    pub fn get_mut(&mut self, kind: ServiceKind) -> &mut T {
        match kind {
            ServiceKind::Sms => &mut self.sms,
            ServiceKind::Voice => &mut self.voice,
            ServiceKind::Whatsapp => &mut self.whatsapp,
            ServiceKind::Email => &mut self.email,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(ServiceKind, &T) -> U) -> ServiceMap<U> {
        ServiceMap::from_fn(|kind| f(kind, self.get(kind)))
    }

    /// Iterate `(kind, value)` pairs in [`ServiceKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ServiceKind, &T)> + '_ {
        ServiceKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

impl<T> Index<ServiceKind> for ServiceMap<T> {
    type Output = T;

    fn index(&self, kind: ServiceKind) -> &Self::Output {
        self.get(kind)
    }
}

impl<T> IndexMut<ServiceKind> for ServiceMap<T> {
    fn index_mut(&mut self, kind: ServiceKind) -> &mut Self::Output {
        self.get_mut(kind)
    }
}
