//! Cost Projector.
//!
//! Turns subscription-plan cohorts into per-service monthly volumes, prices each
//! service with the optimal provider, simulates a negotiation at that volume and
//! aggregates current cost, negotiated cost and savings.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use commcost_catalog::ProviderCatalog;
use commcost_core::{EngineError, EngineResult, ProviderId, ServiceKind, ServiceMap, Volume};

use crate::config::EngineConfig;
use crate::negotiation::simulate_negotiation;
use crate::selector::select_optimal_provider;

/// Wire shape of a cohort, before validation.
#[derive(Debug, Deserialize)]
struct CohortRecord {
    #[serde(default)]
    plan: String,
    expected_users: i64,
}

/// A group of prospective users on one subscription plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CohortRecord")]
pub struct Cohort {
    /// Informational plan label (e.g. "starter"); empty when not given.
    pub plan: String,
    pub expected_users: u64,
}

impl Cohort {
    /// Validate a cohort; negative user counts are rejected, not clamped.
    pub fn new(plan: impl Into<String>, expected_users: i64) -> EngineResult<Self> {
        let plan = plan.into();
        let users = Volume::from_signed(expected_users, format!("expected users of cohort '{plan}'"))?;
        Ok(Self {
            plan,
            expected_users: users.get(),
        })
    }
}

impl TryFrom<CohortRecord> for Cohort {
    type Error = EngineError;

    fn try_from(record: CohortRecord) -> Result<Self, Self::Error> {
        Self::new(record.plan, record.expected_users)
    }
}

/// Cost line for one service kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceCostBreakdown {
    pub service: ServiceKind,
    pub provider_id: ProviderId,
    pub provider_name: String,
    pub volume: Volume,
    /// Tier discount the provider already grants at this volume (informational).
    pub catalog_discount_percent: f64,
    pub negotiated_discount_percent: u64,
    pub current_cost: f64,
    pub negotiated_cost: f64,
    pub savings: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ProjectionTotals {
    pub current_cost: f64,
    pub negotiated_cost: f64,
    pub savings: f64,
    /// `savings / current_cost × 100`, or 0 when nothing is spent.
    pub savings_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostProjection {
    pub total_users: u64,
    pub monthly_volumes: ServiceMap<Volume>,
    /// One line per kind, in [`ServiceKind::ALL`] order.
    pub breakdown: Vec<ServiceCostBreakdown>,
    pub totals: ProjectionTotals,
    /// Static guidance; not derived from the numbers.
    pub recommendations: Vec<String>,
}

impl CostProjection {
    pub fn line(&self, service: ServiceKind) -> Option<&ServiceCostBreakdown> {
        self.breakdown.iter().find(|l| l.service == service)
    }
}

fn total_users(cohorts: &[Cohort]) -> EngineResult<u64> {
    cohorts.iter().try_fold(0u64, |acc, c| {
        acc.checked_add(c.expected_users).ok_or_else(|| {
            EngineError::invalid_volume(
                i64::try_from(c.expected_users).unwrap_or(i64::MAX),
                format!("expected users of cohort '{}': total overflows", c.plan),
            )
        })
    })
}

fn monthly_volumes(config: &EngineConfig, total_users: u64) -> EngineResult<ServiceMap<Volume>> {
    let mut volumes = ServiceMap::<Volume>::default();
    for kind in ServiceKind::ALL {
        let per_user = config.usage_per_user[kind];
        let units = per_user.checked_mul(total_users).ok_or_else(|| {
            EngineError::validation(format!(
                "{kind} volume overflows ({per_user} per user x {total_users} users)"
            ))
        })?;
        volumes[kind] = Volume::new(units);
    }
    Ok(volumes)
}

/// Savings of one line; negative savings are an error, never clamped to zero.
fn check_savings(
    service: ServiceKind,
    provider_id: &ProviderId,
    volume: Volume,
    current_cost: f64,
    negotiated_cost: f64,
) -> EngineResult<f64> {
    let savings = current_cost - negotiated_cost;
    if savings < 0.0 {
        warn!(
            service = %service,
            provider_id = %provider_id,
            volume = volume.get(),
            current_cost,
            negotiated_cost,
            "negotiated cost exceeds current cost"
        );
        return Err(EngineError::InconsistentSavings {
            service,
            provider_id: provider_id.clone(),
            volume: volume.get(),
            current_cost,
            negotiated_cost,
        });
    }
    Ok(savings)
}

fn project_service(
    catalog: &ProviderCatalog,
    config: &EngineConfig,
    service: ServiceKind,
    volume: Volume,
) -> EngineResult<ServiceCostBreakdown> {
    let quote = select_optimal_provider(catalog, service, volume)?;
    let negotiation = simulate_negotiation(quote.provider, volume, config)?;

    // Cost is `volume × unit price` in the catalog's billing unit.
    let current_cost = volume.as_f64() * quote.base_unit_price;
    let negotiated_cost = volume.as_f64() * negotiation.proposed_rates[service];
    let savings = check_savings(service, &quote.provider_id, volume, current_cost, negotiated_cost)?;

    Ok(ServiceCostBreakdown {
        service,
        provider_id: quote.provider_id,
        provider_name: quote.provider.name.clone(),
        volume,
        catalog_discount_percent: quote.discount_percent,
        negotiated_discount_percent: negotiation.proposed_discount_percent,
        current_cost,
        negotiated_cost,
        savings,
    })
}

/// Project monthly communications cost for `cohorts`.
///
/// Zero users is not special-cased: every stage still runs and yields zeros.
pub fn project_costs(
    catalog: &ProviderCatalog,
    config: &EngineConfig,
    cohorts: &[Cohort],
) -> EngineResult<CostProjection> {
    let total_users = total_users(cohorts)?;
    let monthly_volumes = monthly_volumes(config, total_users)?;

    let breakdown = ServiceKind::ALL
        .into_iter()
        .map(|kind| project_service(catalog, config, kind, monthly_volumes[kind]))
        .collect::<EngineResult<Vec<_>>>()?;

    let mut totals = ProjectionTotals::default();
    for line in &breakdown {
        totals.current_cost += line.current_cost;
        totals.negotiated_cost += line.negotiated_cost;
        totals.savings += line.savings;
    }
    totals.savings_percent = if totals.current_cost > 0.0 {
        totals.savings / totals.current_cost * 100.0
    } else {
        0.0
    };

    info!(
        cohorts = cohorts.len(),
        total_users,
        current_cost = totals.current_cost,
        negotiated_cost = totals.negotiated_cost,
        savings = totals.savings,
        "cost projection computed"
    );

    Ok(CostProjection {
        total_users,
        monthly_volumes,
        breakdown,
        totals,
        recommendations: config.recommendations.clone(),
    })
}
