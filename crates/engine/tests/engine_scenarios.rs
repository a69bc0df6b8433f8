use std::sync::Arc;
use std::thread;

use commcost_catalog::{
    ContractTerms, DiscountTier, EmbeddedCatalog, Provider, ProviderCatalog, ProviderStatus, StaticCatalog,
};
use commcost_core::{EngineError, ServiceKind, ServiceMap, Volume};
use commcost_engine::{Cohort, CostEngine, EngineConfig};

fn sms_only(id: &str, sms_price: f64, tiers: Vec<DiscountTier>) -> Provider {
    Provider {
        id: id.parse().unwrap(),
        name: format!("Provider {}", id.to_uppercase()),
        country: "US".to_string(),
        capabilities: ServiceMap::new(true, false, false, false),
        unit_pricing: ServiceMap::new(sms_price, 0.0, 0.0, 0.0),
        status: ProviderStatus::Active,
        discount_tiers: tiers,
        contract_terms: ContractTerms::new(0),
    }
}

fn ab_catalog() -> ProviderCatalog {
    ProviderCatalog::load(&StaticCatalog::new(vec![
        sms_only("a", 0.03, vec![DiscountTier::new(50_000, 10.0)]),
        sms_only("b", 0.025, vec![]),
    ]))
    .unwrap()
}

#[test]
fn sms_selection_below_and_across_tier() {
    commcost_observability::init();
    let catalog = ab_catalog();
    let engine = CostEngine::with_defaults(&catalog);

    let below = engine.select_optimal_provider(ServiceKind::Sms, Volume::new(10_000)).unwrap();
    assert_eq!(below.provider_id.as_str(), "b");
    assert!((below.effective_unit_cost - 0.025).abs() < 1e-12);

    // A crosses its 50k tier (0.027) but B (0.025) still wins.
    let across = engine.select_optimal_provider(ServiceKind::Sms, Volume::new(60_000)).unwrap();
    assert_eq!(across.provider_id.as_str(), "b");

    let a = catalog.find_provider(&"a".parse().unwrap()).unwrap();
    assert_eq!(engine.resolve_discount(a, Volume::new(60_000)), 10.0);
}

#[test]
fn email_without_capable_provider_fails() {
    let catalog = ab_catalog();
    let engine = CostEngine::with_defaults(&catalog);
    let err = engine
        .select_optimal_provider(ServiceKind::Email, Volume::new(25_000))
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::NoEligibleProvider {
            service: ServiceKind::Email,
            volume: 25_000
        }
    );
}

#[test]
fn negotiation_saturates_at_twenty_five_percent() {
    let catalog = ab_catalog();
    let engine = CostEngine::with_defaults(&catalog);
    let result = engine
        .simulate_negotiation(&"a".parse().unwrap(), Volume::new(1_500_000))
        .unwrap();
    assert_eq!(result.negotiation_power, 1.0);
    assert_eq!(result.proposed_discount_percent, 25);
    assert_eq!(result.minimum_annual_commitment, 18_000_000);
    assert!(result.summary.contains("1,500,000"));
    assert!((result.proposed_rates.sms - 0.0225).abs() < 1e-12);
}

#[test]
fn selection_is_idempotent() {
    let catalog = ProviderCatalog::load(&EmbeddedCatalog).unwrap();
    let engine = CostEngine::with_defaults(&catalog);
    for kind in ServiceKind::ALL {
        let first = engine.select_optimal_provider(kind, Volume::new(300_000)).unwrap();
        let second = engine.select_optimal_provider(kind, Volume::new(300_000)).unwrap();
        assert_eq!(first.provider_id, second.provider_id);
    }
}

#[test]
fn embedded_catalog_projection_end_to_end() {
    let catalog = ProviderCatalog::load(&EmbeddedCatalog).unwrap();
    let engine = CostEngine::new(&catalog, EngineConfig::default()).unwrap();

    let cohorts: Vec<Cohort> = serde_json::from_str(
        r#"[
            { "plan": "starter", "expected_users": 1200 },
            { "plan": "professional", "expected_users": 600 },
            { "plan": "enterprise", "expected_users": 200 }
        ]"#,
    )
    .unwrap();

    let projection = engine.project_costs(&cohorts).unwrap();
    assert_eq!(projection.total_users, 2_000);
    assert_eq!(projection.breakdown.len(), 4);

    for line in &projection.breakdown {
        let provider = catalog.find_provider(&line.provider_id).unwrap();
        assert!(provider.is_eligible_for(line.service));
        assert!(line.savings >= 0.0);
        assert!(line.negotiated_cost <= line.current_cost);
    }

    // 2,000 users × 500 WhatsApp messages = 1,000,000 → full negotiation power.
    let whatsapp = projection.line(ServiceKind::Whatsapp).unwrap();
    assert_eq!(whatsapp.volume, Volume::new(1_000_000));
    assert_eq!(whatsapp.negotiated_discount_percent, 25);

    // Inactive MessageBird is cheaper on paper but never selected.
    assert!(projection.breakdown.iter().all(|l| l.provider_id.as_str() != "messagebird"));

    let json = serde_json::to_value(&projection).unwrap();
    assert_eq!(json["breakdown"][0]["service"], "sms");
    assert!(json["recommendations"].as_array().is_some_and(|r| !r.is_empty()));
}

#[test]
fn zero_users_project_to_zero_with_embedded_catalog() {
    let catalog = ProviderCatalog::load(&EmbeddedCatalog).unwrap();
    let engine = CostEngine::with_defaults(&catalog);
    let projection = engine.project_costs(&[Cohort::new("trial", 0).unwrap()]).unwrap();
    assert_eq!(projection.totals.current_cost, 0.0);
    assert_eq!(projection.totals.negotiated_cost, 0.0);
    assert_eq!(projection.totals.savings, 0.0);
    assert!(projection.breakdown.iter().all(|l| l.volume == Volume::ZERO));
}

#[test]
fn negative_volume_is_rejected_at_the_boundary() {
    let err = Volume::try_from(-100i64).unwrap_err();
    assert!(matches!(err, EngineError::InvalidVolume { value: -100, .. }));
}

#[test]
fn shared_catalog_serves_concurrent_projections() {
    let catalog = Arc::new(ProviderCatalog::load(&EmbeddedCatalog).unwrap());

    let handles: Vec<_> = (0..4u32)
        .map(|i| {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                let engine = CostEngine::with_defaults(&catalog);
                let cohorts = vec![Cohort::new("team", 100 * (i as i64 + 1)).unwrap()];
                engine.project_costs(&cohorts).unwrap().totals
            })
        })
        .collect();

    let totals: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for pair in totals.windows(2) {
        assert!(pair[0].current_cost < pair[1].current_cost);
    }

    // Same request again on this thread: identical result.
    let engine = CostEngine::with_defaults(&catalog);
    let again = engine.project_costs(&[Cohort::new("team", 100).unwrap()]).unwrap();
    assert_eq!(again.totals, totals[0]);
}
