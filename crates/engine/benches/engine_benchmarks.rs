use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use commcost_catalog::{ContractTerms, DiscountTier, EmbeddedCatalog, Provider, ProviderCatalog, ProviderStatus};
use commcost_core::{ServiceKind, ServiceMap, Volume};
use commcost_engine::{Cohort, CostEngine};

/// Synthetic catalog with `n` providers, every third one inactive.
fn synthetic_catalog(n: usize) -> ProviderCatalog {
    let providers = (0..n)
        .map(|i| {
            let price = 0.005 + (i % 17) as f64 * 0.0003;
            Provider {
                id: format!("provider-{i}").parse().unwrap(),
                name: format!("Provider {i}"),
                country: "US".to_string(),
                capabilities: ServiceMap::new(true, i % 2 == 0, i % 3 == 0, i % 5 == 0),
                unit_pricing: ServiceMap::new(price, price * 2.0, price * 0.6, price * 100.0),
                status: if i % 3 == 2 {
                    ProviderStatus::Inactive
                } else {
                    ProviderStatus::Active
                },
                discount_tiers: vec![
                    DiscountTier::new(10_000 * (i as u64 % 7), 3.0),
                    DiscountTier::new(250_000, 8.0 + (i % 4) as f64),
                    DiscountTier::new(1_000_000, 15.0),
                ],
                contract_terms: ContractTerms::new(1_000),
            }
        })
        .collect();
    ProviderCatalog::new(providers).unwrap()
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_optimal_provider");

    for size in [8usize, 64, 512] {
        let catalog = synthetic_catalog(size);
        let engine = CostEngine::with_defaults(&catalog);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                engine
                    .select_optimal_provider(black_box(ServiceKind::Sms), black_box(Volume::new(300_000)))
                    .unwrap()
            });
        });
    }

    group.finish();
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("project_costs");

    let embedded = ProviderCatalog::load(&EmbeddedCatalog).unwrap();
    let engine = CostEngine::with_defaults(&embedded);
    let cohorts = vec![
        Cohort::new("starter", 1_200).unwrap(),
        Cohort::new("professional", 600).unwrap(),
        Cohort::new("enterprise", 200).unwrap(),
    ];
    group.bench_function("embedded_catalog", |b| {
        b.iter(|| engine.project_costs(black_box(&cohorts)).unwrap());
    });

    let large = synthetic_catalog(512);
    let engine = CostEngine::with_defaults(&large);
    group.bench_function("synthetic_512", |b| {
        b.iter(|| engine.project_costs(black_box(&cohorts)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_selection, bench_projection);
criterion_main!(benches);
