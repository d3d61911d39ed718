//! Benchmarks for the hot path: enforcement and combination.

use ascent_core::constants::{MIN_STEP, SCORE_FLOOR, SYNERGY_WINDOW};
use ascent_core::types::{MetricField, MetricVector};
use ascent_scoring::aggregation::EnvironmentCombiner;
use ascent_scoring::enforcement::ProgressiveEnforcer;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rustc_hash::FxHashMap;

fn bench_enforce(c: &mut Criterion) {
    let enforcer = ProgressiveEnforcer::new(MIN_STEP);
    let previous = MetricVector::uniform(0.90);
    let mut current = MetricVector::uniform(0.91);
    current.set(MetricField::Quantum, 0.88);
    current.set(MetricField::Idle, 0.87);

    c.bench_function("enforce_with_adjustments", |b| {
        b.iter(|| {
            enforcer.enforce(
                black_box("local"),
                black_box(&current),
                black_box(Some(&previous)),
            )
        })
    });
}

fn bench_combine(c: &mut Criterion) {
    let mut weights = FxHashMap::default();
    weights.insert("local".to_string(), 0.25);
    weights.insert("app_engine".to_string(), 0.35);
    weights.insert("cloud_run".to_string(), 0.40);
    let combiner = EnvironmentCombiner::new(weights, SCORE_FLOOR, SYNERGY_WINDOW);

    let mut scalars = FxHashMap::default();
    scalars.insert("local".to_string(), 0.90);
    scalars.insert("app_engine".to_string(), 0.92);
    scalars.insert("cloud_run".to_string(), 0.95);

    c.bench_function("combine_three_environments", |b| {
        b.iter(|| combiner.combine(black_box(&scalars)))
    });
}

criterion_group!(benches, bench_enforce, bench_combine);
criterion_main!(benches);
