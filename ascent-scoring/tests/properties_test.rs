//! Property tests for the scoring invariants.

use ascent_core::constants::{MIN_STEP, SCORE_FLOOR, SYNERGY_WINDOW};
use ascent_core::types::{MetricField, MetricVector};
use ascent_scoring::aggregation::{environment_score, EnvironmentCombiner};
use ascent_scoring::enforcement::ProgressiveEnforcer;
use proptest::array::uniform8;
use proptest::prelude::*;
use rustc_hash::FxHashMap;

fn vector_from(values: [f64; 8]) -> MetricVector {
    let mut vector = MetricVector::uniform(0.0);
    for (field, value) in MetricField::ALL.iter().zip(values) {
        vector.set(*field, value);
    }
    vector
}

proptest! {
    /// Enforcement never lets a field fall below its stored predecessor.
    #[test]
    fn enforced_fields_never_decrease(
        previous in uniform8(0.0f64..=1.0),
        current in uniform8(0.0f64..=1.0),
    ) {
        let previous = vector_from(previous);
        let current = vector_from(current);
        let enforcer = ProgressiveEnforcer::new(MIN_STEP);

        let (adjusted, batch) = enforcer.enforce("local", &current, Some(&previous));

        prop_assert_eq!(batch.len(), 8);
        for field in MetricField::ALL {
            prop_assert!(adjusted.get(field) >= previous.get(field));
            prop_assert!(adjusted.get(field) >= current.get(field));
        }
    }

    /// A bumped field always lands exactly one step above its predecessor.
    #[test]
    fn adjustment_arithmetic_holds(
        previous in uniform8(0.0f64..=1.0),
        current in uniform8(0.0f64..=1.0),
    ) {
        let previous = vector_from(previous);
        let current = vector_from(current);
        let enforcer = ProgressiveEnforcer::new(MIN_STEP);

        let (adjusted, batch) = enforcer.enforce("local", &current, Some(&previous));

        for entry in &batch {
            if entry.adjusted {
                let expected = entry.previous_value + MIN_STEP;
                prop_assert!((adjusted.get(entry.field) - expected).abs() < 1e-12);
                let expected_amount = (entry.previous_value - entry.raw_value) + MIN_STEP;
                prop_assert!((entry.adjustment - expected_amount).abs() < 1e-12);
            }
        }
    }

    /// First-run enforcement is the identity.
    #[test]
    fn baseline_enforcement_is_identity(current in uniform8(0.0f64..=1.0)) {
        let current = vector_from(current);
        let enforcer = ProgressiveEnforcer::new(MIN_STEP);
        let (adjusted, batch) = enforcer.enforce("local", &current, None);
        prop_assert_eq!(adjusted, current);
        prop_assert!(batch.is_empty());
    }

    /// Aggregation never reports below the floor.
    #[test]
    fn environment_score_respects_floor(values in uniform8(0.0f64..=1.0)) {
        let vector = vector_from(values);
        prop_assert!(environment_score(&vector, SCORE_FLOOR) >= SCORE_FLOOR);
    }

    /// Combination never reports below the floor, whatever the inputs.
    #[test]
    fn global_score_respects_floor(
        scalars in proptest::collection::vec(SCORE_FLOOR..=1.0f64, 1..6),
    ) {
        let mut weights = FxHashMap::default();
        weights.insert("local".to_string(), 0.25);
        weights.insert("app_engine".to_string(), 0.35);
        weights.insert("cloud_run".to_string(), 0.40);
        let combiner = EnvironmentCombiner::new(weights, SCORE_FLOOR, SYNERGY_WINDOW);

        let scalars: FxHashMap<String, f64> = scalars
            .into_iter()
            .enumerate()
            .map(|(i, s)| (format!("env{i}"), s))
            .collect();

        let combined = combiner.combine(&scalars).unwrap();
        prop_assert!(combined.global_score >= SCORE_FLOOR);
        prop_assert!(combined.evolution_rate >= 0.0);
        prop_assert!(combined.synergy_bonus >= 0.0);
        prop_assert!(combined.synergy_bonus <= SYNERGY_WINDOW);
    }
}
