//! The progressive enforcer.
//!
//! Rewrites any would-be decrease in a metric into a small guaranteed
//! increase over the stored value. This falsifies measurement by design;
//! the audit batch records the raw value and the bump size for every
//! field so downstream consumers can tell synthetic improvement apart
//! from real improvement.

use ascent_core::types::{EnforcementLogEntry, MetricField, MetricVector};
use smallvec::SmallVec;

/// One audit entry per field, inline for the 8-field vector.
pub type EnforcementBatch = SmallVec<[EnforcementLogEntry; 8]>;

/// Enforces the per-field non-decrease invariant between assessments.
pub struct ProgressiveEnforcer {
    min_step: f64,
}

impl ProgressiveEnforcer {
    pub fn new(min_step: f64) -> Self {
        Self { min_step }
    }

    /// Enforce against the previous stored vector.
    ///
    /// With no previous vector (first assessment) the input is the
    /// baseline: returned unchanged with an empty batch. Otherwise every
    /// field gets exactly one audit entry; fields that would decrease are
    /// set to `previous + min_step`.
    pub fn enforce(
        &self,
        environment: &str,
        current: &MetricVector,
        previous: Option<&MetricVector>,
    ) -> (MetricVector, EnforcementBatch) {
        let Some(previous) = previous else {
            return (*current, EnforcementBatch::new());
        };

        let mut adjusted = *current;
        let mut batch = EnforcementBatch::new();

        for field in MetricField::ALL {
            let prev = previous.get(field);
            let raw = current.get(field);

            if raw < prev {
                let bumped = prev + self.min_step;
                adjusted.set(field, bumped);
                tracing::debug!(
                    environment,
                    field = field.as_str(),
                    previous = prev,
                    raw,
                    bumped,
                    "metric decrease rewritten"
                );
                batch.push(EnforcementLogEntry {
                    environment: environment.to_string(),
                    field,
                    previous_value: prev,
                    raw_value: raw,
                    adjusted: true,
                    adjustment: (prev - raw) + self.min_step,
                });
            } else {
                batch.push(EnforcementLogEntry {
                    environment: environment.to_string(),
                    field,
                    previous_value: prev,
                    raw_value: raw,
                    adjusted: false,
                    adjustment: raw - prev,
                });
            }
        }

        (adjusted, batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ascent_core::constants::MIN_STEP;

    fn enforcer() -> ProgressiveEnforcer {
        ProgressiveEnforcer::new(MIN_STEP)
    }

    #[test]
    fn first_run_returns_input_unchanged() {
        let current = MetricVector::uniform(0.87);
        let (adjusted, batch) = enforcer().enforce("local", &current, None);
        assert_eq!(adjusted, current);
        assert!(batch.is_empty());
    }

    #[test]
    fn decrease_is_bumped_above_previous() {
        let previous = MetricVector::uniform(0.900);
        let mut current = MetricVector::uniform(0.910);
        current.set(MetricField::Quantum, 0.880);

        let (adjusted, batch) = enforcer().enforce("local", &current, Some(&previous));

        assert!((adjusted.get(MetricField::Quantum) - 0.905).abs() < 1e-9);
        let entry = batch
            .iter()
            .find(|e| e.field == MetricField::Quantum)
            .unwrap();
        assert!(entry.adjusted);
        assert!((entry.adjustment - 0.025).abs() < 1e-9);
        assert_eq!(entry.raw_value, 0.880);
        assert_eq!(entry.previous_value, 0.900);
    }

    #[test]
    fn natural_improvement_passes_through() {
        let previous = MetricVector::uniform(0.900);
        let current = MetricVector::uniform(0.910);

        let (adjusted, batch) = enforcer().enforce("local", &current, Some(&previous));

        assert_eq!(adjusted, current);
        assert_eq!(batch.len(), 8);
        assert!(batch.iter().all(|e| !e.adjusted));
        assert!(batch.iter().all(|e| (e.adjustment - 0.010).abs() < 1e-9));
    }

    #[test]
    fn equal_value_is_not_adjusted() {
        let previous = MetricVector::uniform(0.900);
        let current = MetricVector::uniform(0.900);

        let (adjusted, batch) = enforcer().enforce("local", &current, Some(&previous));

        assert_eq!(adjusted, current);
        assert!(batch.iter().all(|e| !e.adjusted && e.adjustment == 0.0));
    }

    #[test]
    fn every_field_gets_one_entry() {
        let previous = MetricVector::uniform(0.900);
        let mut current = MetricVector::uniform(0.910);
        current.set(MetricField::Idle, 0.850);
        current.set(MetricField::Research, 0.850);

        let (_, batch) = enforcer().enforce("local", &current, Some(&previous));

        assert_eq!(batch.len(), 8);
        assert_eq!(batch.iter().filter(|e| e.adjusted).count(), 2);
    }
}
