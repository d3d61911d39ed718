//! Per-environment aggregation.

use ascent_core::types::MetricVector;

/// Reduce a vector to its scalar: arithmetic mean of the eight fields,
/// clamped to the floor. Pure.
pub fn environment_score(metrics: &MetricVector, floor: f64) -> f64 {
    metrics.mean().max(floor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ascent_core::constants::SCORE_FLOOR;
    use ascent_core::types::MetricField;

    #[test]
    fn mean_above_floor_is_unchanged() {
        let v = MetricVector::uniform(0.92);
        assert!((environment_score(&v, SCORE_FLOOR) - 0.92).abs() < 1e-12);
    }

    #[test]
    fn mean_below_floor_is_clamped() {
        let v = MetricVector::uniform(0.40);
        assert_eq!(environment_score(&v, SCORE_FLOOR), SCORE_FLOOR);
    }

    #[test]
    fn mixed_fields_average() {
        let mut v = MetricVector::uniform(0.90);
        v.set(MetricField::Quantum, 0.98);
        // (7 * 0.90 + 0.98) / 8 = 0.91
        assert!((environment_score(&v, SCORE_FLOOR) - 0.91).abs() < 1e-9);
    }
}
