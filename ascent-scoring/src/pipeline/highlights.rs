//! Free-text highlights and optimization areas for the global record.

use ascent_core::constants::{EXCELLENCE_THRESHOLD, OPTIMIZATION_THRESHOLD};
use ascent_core::types::{EnvironmentRecord, MetricField};

/// Summarize environment performance into the two free-text columns.
///
/// Environments at or above excellence (or 0.900) are highlighted;
/// fields under the optimization threshold are listed per environment.
pub fn highlights_and_optimizations(records: &[EnvironmentRecord]) -> (String, String) {
    let mut highlights = Vec::new();
    let mut optimizations = Vec::new();

    for record in records {
        let average = record.metrics.mean();
        if average >= EXCELLENCE_THRESHOLD {
            highlights.push(format!(
                "{} achieving excellence level ({average:.3})",
                record.environment
            ));
        } else if average >= 0.900 {
            highlights.push(format!(
                "{} demonstrating strong performance ({average:.3})",
                record.environment
            ));
        }

        let weak: Vec<&str> = MetricField::ALL
            .iter()
            .filter(|field| record.metrics.get(**field) < OPTIMIZATION_THRESHOLD)
            .map(|field| field.as_str())
            .collect();
        if !weak.is_empty() {
            optimizations.push(format!("{}: {}", record.environment, weak.join(", ")));
        }
    }

    let highlights = if highlights.is_empty() {
        "Steady performance maintenance".to_string()
    } else {
        highlights.join("; ")
    };
    let optimizations = if optimizations.is_empty() {
        "All metrics performing optimally".to_string()
    } else {
        optimizations.join("; ")
    };

    (highlights, optimizations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ascent_core::types::{EnvironmentTrend, MetricVector};

    fn record(environment: &str, value: f64) -> EnvironmentRecord {
        EnvironmentRecord {
            environment: environment.to_string(),
            score_date: "2026-01-05".to_string(),
            metrics: MetricVector::uniform(value),
            overall_score: value.max(0.850),
            improvement_from_previous: 0.0,
            trend: EnvironmentTrend::Stable,
            notes: String::new(),
        }
    }

    #[test]
    fn excellence_is_highlighted() {
        let (highlights, optimizations) =
            highlights_and_optimizations(&[record("cloud_run", 0.96)]);
        assert!(highlights.contains("cloud_run achieving excellence level (0.960)"));
        assert_eq!(optimizations, "All metrics performing optimally");
    }

    #[test]
    fn strong_performance_is_highlighted() {
        let (highlights, _) = highlights_and_optimizations(&[record("local", 0.91)]);
        assert!(highlights.contains("local demonstrating strong performance"));
    }

    #[test]
    fn weak_fields_are_listed() {
        let mut rec = record("local", 0.92);
        rec.metrics.quantum = 0.860;
        rec.metrics.idle = 0.855;
        let (_, optimizations) = highlights_and_optimizations(&[rec]);
        assert!(optimizations.contains("local: quantum, idle"));
    }

    #[test]
    fn fallback_strings_when_nothing_stands_out() {
        let (highlights, optimizations) = highlights_and_optimizations(&[record("local", 0.88)]);
        assert_eq!(highlights, "Steady performance maintenance");
        assert_eq!(optimizations, "All metrics performing optimally");
    }
}
