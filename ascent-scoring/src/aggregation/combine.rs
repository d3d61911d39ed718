//! Multi-environment combination with the synergy bonus.

use ascent_core::constants::DEFAULT_ENVIRONMENT_WEIGHT;
use ascent_core::errors::AssessmentError;
use rustc_hash::FxHashMap;

/// Result of combining per-environment scalars into one global score.
#[derive(Debug, Clone)]
pub struct CombinedScore {
    pub weighted_sum: f64,
    /// `max(0, synergy_window - spread)` — rewards environments
    /// clustering tightly; zero once the spread reaches the window.
    pub synergy_bonus: f64,
    pub global_score: f64,
    /// Position of the global score in the floor-to-ceiling range.
    pub evolution_rate: f64,
    /// Per-environment scalar snapshot that fed the combination.
    pub contributions: FxHashMap<String, f64>,
}

/// Combines environment scalars via fixed weights plus the synergy bonus.
pub struct EnvironmentCombiner {
    weights: FxHashMap<String, f64>,
    floor: f64,
    synergy_window: f64,
}

impl EnvironmentCombiner {
    pub fn new(weights: FxHashMap<String, f64>, floor: f64, synergy_window: f64) -> Self {
        Self {
            weights,
            floor,
            synergy_window,
        }
    }

    /// Combine the given scalars. Unweighted environments fall back to the
    /// default weight. Fails before any computation when no scalars were
    /// supplied; the caller must not have written anything yet.
    pub fn combine(
        &self,
        scalars: &FxHashMap<String, f64>,
    ) -> Result<CombinedScore, AssessmentError> {
        if scalars.is_empty() {
            return Err(AssessmentError::NoEnvironments);
        }

        let mut weighted_sum = 0.0;
        let mut max_scalar = f64::MIN;
        let mut min_scalar = f64::MAX;

        for (environment, scalar) in scalars {
            let weight = self
                .weights
                .get(environment)
                .copied()
                .unwrap_or(DEFAULT_ENVIRONMENT_WEIGHT);
            weighted_sum += scalar * weight;
            max_scalar = max_scalar.max(*scalar);
            min_scalar = min_scalar.min(*scalar);
        }

        let spread = max_scalar - min_scalar;
        let synergy_bonus = (self.synergy_window - spread).max(0.0);
        let global_score = (weighted_sum + synergy_bonus).max(self.floor);
        let evolution_rate = (global_score - self.floor) / (1.0 - self.floor);

        Ok(CombinedScore {
            weighted_sum,
            synergy_bonus,
            global_score,
            evolution_rate,
            contributions: scalars.clone(),
        })
    }
}
