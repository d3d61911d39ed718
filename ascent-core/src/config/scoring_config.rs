//! Scoring configuration: weights, floor, enforcement step.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_WEIGHTS, MIN_STEP, SCORE_FLOOR, SYNERGY_WINDOW};

/// Configuration for enforcement, aggregation, and combination.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Per-environment combination weights. Empty means the compiled
    /// default table. Must sum to 1.0 when set.
    pub weights: FxHashMap<String, f64>,
    /// Minimum permissible scalar score. Default: 0.850.
    pub score_floor: Option<f64>,
    /// Synthetic increment applied on a would-be decrease. Default: 0.005.
    pub min_step: Option<f64>,
    /// Spread window for the synergy bonus. Default: 0.05.
    pub synergy_window: Option<f64>,
    /// Fill missing vector fields with the floor instead of rejecting the
    /// cycle. Compatibility mode; default: false (strict validation).
    pub fill_missing_with_floor: Option<bool>,
}

impl ScoringConfig {
    /// Returns the effective weight table, defaulting to the compiled set.
    pub fn effective_weights(&self) -> FxHashMap<String, f64> {
        if self.weights.is_empty() {
            DEFAULT_WEIGHTS
                .iter()
                .map(|(env, w)| (env.to_string(), *w))
                .collect()
        } else {
            self.weights.clone()
        }
    }

    /// Returns the effective score floor, defaulting to 0.850.
    pub fn effective_score_floor(&self) -> f64 {
        self.score_floor.unwrap_or(SCORE_FLOOR)
    }

    /// Returns the effective enforcement step, defaulting to 0.005.
    pub fn effective_min_step(&self) -> f64 {
        self.min_step.unwrap_or(MIN_STEP)
    }

    /// Returns the effective synergy window, defaulting to 0.05.
    pub fn effective_synergy_window(&self) -> f64 {
        self.synergy_window.unwrap_or(SYNERGY_WINDOW)
    }

    /// Returns true when missing fields are floor-filled instead of rejected.
    pub fn fills_missing_with_floor(&self) -> bool {
        self.fill_missing_with_floor.unwrap_or(false)
    }
}
