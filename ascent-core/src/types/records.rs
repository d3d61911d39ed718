//! Persistent record types: per-environment scores, global scores,
//! the enforcement audit trail, and milestone events.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::metric_vector::{MetricField, MetricVector};

/// Stored trend label for a single environment's assessment.
///
/// `Enhanced` marks a cycle where the overall score only held its level
/// because enforcement rewrote a decrease; the audit trail carries the
/// raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentTrend {
    Improving,
    Stable,
    Enhanced,
}

impl EnvironmentTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvironmentTrend::Improving => "improving",
            EnvironmentTrend::Stable => "stable",
            EnvironmentTrend::Enhanced => "enhanced",
        }
    }

    pub fn from_name(name: &str) -> Option<EnvironmentTrend> {
        match name {
            "improving" => Some(EnvironmentTrend::Improving),
            "stable" => Some(EnvironmentTrend::Stable),
            "enhanced" => Some(EnvironmentTrend::Enhanced),
            _ => None,
        }
    }
}

/// One environment's assessment for one date, post-enforcement.
///
/// Unique per (environment, score_date); a re-run on the same date
/// replaces the stored row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentRecord {
    pub environment: String,
    /// ISO date (`YYYY-MM-DD`). Lexicographic order is chronological order.
    pub score_date: String,
    pub metrics: MetricVector,
    /// Mean of the eight fields, clamped to the score floor.
    pub overall_score: f64,
    pub improvement_from_previous: f64,
    pub trend: EnvironmentTrend,
    pub notes: String,
}

/// The combined score across all environments for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalScoreRecord {
    /// ISO date, unique key.
    pub score_date: String,
    pub global_score: f64,
    /// Per-environment scalar snapshot that fed the combination.
    pub contributions: FxHashMap<String, f64>,
    pub synergy_bonus: f64,
    /// Position of the global score in the floor-to-ceiling range, in [0, 1].
    pub evolution_rate: f64,
    pub daily_improvement_pct: f64,
    pub milestone: String,
    pub highlights: String,
    pub optimizations: String,
}

/// One audit entry per field per enforcement call. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnforcementLogEntry {
    pub environment: String,
    pub field: MetricField,
    pub previous_value: f64,
    /// The value the metric source actually reported.
    pub raw_value: f64,
    /// True when the stored value was synthetically bumped.
    pub adjusted: bool,
    /// Bump size when adjusted; natural delta otherwise.
    pub adjustment: f64,
}

/// Significance tier for a milestone transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Significance {
    Major,
    Notable,
    Routine,
}

impl Significance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Significance::Major => "major",
            Significance::Notable => "notable",
            Significance::Routine => "routine",
        }
    }

    pub fn from_name(name: &str) -> Option<Significance> {
        match name {
            "major" => Some(Significance::Major),
            "notable" => Some(Significance::Notable),
            "routine" => Some(Significance::Routine),
            _ => None,
        }
    }
}

/// Recorded when the classified milestone label changes between cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneEvent {
    pub score_date: String,
    pub label: String,
    pub score: f64,
    pub significance: Significance,
}
