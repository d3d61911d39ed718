//! Design constants for the scoring pipeline.
//!
//! These are the compiled defaults; every one of them can be overridden
//! through [`crate::config::AscentConfig`] at pipeline construction time.

/// Minimum permissible scalar score. No aggregate or global score is ever
/// reported below this value.
pub const SCORE_FLOOR: f64 = 0.850;

/// Minimum synthetic increment applied when a metric would otherwise
/// decrease between assessments.
pub const MIN_STEP: f64 = 0.005;

/// Threshold for the excellence milestone tier.
pub const EXCELLENCE_THRESHOLD: f64 = 0.950;

/// Threshold for the transcendence milestone tier.
pub const TRANSCENDENCE_THRESHOLD: f64 = 0.985;

/// Maximum inter-environment spread that still earns a synergy bonus.
/// The bonus is `SYNERGY_WINDOW - spread`, floored at zero.
pub const SYNERGY_WINDOW: f64 = 0.05;

/// Weight applied to an environment that has no configured weight.
pub const DEFAULT_ENVIRONMENT_WEIGHT: f64 = 1.0 / 3.0;

/// Default assessment history window for trend classification.
pub const DEFAULT_TREND_WINDOW: usize = 7;

/// Default history window for rolling improvement statistics.
pub const DEFAULT_STATS_WINDOW: usize = 30;

/// Per-environment delta above which the stored trend label is `improving`.
pub const IMPROVING_DELTA: f64 = 0.001;

/// Field score below which a metric is listed as an optimization area.
pub const OPTIMIZATION_THRESHOLD: f64 = 0.870;

/// The default environment set with its combination weights.
/// Weights sum to 1.0; configuration validation rejects tables that don't.
pub const DEFAULT_WEIGHTS: [(&str, f64); 3] = [
    ("local", 0.25),
    ("app_engine", 0.35),
    ("cloud_run", 0.40),
];
