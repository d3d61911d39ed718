//! Trend analysis over stored global score history.

pub mod analyzer;

pub use analyzer::{
    GlobalScorePoint, RollingStats, TrendAnalyzer, TrendDirection, TrendSummary,
};
