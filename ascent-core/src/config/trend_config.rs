//! Trend analysis configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_STATS_WINDOW, DEFAULT_TREND_WINDOW};

/// Configuration for the trend analyzer windows.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TrendConfig {
    /// History window for trend classification. Default: 7 records.
    pub trend_window: Option<usize>,
    /// History window for rolling improvement statistics. Default: 30.
    pub stats_window: Option<usize>,
}

impl TrendConfig {
    /// Returns the effective trend window, defaulting to 7.
    pub fn effective_trend_window(&self) -> usize {
        self.trend_window.unwrap_or(DEFAULT_TREND_WINDOW)
    }

    /// Returns the effective stats window, defaulting to 30.
    pub fn effective_stats_window(&self) -> usize {
        self.stats_window.unwrap_or(DEFAULT_STATS_WINDOW)
    }
}
