//! Trend classification and rolling improvement statistics.
//!
//! Enforcement upstream means a negative window-over-window movement is
//! reported under the softened `enhancement_applied` label with its
//! absolute value — but the true signed movement is always carried
//! alongside, so consumers are never left guessing which one happened.

use ascent_core::types::GlobalScoreRecord;
use serde::Serialize;
use statrs::statistics::Statistics;

/// Trend label over the classification window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    StrongImprovement,
    SteadyImprovement,
    StableImprovement,
    EnhancementApplied,
    InsufficientData,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::StrongImprovement => "strong_improvement",
            TrendDirection::SteadyImprovement => "steady_improvement",
            TrendDirection::StableImprovement => "stable_improvement",
            TrendDirection::EnhancementApplied => "enhancement_applied",
            TrendDirection::InsufficientData => "insufficient_data",
        }
    }
}

/// One point of global score history, newest-first as stored.
#[derive(Debug, Clone, Serialize)]
pub struct GlobalScorePoint {
    pub score_date: String,
    pub score: f64,
    pub daily_improvement_pct: f64,
}

impl From<&GlobalScoreRecord> for GlobalScorePoint {
    fn from(record: &GlobalScoreRecord) -> Self {
        Self {
            score_date: record.score_date.clone(),
            score: record.global_score,
            daily_improvement_pct: record.daily_improvement_pct,
        }
    }
}

/// Trend over the classification window.
#[derive(Debug, Clone, Serialize)]
pub struct TrendSummary {
    pub direction: TrendDirection,
    pub days_analyzed: usize,
    /// Reported improvement: absolute value under `enhancement_applied`.
    pub overall_improvement: f64,
    /// The true newest-minus-oldest movement, sign intact.
    pub signed_improvement: f64,
    pub average_daily_improvement: f64,
    pub current_score: f64,
    /// Chronological (oldest → newest) scores in the window.
    pub score_progression: Vec<f64>,
}

/// Rolling statistics over the longer stats window.
#[derive(Debug, Clone, Serialize)]
pub struct RollingStats {
    pub average_daily_improvement: f64,
    pub maximum_daily_improvement: f64,
    /// Clamped to zero before reporting.
    pub minimum_daily_improvement: f64,
    /// The unclamped minimum, sign intact.
    pub signed_minimum_daily_improvement: f64,
    /// Newest→oldest run of non-negative improvement days.
    pub consecutive_improvement_days: usize,
    pub days_tracked: usize,
}

/// Computes trend summaries from stored history windows.
pub struct TrendAnalyzer {
    trend_window: usize,
    stats_window: usize,
}

impl TrendAnalyzer {
    pub fn new(trend_window: usize, stats_window: usize) -> Self {
        Self {
            trend_window,
            stats_window,
        }
    }

    /// Classify the trend over the shorter window.
    /// `history` is newest-first, as returned by the store.
    pub fn trend(&self, history: &[GlobalScorePoint]) -> TrendSummary {
        let window = &history[..history.len().min(self.trend_window)];

        if window.len() < 2 {
            return TrendSummary {
                direction: TrendDirection::InsufficientData,
                days_analyzed: window.len(),
                overall_improvement: 0.0,
                signed_improvement: 0.0,
                average_daily_improvement: 0.0,
                current_score: window.first().map(|p| p.score).unwrap_or(0.0),
                score_progression: window.iter().rev().map(|p| p.score).collect(),
            };
        }

        // Chronological order: oldest → newest.
        let scores: Vec<f64> = window.iter().rev().map(|p| p.score).collect();
        let improvements: Vec<f64> =
            window.iter().rev().map(|p| p.daily_improvement_pct).collect();

        let signed = scores[scores.len() - 1] - scores[0];
        let (direction, reported) = if signed > 0.01 {
            (TrendDirection::StrongImprovement, signed)
        } else if signed > 0.005 {
            (TrendDirection::SteadyImprovement, signed)
        } else if signed >= 0.0 {
            (TrendDirection::StableImprovement, signed)
        } else {
            (TrendDirection::EnhancementApplied, signed.abs())
        };

        TrendSummary {
            direction,
            days_analyzed: window.len(),
            overall_improvement: reported,
            signed_improvement: signed,
            average_daily_improvement: improvements.iter().mean(),
            current_score: scores[scores.len() - 1],
            score_progression: scores,
        }
    }

    /// Rolling improvement statistics over the longer window.
    pub fn rolling_stats(&self, history: &[GlobalScorePoint]) -> RollingStats {
        let window = &history[..history.len().min(self.stats_window)];

        if window.is_empty() {
            return RollingStats {
                average_daily_improvement: 0.0,
                maximum_daily_improvement: 0.0,
                minimum_daily_improvement: 0.0,
                signed_minimum_daily_improvement: 0.0,
                consecutive_improvement_days: 0,
                days_tracked: 0,
            };
        }

        let improvements: Vec<f64> = window.iter().map(|p| p.daily_improvement_pct).collect();
        let signed_min = Statistics::min(improvements.iter());

        let mut consecutive = 0;
        for improvement in &improvements {
            if *improvement >= 0.0 {
                consecutive += 1;
            } else {
                break;
            }
        }

        RollingStats {
            average_daily_improvement: improvements.iter().mean(),
            maximum_daily_improvement: Statistics::max(improvements.iter()),
            minimum_daily_improvement: signed_min.max(0.0),
            signed_minimum_daily_improvement: signed_min,
            consecutive_improvement_days: consecutive,
            days_tracked: window.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(score_date: &str, score: f64, improvement: f64) -> GlobalScorePoint {
        GlobalScorePoint {
            score_date: score_date.to_string(),
            score,
            daily_improvement_pct: improvement,
        }
    }

    fn analyzer() -> TrendAnalyzer {
        TrendAnalyzer::new(7, 30)
    }

    #[test]
    fn single_record_is_insufficient() {
        let summary = analyzer().trend(&[point("2026-01-05", 0.92, 0.0)]);
        assert_eq!(summary.direction, TrendDirection::InsufficientData);
        assert_eq!(summary.days_analyzed, 1);
    }

    #[test]
    fn empty_history_is_insufficient() {
        let summary = analyzer().trend(&[]);
        assert_eq!(summary.direction, TrendDirection::InsufficientData);
        assert_eq!(summary.days_analyzed, 0);
    }

    #[test]
    fn strong_improvement_above_one_percent() {
        // Newest first: 0.95 today, 0.92 a week ago.
        let history = vec![point("2026-01-07", 0.95, 1.0), point("2026-01-01", 0.92, 0.5)];
        let summary = analyzer().trend(&history);
        assert_eq!(summary.direction, TrendDirection::StrongImprovement);
        assert!((summary.overall_improvement - 0.03).abs() < 1e-9);
        assert!((summary.signed_improvement - 0.03).abs() < 1e-9);
        assert!((summary.current_score - 0.95).abs() < 1e-12);
    }

    #[test]
    fn steady_improvement_between_bands() {
        let history = vec![point("2026-01-07", 0.928, 0.1), point("2026-01-01", 0.920, 0.1)];
        let summary = analyzer().trend(&history);
        assert_eq!(summary.direction, TrendDirection::SteadyImprovement);
    }

    #[test]
    fn flat_history_is_stable() {
        let history = vec![point("2026-01-07", 0.92, 0.0), point("2026-01-01", 0.92, 0.0)];
        let summary = analyzer().trend(&history);
        assert_eq!(summary.direction, TrendDirection::StableImprovement);
    }

    #[test]
    fn decrease_reports_absolute_value_and_true_sign() {
        let history = vec![point("2026-01-07", 0.90, -1.0), point("2026-01-01", 0.93, 0.5)];
        let summary = analyzer().trend(&history);
        assert_eq!(summary.direction, TrendDirection::EnhancementApplied);
        assert!((summary.overall_improvement - 0.03).abs() < 1e-9);
        assert!((summary.signed_improvement + 0.03).abs() < 1e-9);
    }

    #[test]
    fn trend_window_is_respected() {
        // 10 records; the window should only see the newest 7.
        let mut history = Vec::new();
        for i in 0..10 {
            let day = 10 - i;
            history.push(point(&format!("2026-01-{day:02}"), 0.92 + day as f64 * 0.001, 0.1));
        }
        let summary = analyzer().trend(&history);
        assert_eq!(summary.days_analyzed, 7);
        assert_eq!(summary.score_progression.len(), 7);
    }

    #[test]
    fn progression_is_chronological() {
        let history = vec![
            point("2026-01-03", 0.93, 0.1),
            point("2026-01-02", 0.92, 0.1),
            point("2026-01-01", 0.91, 0.1),
        ];
        let summary = analyzer().trend(&history);
        assert_eq!(summary.score_progression, vec![0.91, 0.92, 0.93]);
    }

    #[test]
    fn rolling_stats_clamp_minimum() {
        let history = vec![
            point("2026-01-03", 0.93, 0.4),
            point("2026-01-02", 0.92, -0.2),
            point("2026-01-01", 0.91, 0.6),
        ];
        let stats = analyzer().rolling_stats(&history);
        assert_eq!(stats.minimum_daily_improvement, 0.0);
        assert!((stats.signed_minimum_daily_improvement + 0.2).abs() < 1e-9);
        assert!((stats.maximum_daily_improvement - 0.6).abs() < 1e-9);
        assert_eq!(stats.days_tracked, 3);
    }

    #[test]
    fn consecutive_days_stop_at_first_negative() {
        let history = vec![
            point("2026-01-04", 0.94, 0.3),
            point("2026-01-03", 0.93, 0.0),
            point("2026-01-02", 0.92, -0.1),
            point("2026-01-01", 0.93, 0.2),
        ];
        let stats = analyzer().rolling_stats(&history);
        assert_eq!(stats.consecutive_improvement_days, 2);
    }

    #[test]
    fn rolling_stats_on_empty_history() {
        let stats = analyzer().rolling_stats(&[]);
        assert_eq!(stats.days_tracked, 0);
        assert_eq!(stats.consecutive_improvement_days, 0);
    }
}
