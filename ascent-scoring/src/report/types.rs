//! The assessment report structure.

use std::collections::BTreeMap;

use ascent_core::types::{EnforcementLogEntry, EnvironmentRecord, GlobalScoreRecord};
use serde::Serialize;

use crate::trends::{RollingStats, TrendSummary};

/// Full output of one assessment cycle, serializable as-is for
/// downstream dashboards.
///
/// `adjustments` carries the complete audit batch for the cycle so a
/// reader can always separate enforced improvement from real improvement.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub score_date: String,
    pub milestone: String,
    pub global: GlobalScoreRecord,
    pub per_environment: BTreeMap<String, EnvironmentRecord>,
    pub adjustments: Vec<EnforcementLogEntry>,
    pub trend: TrendSummary,
    pub rolling: RollingStats,
}

impl AssessmentReport {
    /// Number of synthetically bumped fields in this cycle.
    pub fn adjusted_count(&self) -> usize {
        self.adjustments.iter().filter(|entry| entry.adjusted).count()
    }

    /// Total audited fields in this cycle (zero on an all-baseline run).
    pub fn audited_count(&self) -> usize {
        self.adjustments.len()
    }
}
