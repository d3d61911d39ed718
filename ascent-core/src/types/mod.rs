//! Shared data model: metric vectors, score records, audit entries.

pub mod metric_vector;
pub mod records;

pub use metric_vector::{MetricField, MetricVector};
pub use records::{
    EnforcementLogEntry, EnvironmentRecord, EnvironmentTrend, GlobalScoreRecord, MilestoneEvent,
    Significance,
};
