//! Queries, one module per table.

pub mod enforcement_log;
pub mod environment_scores;
pub mod global_scores;
pub mod milestones;
