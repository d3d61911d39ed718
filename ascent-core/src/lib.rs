//! Core types, traits, errors, config, events, and constants for Ascent.
//!
//! Ascent computes progressive performance scores for a set of named
//! processing environments, enforces that stored scores never decrease
//! between assessment cycles, and aggregates them into a single global
//! score with milestone classification and trend analysis.
//!
//! This crate holds everything the pipeline and storage crates share:
//! the metric vector and record types, the `ScoreStore` seam, subsystem
//! error enums, the layered TOML configuration, and the event system.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod trace;
pub mod traits;
pub mod types;

pub use config::AscentConfig;
pub use errors::{AssessmentError, ConfigError, PipelineError, ReportError, StorageError};
pub use traits::ScoreStore;
pub use types::{
    EnforcementLogEntry, EnvironmentRecord, EnvironmentTrend, GlobalScoreRecord, MetricField,
    MetricVector, MilestoneEvent, Significance,
};
