//! Pipeline errors — aggregates subsystem errors via `From` conversions.

use super::{AssessmentError, ConfigError, ReportError, StorageError};

/// Errors that can abort an assessment cycle.
///
/// A cycle either fully succeeds (all records for the date written) or
/// fails with one of these before any partial write.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Assessment error: {0}")]
    Assessment(#[from] AssessmentError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}
