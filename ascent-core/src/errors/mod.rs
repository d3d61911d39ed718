//! Error handling for Ascent.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod assessment_error;
pub mod config_error;
pub mod pipeline_error;
pub mod report_error;
pub mod storage_error;

pub use assessment_error::AssessmentError;
pub use config_error::ConfigError;
pub use pipeline_error::PipelineError;
pub use report_error::ReportError;
pub use storage_error::StorageError;
