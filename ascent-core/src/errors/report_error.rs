//! Report rendering errors.

/// Errors from report generation.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to serialize report: {message}")]
    Serialization { message: String },

    #[error("unknown report format: {format}")]
    UnknownFormat { format: String },
}
