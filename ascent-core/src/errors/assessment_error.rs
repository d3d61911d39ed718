//! Errors raised while validating and combining assessment inputs.

/// Errors from vector validation and score combination.
///
/// A malformed vector rejects that environment's whole cycle for the date;
/// the caller must not default missing fields unless the lenient
/// compatibility mode was explicitly enabled.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("environment '{environment}' vector is missing field '{field}'")]
    MissingField { environment: String, field: String },

    #[error("environment '{environment}' field '{field}' is out of range: {value}")]
    OutOfRange {
        environment: String,
        field: String,
        value: f64,
    },

    #[error("cannot combine scores: no environment scalars were provided")]
    NoEnvironments,
}
