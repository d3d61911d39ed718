//! Persistence errors.

/// Errors from the SQLite persistence layer.
///
/// Storage failures always propagate: without true history the
/// non-decrease invariant cannot be honored, so callers never substitute
/// cached or guessed previous values.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration to version {version} failed: {message}")]
    MigrationFailed { version: i64, message: String },

    #[error("serialization error: {message}")]
    Serialization { message: String },
}
