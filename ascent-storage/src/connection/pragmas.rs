//! Connection pragmas applied to every opened database.

use ascent_core::errors::StorageError;
use rusqlite::Connection;

/// Apply the standard pragma set: WAL journaling, NORMAL sync, a busy
/// timeout so a second accidental invocation waits instead of failing.
pub fn apply_pragmas(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;
         PRAGMA busy_timeout = 5000;
         PRAGMA foreign_keys = ON;",
    )
    .map_err(|e| StorageError::SqliteError {
        message: e.to_string(),
    })
}
