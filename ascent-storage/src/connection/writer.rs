//! Write utilities — BEGIN IMMEDIATE transactions.

use ascent_core::errors::StorageError;
use rusqlite::Connection;

/// Execute a write operation inside a BEGIN IMMEDIATE transaction.
/// The write lock is taken at transaction start, so an upsert either sees
/// the prior row or the row a concurrent invocation just committed —
/// never a torn state.
pub fn with_immediate_transaction<F, T>(conn: &Connection, f: F) -> Result<T, StorageError>
where
    F: FnOnce(&rusqlite::Transaction<'_>) -> Result<T, StorageError>,
{
    // new_unchecked issues exactly one BEGIN IMMEDIATE and returns a
    // Transaction whose drop behavior is Rollback, so dropping it on an
    // error path rolls back while an explicit commit below persists.
    let tx = rusqlite::Transaction::new_unchecked(conn, rusqlite::TransactionBehavior::Immediate)
        .map_err(|e| StorageError::SqliteError {
            message: format!("failed to begin immediate transaction: {e}"),
        })?;

    let result = f(&tx)?;

    tx.commit().map_err(|e| StorageError::SqliteError {
        message: format!("failed to commit: {e}"),
    })?;

    Ok(result)
}
