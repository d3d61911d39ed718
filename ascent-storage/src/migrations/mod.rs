//! Versioned schema migrations driven by `PRAGMA user_version`.

pub mod v001_initial;
pub mod v002_milestones;

use ascent_core::errors::StorageError;
use rusqlite::Connection;

/// All migrations in application order.
const MIGRATIONS: &[(i64, &str)] = &[
    (1, v001_initial::MIGRATION_SQL),
    (2, v002_milestones::MIGRATION_SQL),
];

/// Apply any migrations newer than the database's user_version.
/// Idempotent: a fully migrated database is left untouched.
pub fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    let current: i64 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;

    for (version, sql) in MIGRATIONS {
        if current < *version {
            conn.execute_batch(sql)
                .map_err(|e| StorageError::MigrationFailed {
                    version: *version,
                    message: e.to_string(),
                })?;
            conn.pragma_update(None, "user_version", version)
                .map_err(|e| StorageError::MigrationFailed {
                    version: *version,
                    message: e.to_string(),
                })?;
            tracing::debug!(version, "applied schema migration");
        }
    }

    Ok(())
}
