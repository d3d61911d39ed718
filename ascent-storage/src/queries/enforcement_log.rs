//! Queries for the enforcement_log table — the append-only audit trail.

use ascent_core::errors::StorageError;
use ascent_core::types::{EnforcementLogEntry, MetricField};
use rusqlite::{params, Connection, Row};

fn map_row(row: &Row<'_>) -> Result<EnforcementLogEntry, rusqlite::Error> {
    let field_name: String = row.get(1)?;
    let field = MetricField::from_name(&field_name).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            format!("unknown metric field: {field_name}").into(),
        )
    })?;
    Ok(EnforcementLogEntry {
        environment: row.get(0)?,
        field,
        previous_value: row.get(2)?,
        raw_value: row.get(3)?,
        adjusted: row.get(4)?,
        adjustment: row.get(5)?,
    })
}

/// Append a batch of audit entries. The caller wraps this in a
/// transaction together with the records the batch belongs to.
pub fn append_batch(
    conn: &Connection,
    entries: &[EnforcementLogEntry],
    recorded_at: i64,
) -> Result<(), StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO enforcement_log (
                environment, field, previous_value, raw_value, adjusted,
                adjustment, recorded_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    for entry in entries {
        stmt.execute(params![
            entry.environment,
            entry.field.as_str(),
            entry.previous_value,
            entry.raw_value,
            entry.adjusted,
            entry.adjustment,
            recorded_at
        ])
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    }

    Ok(())
}

/// Up to `limit` entries for an environment, newest first.
pub fn recent(
    conn: &Connection,
    environment: &str,
    limit: usize,
) -> Result<Vec<EnforcementLogEntry>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT environment, field, previous_value, raw_value, adjusted, adjustment
             FROM enforcement_log
             WHERE environment = ?1 ORDER BY recorded_at DESC, id DESC LIMIT ?2",
        )
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let rows = stmt
        .query_map(params![environment, limit as i64], map_row)
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Count entries that recorded a synthetic adjustment.
pub fn count_adjusted(conn: &Connection, environment: &str) -> Result<i64, StorageError> {
    conn.query_row(
        "SELECT COUNT(*) FROM enforcement_log WHERE environment = ?1 AND adjusted = 1",
        params![environment],
        |row| row.get(0),
    )
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Count all entries.
pub fn count(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM enforcement_log", [], |row| row.get(0))
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}
