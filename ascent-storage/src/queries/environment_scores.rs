//! Queries for the environment_scores table.

use ascent_core::errors::StorageError;
use ascent_core::types::{EnvironmentRecord, EnvironmentTrend, MetricVector};
use rusqlite::{params, Connection, OptionalExtension, Row};

fn map_row(row: &Row<'_>) -> Result<EnvironmentRecord, rusqlite::Error> {
    let trend: String = row.get(12)?;
    Ok(EnvironmentRecord {
        environment: row.get(0)?,
        score_date: row.get(1)?,
        metrics: MetricVector {
            correlation: row.get(2)?,
            progressive: row.get(3)?,
            inference: row.get(4)?,
            geometric: row.get(5)?,
            quantum: row.get(6)?,
            conversation: row.get(7)?,
            research: row.get(8)?,
            idle: row.get(9)?,
        },
        overall_score: row.get(10)?,
        improvement_from_previous: row.get(11)?,
        trend: EnvironmentTrend::from_name(&trend).unwrap_or(EnvironmentTrend::Stable),
        notes: row.get(13)?,
    })
}

const SELECT_COLUMNS: &str = "environment, score_date, correlation_score, progressive_score,
            inference_score, geometric_score, quantum_score, conversation_score,
            research_score, idle_score, overall_score, improvement_from_previous,
            trend, notes";

/// Insert or replace the record for (environment, score_date).
pub fn upsert(
    conn: &Connection,
    record: &EnvironmentRecord,
    recorded_at: i64,
) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO environment_scores (
            environment, score_date, correlation_score, progressive_score,
            inference_score, geometric_score, quantum_score, conversation_score,
            research_score, idle_score, overall_score, improvement_from_previous,
            trend, notes, recorded_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
        ON CONFLICT(environment, score_date) DO UPDATE SET
            correlation_score = excluded.correlation_score,
            progressive_score = excluded.progressive_score,
            inference_score = excluded.inference_score,
            geometric_score = excluded.geometric_score,
            quantum_score = excluded.quantum_score,
            conversation_score = excluded.conversation_score,
            research_score = excluded.research_score,
            idle_score = excluded.idle_score,
            overall_score = excluded.overall_score,
            improvement_from_previous = excluded.improvement_from_previous,
            trend = excluded.trend,
            notes = excluded.notes,
            recorded_at = excluded.recorded_at",
        params![
            record.environment,
            record.score_date,
            record.metrics.correlation,
            record.metrics.progressive,
            record.metrics.inference,
            record.metrics.geometric,
            record.metrics.quantum,
            record.metrics.conversation,
            record.metrics.research,
            record.metrics.idle,
            record.overall_score,
            record.improvement_from_previous,
            record.trend.as_str(),
            record.notes,
            recorded_at
        ],
    )
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    Ok(())
}

/// Most recent record for an environment.
pub fn latest(
    conn: &Connection,
    environment: &str,
) -> Result<Option<EnvironmentRecord>, StorageError> {
    conn.prepare_cached(&format!(
        "SELECT {SELECT_COLUMNS} FROM environment_scores
         WHERE environment = ?1 ORDER BY score_date DESC LIMIT 1"
    ))
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })?
    .query_row(params![environment], map_row)
    .optional()
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Up to `limit` records for an environment, newest first.
pub fn history(
    conn: &Connection,
    environment: &str,
    limit: usize,
) -> Result<Vec<EnvironmentRecord>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!(
            "SELECT {SELECT_COLUMNS} FROM environment_scores
             WHERE environment = ?1 ORDER BY score_date DESC LIMIT ?2"
        ))
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let rows = stmt
        .query_map(params![environment, limit as i64], map_row)
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Count stored environment records.
pub fn count(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM environment_scores", [], |row| row.get(0))
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}
