//! Queries for the global_scores table.

use ascent_core::errors::StorageError;
use ascent_core::types::GlobalScoreRecord;
use rusqlite::{params, Connection, OptionalExtension, Row};

fn map_row(row: &Row<'_>) -> Result<GlobalScoreRecord, rusqlite::Error> {
    let contributions_json: String = row.get(2)?;
    let contributions = serde_json::from_str(&contributions_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            rusqlite::types::Type::Text,
            Box::new(e),
        )
    })?;
    Ok(GlobalScoreRecord {
        score_date: row.get(0)?,
        global_score: row.get(1)?,
        contributions,
        synergy_bonus: row.get(3)?,
        evolution_rate: row.get(4)?,
        daily_improvement_pct: row.get(5)?,
        milestone: row.get(6)?,
        highlights: row.get(7)?,
        optimizations: row.get(8)?,
    })
}

const SELECT_COLUMNS: &str = "score_date, global_score, contributions_json, synergy_bonus,
            evolution_rate, daily_improvement_pct, milestone, highlights, optimizations";

/// Insert or replace the record for its score_date.
pub fn upsert(
    conn: &Connection,
    record: &GlobalScoreRecord,
    recorded_at: i64,
) -> Result<(), StorageError> {
    let contributions_json =
        serde_json::to_string(&record.contributions).map_err(|e| StorageError::Serialization {
            message: e.to_string(),
        })?;

    conn.execute(
        "INSERT INTO global_scores (
            score_date, global_score, contributions_json, synergy_bonus,
            evolution_rate, daily_improvement_pct, milestone, highlights,
            optimizations, recorded_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
        ON CONFLICT(score_date) DO UPDATE SET
            global_score = excluded.global_score,
            contributions_json = excluded.contributions_json,
            synergy_bonus = excluded.synergy_bonus,
            evolution_rate = excluded.evolution_rate,
            daily_improvement_pct = excluded.daily_improvement_pct,
            milestone = excluded.milestone,
            highlights = excluded.highlights,
            optimizations = excluded.optimizations,
            recorded_at = excluded.recorded_at",
        params![
            record.score_date,
            record.global_score,
            contributions_json,
            record.synergy_bonus,
            record.evolution_rate,
            record.daily_improvement_pct,
            record.milestone,
            record.highlights,
            record.optimizations,
            recorded_at
        ],
    )
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    Ok(())
}

/// Most recent global record.
pub fn latest(conn: &Connection) -> Result<Option<GlobalScoreRecord>, StorageError> {
    conn.prepare_cached(&format!(
        "SELECT {SELECT_COLUMNS} FROM global_scores ORDER BY score_date DESC LIMIT 1"
    ))
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })?
    .query_row([], map_row)
    .optional()
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Up to `limit` global records, newest first.
pub fn history(conn: &Connection, limit: usize) -> Result<Vec<GlobalScoreRecord>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!(
            "SELECT {SELECT_COLUMNS} FROM global_scores ORDER BY score_date DESC LIMIT ?1"
        ))
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let rows = stmt
        .query_map(params![limit as i64], map_row)
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Count stored global records.
pub fn count(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM global_scores", [], |row| row.get(0))
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}
