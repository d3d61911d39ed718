//! Queries for the milestone_events table.

use ascent_core::errors::StorageError;
use ascent_core::types::{MilestoneEvent, Significance};
use rusqlite::{params, Connection, Row};

fn map_row(row: &Row<'_>) -> Result<MilestoneEvent, rusqlite::Error> {
    let significance: String = row.get(3)?;
    Ok(MilestoneEvent {
        score_date: row.get(0)?,
        label: row.get(1)?,
        score: row.get(2)?,
        significance: Significance::from_name(&significance).unwrap_or(Significance::Routine),
    })
}

/// Append a milestone transition.
pub fn insert(
    conn: &Connection,
    event: &MilestoneEvent,
    recorded_at: i64,
) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO milestone_events (score_date, label, score, significance, recorded_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            event.score_date,
            event.label,
            event.score,
            event.significance.as_str(),
            recorded_at
        ],
    )
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    Ok(())
}

/// Up to `limit` milestone events, newest first.
pub fn recent(conn: &Connection, limit: usize) -> Result<Vec<MilestoneEvent>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT score_date, label, score, significance FROM milestone_events
             ORDER BY recorded_at DESC, id DESC LIMIT ?1",
        )
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let rows = stmt
        .query_map(params![limit as i64], map_row)
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}
