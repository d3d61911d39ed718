//! V002: Milestone transition events.

pub const MIGRATION_SQL: &str = r#"
-- Milestone transitions: appended when the classified label changes
-- between cycles. Append-only.
CREATE TABLE IF NOT EXISTS milestone_events (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    score_date TEXT NOT NULL,
    label TEXT NOT NULL,
    score REAL NOT NULL,
    significance TEXT NOT NULL,
    recorded_at INTEGER NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_milestone_events_time
    ON milestone_events(recorded_at DESC);
"#;
