//! V001: Initial schema.
//! environment_scores, global_scores, enforcement_log.

pub const MIGRATION_SQL: &str = r#"
-- Per-environment assessments, one row per (environment, score_date).
-- Re-running a cycle on the same date replaces the row (upsert).
CREATE TABLE IF NOT EXISTS environment_scores (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    environment TEXT NOT NULL,
    score_date TEXT NOT NULL,
    -- No upper bound: an enforcement bump at the ceiling may store
    -- marginally above 1.0.
    correlation_score REAL NOT NULL CHECK(correlation_score >= 0.0),
    progressive_score REAL NOT NULL CHECK(progressive_score >= 0.0),
    inference_score REAL NOT NULL CHECK(inference_score >= 0.0),
    geometric_score REAL NOT NULL CHECK(geometric_score >= 0.0),
    quantum_score REAL NOT NULL CHECK(quantum_score >= 0.0),
    conversation_score REAL NOT NULL CHECK(conversation_score >= 0.0),
    research_score REAL NOT NULL CHECK(research_score >= 0.0),
    idle_score REAL NOT NULL CHECK(idle_score >= 0.0),
    overall_score REAL NOT NULL CHECK(overall_score >= 0.850),
    improvement_from_previous REAL NOT NULL DEFAULT 0.0,
    trend TEXT NOT NULL DEFAULT 'stable',
    notes TEXT NOT NULL DEFAULT '',
    recorded_at INTEGER NOT NULL,
    UNIQUE(environment, score_date)
) STRICT;

CREATE INDEX IF NOT EXISTS idx_environment_scores_env_date
    ON environment_scores(environment, score_date DESC);

-- Combined scores, one row per score_date.
CREATE TABLE IF NOT EXISTS global_scores (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    score_date TEXT NOT NULL UNIQUE,
    global_score REAL NOT NULL CHECK(global_score >= 0.850),
    contributions_json TEXT NOT NULL,
    synergy_bonus REAL NOT NULL,
    evolution_rate REAL NOT NULL,
    daily_improvement_pct REAL NOT NULL,
    milestone TEXT NOT NULL,
    highlights TEXT NOT NULL DEFAULT '',
    optimizations TEXT NOT NULL DEFAULT '',
    recorded_at INTEGER NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_global_scores_date
    ON global_scores(score_date DESC);

-- Enforcement audit trail: append-only, one row per field per call.
-- Rows are never updated or deleted.
CREATE TABLE IF NOT EXISTS enforcement_log (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    environment TEXT NOT NULL,
    field TEXT NOT NULL,
    previous_value REAL NOT NULL,
    raw_value REAL NOT NULL,
    adjusted INTEGER NOT NULL DEFAULT 0,
    adjustment REAL NOT NULL DEFAULT 0.0,
    recorded_at INTEGER NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_enforcement_log_env_time
    ON enforcement_log(environment, recorded_at DESC);
"#;
