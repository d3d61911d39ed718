//! SqliteScoreStore — the ScoreStore implementation over SQLite.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use ascent_core::errors::StorageError;
use ascent_core::traits::ScoreStore;
use ascent_core::types::{
    EnforcementLogEntry, EnvironmentRecord, GlobalScoreRecord, MilestoneEvent,
};

use crate::connection::writer::with_immediate_transaction;
use crate::connection::Database;
use crate::queries::{enforcement_log, environment_scores, global_scores, milestones};

/// Score persistence backed by a single SQLite database.
pub struct SqliteScoreStore {
    db: Database,
}

impl SqliteScoreStore {
    /// Open (or create) the store at the given path.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        Ok(Self {
            db: Database::open(path)?,
        })
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            db: Database::open_in_memory()?,
        })
    }

    /// Access the underlying database (checkpointing, direct queries).
    pub fn database(&self) -> &Database {
        &self.db
    }

    fn now_unix() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}

impl ScoreStore for SqliteScoreStore {
    fn latest_environment_record(
        &self,
        environment: &str,
    ) -> Result<Option<EnvironmentRecord>, StorageError> {
        self.db
            .with_conn(|conn| environment_scores::latest(conn, environment))
    }

    fn environment_history(
        &self,
        environment: &str,
        limit: usize,
    ) -> Result<Vec<EnvironmentRecord>, StorageError> {
        self.db
            .with_conn(|conn| environment_scores::history(conn, environment, limit))
    }

    fn latest_global_record(&self) -> Result<Option<GlobalScoreRecord>, StorageError> {
        self.db.with_conn(global_scores::latest)
    }

    fn global_history(&self, limit: usize) -> Result<Vec<GlobalScoreRecord>, StorageError> {
        self.db.with_conn(|conn| global_scores::history(conn, limit))
    }

    fn upsert_environment_record(&self, record: &EnvironmentRecord) -> Result<(), StorageError> {
        let recorded_at = Self::now_unix();
        tracing::debug!(
            environment = %record.environment,
            score_date = %record.score_date,
            overall_score = record.overall_score,
            "upserting environment record"
        );
        self.db.with_conn(|conn| {
            with_immediate_transaction(conn, |tx| {
                environment_scores::upsert(tx, record, recorded_at)
            })
        })
    }

    fn upsert_global_record(&self, record: &GlobalScoreRecord) -> Result<(), StorageError> {
        let recorded_at = Self::now_unix();
        tracing::debug!(
            score_date = %record.score_date,
            global_score = record.global_score,
            milestone = %record.milestone,
            "upserting global record"
        );
        self.db.with_conn(|conn| {
            with_immediate_transaction(conn, |tx| global_scores::upsert(tx, record, recorded_at))
        })
    }

    fn append_enforcement_log(&self, entries: &[EnforcementLogEntry]) -> Result<(), StorageError> {
        if entries.is_empty() {
            return Ok(());
        }
        let recorded_at = Self::now_unix();
        tracing::debug!(entries = entries.len(), "appending enforcement log batch");
        self.db.with_conn(|conn| {
            with_immediate_transaction(conn, |tx| {
                enforcement_log::append_batch(tx, entries, recorded_at)
            })
        })
    }

    fn record_milestone_event(&self, event: &MilestoneEvent) -> Result<(), StorageError> {
        let recorded_at = Self::now_unix();
        tracing::debug!(label = %event.label, score = event.score, "recording milestone event");
        self.db
            .with_conn(|conn| milestones::insert(conn, event, recorded_at))
    }

    fn milestone_events(&self, limit: usize) -> Result<Vec<MilestoneEvent>, StorageError> {
        self.db.with_conn(|conn| milestones::recent(conn, limit))
    }
}
