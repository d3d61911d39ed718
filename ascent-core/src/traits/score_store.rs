//! ScoreStore trait — the persistence seam.
//!
//! The pipeline only ever talks to history through this trait. The SQLite
//! implementation lives in `ascent-storage`; tests can substitute an
//! in-memory store. An unavailable store must surface as an error — the
//! non-decrease invariant cannot be honored against guessed history.

use crate::errors::StorageError;
use crate::types::{EnforcementLogEntry, EnvironmentRecord, GlobalScoreRecord, MilestoneEvent};

/// Time-ordered score persistence keyed by (environment, date) and (date).
///
/// History queries return records most-recent-first. Upserts replace the
/// row for an existing key atomically; they never leave a lower score in
/// place alongside a newer one.
pub trait ScoreStore {
    /// Most recent assessment for an environment, if any.
    fn latest_environment_record(
        &self,
        environment: &str,
    ) -> Result<Option<EnvironmentRecord>, StorageError>;

    /// Up to `limit` assessments for an environment, newest first.
    fn environment_history(
        &self,
        environment: &str,
        limit: usize,
    ) -> Result<Vec<EnvironmentRecord>, StorageError>;

    /// Most recent global score, if any.
    fn latest_global_record(&self) -> Result<Option<GlobalScoreRecord>, StorageError>;

    /// Up to `limit` global scores, newest first.
    fn global_history(&self, limit: usize) -> Result<Vec<GlobalScoreRecord>, StorageError>;

    /// Insert or replace the record for (environment, score_date).
    fn upsert_environment_record(&self, record: &EnvironmentRecord) -> Result<(), StorageError>;

    /// Insert or replace the global record for its score_date.
    fn upsert_global_record(&self, record: &GlobalScoreRecord) -> Result<(), StorageError>;

    /// Append a batch of audit entries. Entries are never updated or
    /// deleted afterwards.
    fn append_enforcement_log(&self, entries: &[EnforcementLogEntry]) -> Result<(), StorageError>;

    /// Record a milestone transition.
    fn record_milestone_event(&self, event: &MilestoneEvent) -> Result<(), StorageError>;

    /// Up to `limit` milestone events, newest first.
    fn milestone_events(&self, limit: usize) -> Result<Vec<MilestoneEvent>, StorageError>;
}
