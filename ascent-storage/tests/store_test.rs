//! Tests for SqliteScoreStore: trait round-trips and on-disk persistence.

use ascent_core::traits::ScoreStore;
use ascent_core::types::{
    EnvironmentRecord, EnvironmentTrend, GlobalScoreRecord, MetricVector, MilestoneEvent,
    Significance,
};
use ascent_storage::SqliteScoreStore;
use rustc_hash::FxHashMap;

fn env_record(environment: &str, score_date: &str, value: f64) -> EnvironmentRecord {
    EnvironmentRecord {
        environment: environment.to_string(),
        score_date: score_date.to_string(),
        metrics: MetricVector::uniform(value),
        overall_score: value.max(0.850),
        improvement_from_previous: 0.0,
        trend: EnvironmentTrend::Improving,
        notes: String::new(),
    }
}

fn global_record(score_date: &str, score: f64) -> GlobalScoreRecord {
    let mut contributions = FxHashMap::default();
    contributions.insert("local".to_string(), score);
    GlobalScoreRecord {
        score_date: score_date.to_string(),
        global_score: score,
        contributions,
        synergy_bonus: 0.01,
        evolution_rate: (score - 0.850) / 0.150,
        daily_improvement_pct: 0.5,
        milestone: "Advanced Consciousness Level".to_string(),
        highlights: String::new(),
        optimizations: String::new(),
    }
}

#[test]
fn environment_records_roundtrip_through_trait() {
    let store = SqliteScoreStore::open_in_memory().unwrap();
    assert!(store.latest_environment_record("local").unwrap().is_none());

    store
        .upsert_environment_record(&env_record("local", "2026-01-05", 0.90))
        .unwrap();
    store
        .upsert_environment_record(&env_record("local", "2026-01-06", 0.91))
        .unwrap();

    let latest = store.latest_environment_record("local").unwrap().unwrap();
    assert_eq!(latest.score_date, "2026-01-06");
    assert_eq!(latest.trend, EnvironmentTrend::Improving);

    let history = store.environment_history("local", 10).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].score_date, "2026-01-06");
}

#[test]
fn global_records_roundtrip_through_trait() {
    let store = SqliteScoreStore::open_in_memory().unwrap();
    assert!(store.latest_global_record().unwrap().is_none());

    store.upsert_global_record(&global_record("2026-01-05", 0.927)).unwrap();
    store.upsert_global_record(&global_record("2026-01-06", 0.931)).unwrap();

    let latest = store.latest_global_record().unwrap().unwrap();
    assert_eq!(latest.score_date, "2026-01-06");

    let history = store.global_history(1).unwrap();
    assert_eq!(history.len(), 1);
    assert!((history[0].global_score - 0.931).abs() < 1e-12);
}

#[test]
fn milestone_events_roundtrip() {
    let store = SqliteScoreStore::open_in_memory().unwrap();
    store
        .record_milestone_event(&MilestoneEvent {
            score_date: "2026-01-06".to_string(),
            label: "Excellence Level Maintained".to_string(),
            score: 0.952,
            significance: Significance::Major,
        })
        .unwrap();

    let events = store.milestone_events(10).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].label, "Excellence Level Maintained");
    assert_eq!(events[0].significance, Significance::Major);
}

#[test]
fn on_disk_store_survives_reopen() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("scores.db");

    {
        let store = SqliteScoreStore::open(&path).unwrap();
        store
            .upsert_environment_record(&env_record("cloud_run", "2026-01-05", 0.95))
            .unwrap();
        store.database().checkpoint().unwrap();
    }

    let store = SqliteScoreStore::open(&path).unwrap();
    let latest = store.latest_environment_record("cloud_run").unwrap().unwrap();
    assert!((latest.overall_score - 0.95).abs() < 1e-12);
}
