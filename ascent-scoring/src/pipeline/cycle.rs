//! The assessment cycle: validate → enforce → aggregate → persist →
//! combine → classify → persist → analyze → report.
//!
//! Writes begin only after every environment has validated and enforced
//! cleanly, so a failed cycle leaves no partial records behind. The
//! per-key upserts in the store make an accidental concurrent re-run for
//! the same date converge instead of tearing.

use std::collections::BTreeMap;

use ascent_core::config::AscentConfig;
use ascent_core::errors::{AssessmentError, PipelineError};
use ascent_core::events::{
    CycleCompleteEvent, CycleStartedEvent, EventDispatcher, MilestoneReachedEvent,
    ScoreAdjustedEvent,
};
use ascent_core::traits::ScoreStore;
use ascent_core::types::{
    EnvironmentRecord, EnvironmentTrend, GlobalScoreRecord, MetricVector, MilestoneEvent,
};
use ascent_core::constants::IMPROVING_DELTA;
use rustc_hash::FxHashMap;

use crate::aggregation::{environment_score, EnvironmentCombiner};
use crate::enforcement::{EnforcementBatch, ProgressiveEnforcer};
use crate::milestones::{significance_for, CONSCIOUSNESS_BANDS};
use crate::pipeline::highlights::highlights_and_optimizations;
use crate::report::AssessmentReport;
use crate::trends::{GlobalScorePoint, TrendAnalyzer};

/// Runs assessment cycles against a score store.
pub struct AssessmentPipeline<S: ScoreStore> {
    store: S,
    enforcer: ProgressiveEnforcer,
    combiner: EnvironmentCombiner,
    analyzer: TrendAnalyzer,
    dispatcher: EventDispatcher,
    floor: f64,
    fill_missing_with_floor: bool,
    trend_window: usize,
    stats_window: usize,
}

impl<S: ScoreStore> AssessmentPipeline<S> {
    /// Build a pipeline from explicit configuration. All weight tables and
    /// thresholds come from the config; nothing is read from globals.
    pub fn new(store: S, config: &AscentConfig) -> Self {
        let floor = config.scoring.effective_score_floor();
        Self {
            store,
            enforcer: ProgressiveEnforcer::new(config.scoring.effective_min_step()),
            combiner: EnvironmentCombiner::new(
                config.scoring.effective_weights(),
                floor,
                config.scoring.effective_synergy_window(),
            ),
            analyzer: TrendAnalyzer::new(
                config.trends.effective_trend_window(),
                config.trends.effective_stats_window(),
            ),
            dispatcher: EventDispatcher::new(),
            floor,
            fill_missing_with_floor: config.scoring.fills_missing_with_floor(),
            trend_window: config.trends.effective_trend_window(),
            stats_window: config.trends.effective_stats_window(),
        }
    }

    /// Attach an event dispatcher.
    pub fn with_dispatcher(mut self, dispatcher: EventDispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run one assessment cycle from named field maps, applying the
    /// configured missing-field policy (strict rejection by default).
    pub fn run_cycle_from_fields(
        &self,
        score_date: &str,
        raw: FxHashMap<String, FxHashMap<String, f64>>,
    ) -> Result<AssessmentReport, PipelineError> {
        let mut vectors = FxHashMap::default();
        for (environment, fields) in &raw {
            let vector = if self.fill_missing_with_floor {
                MetricVector::from_fields_lenient(environment, fields)?
            } else {
                MetricVector::from_fields(environment, fields)?
            };
            vectors.insert(environment.clone(), vector);
        }
        self.run_cycle(score_date, vectors)
    }

    /// Run one assessment cycle for the given date.
    ///
    /// Either every record for the date is written, or the cycle fails
    /// before the first write and the store is untouched.
    pub fn run_cycle(
        &self,
        score_date: &str,
        raw: FxHashMap<String, MetricVector>,
    ) -> Result<AssessmentReport, PipelineError> {
        if raw.is_empty() {
            return Err(AssessmentError::NoEnvironments.into());
        }

        let mut environments: Vec<String> = raw.keys().cloned().collect();
        environments.sort();

        tracing::info!(score_date, environments = environments.len(), "assessment cycle started");
        self.dispatcher.emit_cycle_started(&CycleStartedEvent {
            score_date: score_date.to_string(),
            environments: environments.clone(),
        });

        // Validate every vector before touching history or the store.
        for environment in &environments {
            raw[environment].validate(environment)?;
        }

        // Enforce and aggregate. Reads only; nothing is written until
        // every environment has a staged record.
        let mut staged: Vec<(EnvironmentRecord, EnforcementBatch)> = Vec::new();
        let mut scalars: FxHashMap<String, f64> = FxHashMap::default();

        for environment in &environments {
            let current = &raw[environment];
            let previous = self.store.latest_environment_record(environment)?;

            let (adjusted, batch) = self.enforcer.enforce(
                environment,
                current,
                previous.as_ref().map(|record| &record.metrics),
            );

            let overall = environment_score(&adjusted, self.floor);
            let delta = previous
                .as_ref()
                .map(|record| overall - record.overall_score)
                .unwrap_or(0.0);
            let trend = if delta > IMPROVING_DELTA {
                EnvironmentTrend::Improving
            } else if delta >= 0.0 {
                EnvironmentTrend::Stable
            } else {
                EnvironmentTrend::Enhanced
            };

            let adjusted_count = batch.iter().filter(|entry| entry.adjusted).count();
            let notes = if adjusted_count > 0 {
                format!("Progressive improvement enforced. Adjustments: {adjusted_count} metrics enhanced.")
            } else {
                "Natural performance improvement achieved.".to_string()
            };

            scalars.insert(environment.clone(), overall);
            staged.push((
                EnvironmentRecord {
                    environment: environment.clone(),
                    score_date: score_date.to_string(),
                    metrics: adjusted,
                    overall_score: overall,
                    improvement_from_previous: delta,
                    trend,
                    notes,
                },
                batch,
            ));
        }

        // First writes: audit batches, then the environment records they
        // explain.
        for (record, batch) in &staged {
            self.store.append_enforcement_log(batch)?;
            for entry in batch.iter().filter(|entry| entry.adjusted) {
                self.dispatcher.emit_score_adjusted(&ScoreAdjustedEvent {
                    environment: entry.environment.clone(),
                    field: entry.field.as_str().to_string(),
                    previous_value: entry.previous_value,
                    raw_value: entry.raw_value,
                    adjusted_value: record.metrics.get(entry.field),
                });
            }
            self.store.upsert_environment_record(record)?;
        }

        // Combine and classify. The previous global record is read before
        // the new one replaces it.
        let combined = self.combiner.combine(&scalars)?;
        let milestone = CONSCIOUSNESS_BANDS.classify(combined.global_score);
        if CONSCIOUSNESS_BANDS.is_fallback(milestone) {
            tracing::warn!(
                global_score = combined.global_score,
                "global score fell below the floor; invariant broken upstream"
            );
        }

        let previous_global = self.store.latest_global_record()?;
        let daily_improvement_pct = previous_global
            .as_ref()
            .filter(|previous| previous.global_score > 0.0)
            .map(|previous| {
                (combined.global_score - previous.global_score) / previous.global_score * 100.0
            })
            .unwrap_or(0.0);

        let records: Vec<EnvironmentRecord> =
            staged.iter().map(|(record, _)| record.clone()).collect();
        let (highlights, optimizations) = highlights_and_optimizations(&records);

        let global_record = GlobalScoreRecord {
            score_date: score_date.to_string(),
            global_score: combined.global_score,
            contributions: combined.contributions.clone(),
            synergy_bonus: combined.synergy_bonus,
            evolution_rate: combined.evolution_rate,
            daily_improvement_pct,
            milestone: milestone.to_string(),
            highlights,
            optimizations,
        };
        self.store.upsert_global_record(&global_record)?;

        let milestone_changed = previous_global
            .as_ref()
            .map(|previous| previous.milestone != milestone)
            .unwrap_or(true);
        if milestone_changed {
            self.store.record_milestone_event(&MilestoneEvent {
                score_date: score_date.to_string(),
                label: milestone.to_string(),
                score: combined.global_score,
                significance: significance_for(combined.global_score),
            })?;
            self.dispatcher.emit_milestone_reached(&MilestoneReachedEvent {
                score_date: score_date.to_string(),
                label: milestone.to_string(),
                score: combined.global_score,
            });
        }

        // Trend analysis reads the history just written.
        let history = self.store.global_history(self.trend_window.max(self.stats_window))?;
        let points: Vec<GlobalScorePoint> = history.iter().map(GlobalScorePoint::from).collect();
        let trend = self.analyzer.trend(&points);
        let rolling = self.analyzer.rolling_stats(&points);

        let adjustments: Vec<_> = staged
            .iter()
            .flat_map(|(_, batch)| batch.iter().cloned())
            .collect();
        let adjusted_count = adjustments.iter().filter(|entry| entry.adjusted).count();

        let per_environment: BTreeMap<String, EnvironmentRecord> = records
            .into_iter()
            .map(|record| (record.environment.clone(), record))
            .collect();

        tracing::info!(
            score_date,
            global_score = combined.global_score,
            milestone,
            adjusted = adjusted_count,
            "assessment cycle complete"
        );
        self.dispatcher.emit_cycle_complete(&CycleCompleteEvent {
            score_date: score_date.to_string(),
            global_score: combined.global_score,
            milestone: milestone.to_string(),
            adjustments: adjusted_count,
        });

        Ok(AssessmentReport {
            score_date: score_date.to_string(),
            milestone: milestone.to_string(),
            global: global_record,
            per_environment,
            adjustments,
            trend,
            rolling,
        })
    }
}
