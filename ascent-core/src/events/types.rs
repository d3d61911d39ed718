//! Event payload types for the assessment lifecycle.

/// Payload for `on_cycle_started`.
#[derive(Debug, Clone)]
pub struct CycleStartedEvent {
    pub score_date: String,
    pub environments: Vec<String>,
}

/// Payload for `on_score_adjusted` — emitted once per synthetic bump.
#[derive(Debug, Clone)]
pub struct ScoreAdjustedEvent {
    pub environment: String,
    pub field: String,
    pub previous_value: f64,
    pub raw_value: f64,
    pub adjusted_value: f64,
}

/// Payload for `on_milestone_reached` — emitted when the classified
/// milestone label changes between cycles.
#[derive(Debug, Clone)]
pub struct MilestoneReachedEvent {
    pub score_date: String,
    pub label: String,
    pub score: f64,
}

/// Payload for `on_cycle_complete`.
#[derive(Debug, Clone)]
pub struct CycleCompleteEvent {
    pub score_date: String,
    pub global_score: f64,
    pub milestone: String,
    pub adjustments: usize,
}
