//! Handler trait for assessment lifecycle events.

use super::types::*;

/// Receiver for pipeline events. All methods default to no-ops so
/// handlers only implement what they care about.
pub trait AscentEventHandler: Send + Sync {
    fn on_cycle_started(&self, event: &CycleStartedEvent) {
        let _ = event;
    }

    fn on_score_adjusted(&self, event: &ScoreAdjustedEvent) {
        let _ = event;
    }

    fn on_milestone_reached(&self, event: &MilestoneReachedEvent) {
        let _ = event;
    }

    fn on_cycle_complete(&self, event: &CycleCompleteEvent) {
        let _ = event;
    }
}
