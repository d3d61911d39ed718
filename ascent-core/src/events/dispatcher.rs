//! EventDispatcher — synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::AscentEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// When no handlers are registered, `emit` iterates over an empty Vec —
/// effectively zero cost.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn AscentEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn AscentEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A handler that panics does not prevent subsequent handlers from
    /// receiving the event.
    fn emit<F: Fn(&dyn AscentEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("event handler panicked; continuing dispatch");
            }
        }
    }

    pub fn emit_cycle_started(&self, event: &CycleStartedEvent) {
        self.emit(|h| h.on_cycle_started(event));
    }

    pub fn emit_score_adjusted(&self, event: &ScoreAdjustedEvent) {
        self.emit(|h| h.on_score_adjusted(event));
    }

    pub fn emit_milestone_reached(&self, event: &MilestoneReachedEvent) {
        self.emit(|h| h.on_milestone_reached(event));
    }

    pub fn emit_cycle_complete(&self, event: &CycleCompleteEvent) {
        self.emit(|h| h.on_cycle_complete(event));
    }
}
