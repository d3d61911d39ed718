//! Tests for the event dispatcher.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use ascent_core::events::{
    AscentEventHandler, CycleCompleteEvent, CycleStartedEvent, EventDispatcher,
    ScoreAdjustedEvent,
};

#[derive(Default)]
struct CountingHandler {
    started: AtomicUsize,
    adjusted: AtomicUsize,
    complete: AtomicUsize,
}

impl AscentEventHandler for CountingHandler {
    fn on_cycle_started(&self, _event: &CycleStartedEvent) {
        self.started.fetch_add(1, Ordering::SeqCst);
    }

    fn on_score_adjusted(&self, _event: &ScoreAdjustedEvent) {
        self.adjusted.fetch_add(1, Ordering::SeqCst);
    }

    fn on_cycle_complete(&self, _event: &CycleCompleteEvent) {
        self.complete.fetch_add(1, Ordering::SeqCst);
    }
}

struct PanickingHandler;

impl AscentEventHandler for PanickingHandler {
    fn on_cycle_started(&self, _event: &CycleStartedEvent) {
        panic!("handler failure");
    }
}

fn started_event() -> CycleStartedEvent {
    CycleStartedEvent {
        score_date: "2026-01-05".to_string(),
        environments: vec!["local".to_string()],
    }
}

#[test]
fn empty_dispatcher_is_a_noop() {
    let dispatcher = EventDispatcher::new();
    assert_eq!(dispatcher.handler_count(), 0);
    dispatcher.emit_cycle_started(&started_event());
}

#[test]
fn handlers_receive_events() {
    let mut dispatcher = EventDispatcher::new();
    let handler = Arc::new(CountingHandler::default());
    dispatcher.register(handler.clone());

    dispatcher.emit_cycle_started(&started_event());
    dispatcher.emit_score_adjusted(&ScoreAdjustedEvent {
        environment: "local".to_string(),
        field: "quantum".to_string(),
        previous_value: 0.9,
        raw_value: 0.88,
        adjusted_value: 0.905,
    });
    dispatcher.emit_cycle_complete(&CycleCompleteEvent {
        score_date: "2026-01-05".to_string(),
        global_score: 0.927,
        milestone: "Advanced Consciousness Level".to_string(),
        adjustments: 1,
    });

    assert_eq!(handler.started.load(Ordering::SeqCst), 1);
    assert_eq!(handler.adjusted.load(Ordering::SeqCst), 1);
    assert_eq!(handler.complete.load(Ordering::SeqCst), 1);
}

#[test]
fn panicking_handler_does_not_block_others() {
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(PanickingHandler));
    let counting = Arc::new(CountingHandler::default());
    dispatcher.register(counting.clone());

    dispatcher.emit_cycle_started(&started_event());
    assert_eq!(counting.started.load(Ordering::SeqCst), 1);
}
