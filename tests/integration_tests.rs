//! Integration tests for the timer engine.
//!
//! These tests drive `TimerEngine` only through its public operations, with a
//! `MockAlertSink` standing in for the audio backend:
//! - TC-I-001: Length bounds and the running guard
//! - TC-I-002: Reset from any state
//! - TC-I-003: Phase rollover and the alert
//! - TC-I-004: Session/break adjustment asymmetry
//! - TC-I-005: Start/pause toggling and the scheduler

use std::sync::Arc;

use tokio::time::{timeout, Duration, Instant};

use session_clock::engine::TimerEngine;
use session_clock::sound::MockAlertSink;
use session_clock::types::{
    Intent, Step, TickOutcome, TimerMode, TimerState, MAX_LENGTH_MINUTES, MIN_LENGTH_MINUTES,
};

// ============================================================================
// Test Helpers
// ============================================================================

/// Creates an engine whose alert calls can be inspected.
fn create_engine() -> (TimerEngine, Arc<MockAlertSink>) {
    let sink = Arc::new(MockAlertSink::new());
    let engine = TimerEngine::new(Box::new(sink.clone()));
    (engine, sink)
}

/// Sets the session length by pressing the session buttons.
fn set_session_length(engine: &mut TimerEngine, minutes: u32) {
    while engine.state().session_length() > minutes {
        engine.adjust_session(Step::Decrement);
    }
    while engine.state().session_length() < minutes {
        engine.adjust_session(Step::Increment);
    }
}

/// Ticks until the countdown shows 00:00 without rolling over.
fn drain(engine: &mut TimerEngine) {
    while engine.state().time_left() > 0 {
        assert!(!engine.tick().is_rollover());
    }
}

fn assert_defaults(state: &TimerState) {
    assert_eq!(state.break_length(), 5);
    assert_eq!(state.session_length(), 25);
    assert_eq!(state.time_left(), 1500);
    assert_eq!(state.mode(), TimerMode::Session);
    assert!(!state.is_running());
}

// ============================================================================
// TC-I-001: Length Bounds and Running Guard
// ============================================================================

/// TC-I-001: lengths never leave 1-60 whatever the button sequence.
#[test]
fn tc_i_001_lengths_stay_in_bounds() {
    let (mut engine, _sink) = create_engine();
    let presses = [
        Intent::BreakDecrement,
        Intent::SessionIncrement,
        Intent::BreakDecrement,
        Intent::SessionIncrement,
        Intent::BreakIncrement,
    ];

    for round in 0..200 {
        engine.dispatch(presses[round % presses.len()]);
        let state = engine.state();
        assert!((MIN_LENGTH_MINUTES..=MAX_LENGTH_MINUTES).contains(&state.break_length()));
        assert!((MIN_LENGTH_MINUTES..=MAX_LENGTH_MINUTES).contains(&state.session_length()));
    }

    assert_eq!(engine.state().break_length(), MIN_LENGTH_MINUTES);
    assert_eq!(engine.state().session_length(), MAX_LENGTH_MINUTES);
}

/// TC-I-001: a press beyond a bound leaves the value unchanged.
#[test]
fn tc_i_001_beyond_bounds_is_noop() {
    let (mut engine, _sink) = create_engine();
    set_session_length(&mut engine, 60);
    let before = engine.state().clone();

    assert!(!engine.adjust_session(Step::Increment));
    assert_eq!(engine.state(), &before);

    for _ in 0..4 {
        engine.adjust_break(Step::Decrement);
    }
    assert_eq!(engine.state().break_length(), 1);
    assert!(!engine.adjust_break(Step::Decrement));
    assert_eq!(engine.state().break_length(), 1);
}

/// TC-I-001: adjustments while running leave the state untouched.
#[tokio::test(start_paused = true)]
async fn tc_i_001_adjust_while_running_is_noop() {
    let (mut engine, _sink) = create_engine();
    engine.start_pause();
    engine.tick();
    let before = engine.state().clone();

    for intent in [
        Intent::BreakDecrement,
        Intent::BreakIncrement,
        Intent::SessionDecrement,
        Intent::SessionIncrement,
    ] {
        engine.dispatch(intent);
        assert_eq!(engine.state(), &before, "{:?} changed a running clock", intent);
    }
}

// ============================================================================
// TC-I-002: Reset
// ============================================================================

/// TC-I-002: reset from a paused, reconfigured break yields the defaults.
#[tokio::test(start_paused = true)]
async fn tc_i_002_reset_from_break() {
    let (mut engine, sink) = create_engine();
    set_session_length(&mut engine, 1);
    engine.adjust_break(Step::Increment);
    engine.start_pause();
    drain(&mut engine);
    engine.tick();
    engine.start_pause();
    assert_eq!(engine.state().mode(), TimerMode::Break);

    engine.reset();

    assert_defaults(engine.state());
    assert_eq!(sink.stop_count(), 1);
}

/// TC-I-002: reset while running also stops the scheduler.
#[tokio::test(start_paused = true)]
async fn tc_i_002_reset_while_running() {
    let (mut engine, sink) = create_engine();
    engine.start_pause();
    engine.tick();

    engine.reset();

    assert_defaults(engine.state());
    assert!(!engine.is_scheduled());
    assert_eq!(sink.stop_count(), 1);
    assert_eq!(sink.play_count(), 0);
}

// ============================================================================
// TC-I-003: Phase Rollover
// ============================================================================

/// TC-I-003: Session at 00:00 rolls into a 5 minute break with one alert.
#[tokio::test(start_paused = true)]
async fn tc_i_003_session_rollover() {
    let (mut engine, sink) = create_engine();
    engine.start_pause();
    drain(&mut engine);
    assert_eq!(engine.state().mode(), TimerMode::Session);
    assert_eq!(sink.play_count(), 0);

    let outcome = engine.tick();

    assert_eq!(
        outcome,
        TickOutcome::Rollover {
            mode: TimerMode::Break
        }
    );
    assert_eq!(engine.state().mode(), TimerMode::Break);
    assert_eq!(engine.state().time_left(), 300);
    assert!(engine.state().is_running());
    assert_eq!(sink.play_count(), 1);
}

/// TC-I-003: reaching 00:00 in a break does not flip until the next tick.
#[tokio::test(start_paused = true)]
async fn tc_i_003_break_rolls_over_on_next_tick() {
    let (mut engine, sink) = create_engine();
    set_session_length(&mut engine, 1);
    engine.start_pause();
    drain(&mut engine);
    engine.tick();
    assert_eq!(engine.state().mode(), TimerMode::Break);

    while engine.state().time_left() > 1 {
        engine.tick();
    }
    assert_eq!(engine.tick(), TickOutcome::Counted { time_left: 0 });
    assert_eq!(engine.state().mode(), TimerMode::Break);
    assert_eq!(sink.play_count(), 1);

    engine.tick();

    assert_eq!(engine.state().mode(), TimerMode::Session);
    assert_eq!(engine.state().time_left(), 60);
    assert_eq!(sink.play_count(), 2);
}

/// TC-I-003: a failing alert does not hold up the rollover.
#[tokio::test(start_paused = true)]
async fn tc_i_003_alert_failure_is_ignored() {
    let (mut engine, sink) = create_engine();
    sink.set_should_fail(true);
    set_session_length(&mut engine, 1);
    engine.start_pause();
    drain(&mut engine);

    assert!(engine.tick().is_rollover());
    assert_eq!(engine.state().mode(), TimerMode::Break);
    assert_eq!(engine.state().time_left(), 300);
}

/// TC-I-003: ticks on a paused clock change nothing.
#[test]
fn tc_i_003_tick_while_paused() {
    let (mut engine, sink) = create_engine();
    let before = engine.state().clone();

    for _ in 0..10 {
        assert_eq!(engine.tick(), TickOutcome::Idle);
    }

    assert_eq!(engine.state(), &before);
    assert_eq!(sink.play_count(), 0);
}

// ============================================================================
// TC-I-004: Adjustment Asymmetry
// ============================================================================

/// TC-I-004: a session change during a paused break reloads the countdown.
#[tokio::test(start_paused = true)]
async fn tc_i_004_session_change_overwrites_break_countdown() {
    let (mut engine, _sink) = create_engine();
    set_session_length(&mut engine, 1);
    engine.start_pause();
    drain(&mut engine);
    engine.tick();
    engine.tick();
    engine.start_pause();
    assert_eq!(engine.state().mode(), TimerMode::Break);
    assert_eq!(engine.state().time_left(), 299);

    assert!(engine.adjust_session(Step::Increment));

    assert_eq!(engine.state().mode(), TimerMode::Break);
    assert_eq!(engine.state().time_left(), 120);
}

/// TC-I-004: a break change during a paused break leaves the countdown.
#[tokio::test(start_paused = true)]
async fn tc_i_004_break_change_keeps_break_countdown() {
    let (mut engine, _sink) = create_engine();
    set_session_length(&mut engine, 1);
    engine.start_pause();
    drain(&mut engine);
    engine.tick();
    engine.start_pause();
    assert_eq!(engine.state().time_left(), 300);

    assert!(engine.adjust_break(Step::Increment));

    assert_eq!(engine.state().break_length(), 6);
    assert_eq!(engine.state().time_left(), 300);
}

// ============================================================================
// TC-I-005: Start/Pause and Scheduler
// ============================================================================

/// TC-I-005: two presses with no tick in between restore the state.
#[tokio::test(start_paused = true)]
async fn tc_i_005_double_toggle() {
    let (mut engine, _sink) = create_engine();
    let before = engine.state().clone();

    engine.dispatch(Intent::StartStop);
    engine.dispatch(Intent::StartStop);

    assert_eq!(engine.state(), &before);
    assert!(!engine.is_scheduled());
}

/// TC-I-005: the scheduler delivers one tick per second while running.
#[tokio::test(start_paused = true)]
async fn tc_i_005_scheduler_paces_ticks() {
    let (mut engine, _sink) = create_engine();
    let started = Instant::now();
    engine.start_pause();

    for _ in 0..5 {
        engine.next_tick().await;
        engine.tick();
    }

    assert_eq!(Instant::now() - started, Duration::from_secs(5));
    assert_eq!(engine.state().formatted_time_left(), "24:55");
}

/// TC-I-005: after pausing, the scheduler stays silent.
#[tokio::test(start_paused = true)]
async fn tc_i_005_pause_silences_scheduler() {
    let (mut engine, _sink) = create_engine();
    engine.start_pause();
    engine.next_tick().await;
    engine.tick();
    engine.start_pause();

    let result = timeout(Duration::from_secs(30), engine.next_tick()).await;

    assert!(result.is_err());
    assert_eq!(engine.state().time_left(), 1499);
}
