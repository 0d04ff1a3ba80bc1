//! Timer engine for the session clock.
//!
//! `TimerEngine` funnels every user intent and every scheduler tick through
//! the `TimerState` operations, keeps the single tick scheduler in step with
//! the running flag, and fires the alert sink on rollover and reset.

use tracing::{debug, info, warn};

use crate::sound::AlertSink;
use crate::types::{Intent, Step, TickOutcome, TimerState};

use super::scheduler::TickScheduler;

// ============================================================================
// TimerEngine
// ============================================================================

/// Owns the clock state, its scheduler handle and the alert sink.
pub struct TimerEngine {
    /// Current timer state
    state: TimerState,
    /// The one repeating timer driving `tick`
    scheduler: TickScheduler,
    /// Played on rollover, stopped on reset
    alert: Box<dyn AlertSink>,
}

impl TimerEngine {
    /// Creates an engine in the default paused 25 + 5 state.
    pub fn new(alert: Box<dyn AlertSink>) -> Self {
        Self {
            state: TimerState::new(),
            scheduler: TickScheduler::new(),
            alert,
        }
    }

    /// Toggles start/pause.
    ///
    /// Arms the scheduler when the clock starts running and cancels it when
    /// it pauses. Must be called from within a tokio runtime.
    pub fn start_pause(&mut self) -> bool {
        let running = self.state.toggle_running();
        if running {
            self.scheduler.arm();
            debug!("Clock started at {}", self.state.formatted_time_left());
        } else {
            self.scheduler.cancel();
            debug!("Clock paused at {}", self.state.formatted_time_left());
        }
        running
    }

    /// Restores the defaults, stops the scheduler and rewinds the alert.
    pub fn reset(&mut self) {
        self.scheduler.cancel();
        self.state.reset();
        self.alert.stop();
        info!("Clock reset");
    }

    /// Adjusts the break length. Ignored while running or out of range.
    pub fn adjust_break(&mut self, step: Step) -> bool {
        let applied = self.state.adjust_break(step);
        if applied {
            debug!("Break length set to {}", self.state.break_length());
        } else {
            debug!("Break adjustment {:?} ignored", step);
        }
        applied
    }

    /// Adjusts the session length. Ignored while running or out of range.
    ///
    /// On success the countdown is reloaded from the new session length,
    /// even during a break.
    pub fn adjust_session(&mut self, step: Step) -> bool {
        let applied = self.state.adjust_session(step);
        if applied {
            debug!("Session length set to {}", self.state.session_length());
        } else {
            debug!("Session adjustment {:?} ignored", step);
        }
        applied
    }

    /// Advances the clock by one second.
    ///
    /// Plays the alert on rollover. A playback failure is logged and does
    /// not affect the transition.
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.state.tick();

        if let TickOutcome::Rollover { mode } = outcome {
            info!(
                "Phase rollover: {} ({})",
                mode,
                self.state.formatted_time_left()
            );
            if let Err(e) = self.alert.play() {
                warn!("Failed to play alert: {}", e);
            }
        }

        outcome
    }

    /// Applies a button press.
    pub fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::BreakDecrement => {
                self.adjust_break(Step::Decrement);
            }
            Intent::BreakIncrement => {
                self.adjust_break(Step::Increment);
            }
            Intent::SessionDecrement => {
                self.adjust_session(Step::Decrement);
            }
            Intent::SessionIncrement => {
                self.adjust_session(Step::Increment);
            }
            Intent::StartStop => {
                self.start_pause();
            }
            Intent::Reset => self.reset(),
        }
    }

    /// Waits until the scheduler fires. Pending forever while paused.
    pub async fn next_tick(&mut self) {
        self.scheduler.next_tick().await;
    }

    /// Returns true if the repeating timer is armed.
    pub fn is_scheduled(&self) -> bool {
        self.scheduler.is_armed()
    }

    /// Returns a reference to the current timer state.
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Runs `n` ticks back to back (for testing).
    #[cfg(test)]
    fn tick_n(&mut self, n: u32) -> TickOutcome {
        let mut outcome = TickOutcome::Idle;
        for _ in 0..n {
            outcome = self.tick();
        }
        outcome
    }
}

// ============================================================================
// Tests
// ============================================================================
