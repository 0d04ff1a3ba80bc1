//! Core data types for the session clock.
//!
//! This module defines:
//! - The timer mode (Session / Break)
//! - The user intent vocabulary (one variant per button)
//! - `TimerState`, the pure state machine behind the clock
//! - `format_time` for mm:ss rendering

use serde::Serialize;

// ============================================================================
// Constants
// ============================================================================

/// Smallest configurable phase length in minutes.
pub const MIN_LENGTH_MINUTES: u32 = 1;

/// Largest configurable phase length in minutes.
pub const MAX_LENGTH_MINUTES: u32 = 60;

/// Break length restored by reset.
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

/// Session length restored by reset.
pub const DEFAULT_SESSION_MINUTES: u32 = 25;

const SECONDS_PER_MINUTE: u32 = 60;

// ============================================================================
// TimerMode
// ============================================================================

/// The phase the clock is currently counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TimerMode {
    /// Work-focused phase
    #[default]
    Session,
    /// Rest phase
    Break,
}

impl TimerMode {
    /// Returns the label shown above the countdown.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerMode::Session => "Session",
            TimerMode::Break => "Break",
        }
    }

    /// Returns the mode entered on rollover.
    pub fn next(&self) -> Self {
        match self {
            TimerMode::Session => TimerMode::Break,
            TimerMode::Break => TimerMode::Session,
        }
    }
}

impl std::fmt::Display for TimerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Step / Intent
// ============================================================================

/// A single-minute adjustment of a phase length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// One minute less
    Decrement,
    /// One minute more
    Increment,
}

impl Step {
    /// Returns the signed delta in minutes.
    pub fn delta(&self) -> i64 {
        match self {
            Step::Decrement => -1,
            Step::Increment => 1,
        }
    }

    /// Applies the step to `minutes`, returning `None` outside the allowed range.
    fn apply(&self, minutes: u32) -> Option<u32> {
        let next = i64::from(minutes) + self.delta();
        let range = i64::from(MIN_LENGTH_MINUTES)..=i64::from(MAX_LENGTH_MINUTES);
        if range.contains(&next) {
            u32::try_from(next).ok()
        } else {
            None
        }
    }
}

/// A user action forwarded by the display adapter.
///
/// Each variant corresponds to exactly one button on the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    BreakDecrement,
    BreakIncrement,
    SessionDecrement,
    SessionIncrement,
    StartStop,
    Reset,
}

// ============================================================================
// TickOutcome
// ============================================================================

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The clock is paused; nothing changed
    Idle,
    /// One second was counted down
    Counted {
        /// Seconds left after the decrement
        time_left: u32,
    },
    /// The phase rolled over
    Rollover {
        /// The mode that was entered
        mode: TimerMode,
    },
}

impl TickOutcome {
    /// Returns true if this tick flipped the mode.
    pub fn is_rollover(&self) -> bool {
        matches!(self, TickOutcome::Rollover { .. })
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// The full state of the clock.
///
/// Fields are private; every mutation goes through one of the operations
/// below so the length bounds and the running guard always hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    /// Break length in minutes (1-60)
    break_length: u32,
    /// Session length in minutes (1-60)
    session_length: u32,
    /// Seconds remaining in the current phase
    time_left: u32,
    /// Current phase
    mode: TimerMode,
    /// Whether the countdown is active
    running: bool,
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            break_length: DEFAULT_BREAK_MINUTES,
            session_length: DEFAULT_SESSION_MINUTES,
            time_left: DEFAULT_SESSION_MINUTES * SECONDS_PER_MINUTE,
            mode: TimerMode::Session,
            running: false,
        }
    }
}

impl TimerState {
    /// Creates a state with the default 25 + 5 configuration, paused.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn break_length(&self) -> u32 {
        self.break_length
    }

    pub fn session_length(&self) -> u32 {
        self.session_length
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the configured length of `mode` in minutes.
    pub fn length_of(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Session => self.session_length,
            TimerMode::Break => self.break_length,
        }
    }

    /// Returns the label for the start/pause control.
    pub fn control_label(&self) -> &'static str {
        if self.running {
            "Pause"
        } else {
            "Start"
        }
    }

    /// Returns `time_left` as mm:ss.
    pub fn formatted_time_left(&self) -> String {
        format_time(self.time_left)
    }

    /// Toggles between running and paused.
    ///
    /// Returns the new running flag. No other field changes.
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// Restores the defaults, including stopping the countdown.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Adjusts the break length by one minute.
    ///
    /// Ignored while running or when the result would leave 1-60.
    /// `time_left` is never touched, even during a break.
    pub fn adjust_break(&mut self, step: Step) -> bool {
        if self.running {
            return false;
        }
        match step.apply(self.break_length) {
            Some(minutes) => {
                self.break_length = minutes;
                true
            }
            None => false,
        }
    }

    /// Adjusts the session length by one minute.
    ///
    /// Ignored while running or when the result would leave 1-60. On success
    /// `time_left` is reloaded from the new session length regardless of mode.
    pub fn adjust_session(&mut self, step: Step) -> bool {
        if self.running {
            return false;
        }
        match step.apply(self.session_length) {
            Some(minutes) => {
                self.session_length = minutes;
                self.time_left = minutes * SECONDS_PER_MINUTE;
                true
            }
            None => false,
        }
    }

    /// Advances the countdown by one second.
    ///
    /// A tick that finds `time_left` at zero flips the mode and reloads
    /// `time_left` from the new phase; it never flips twice.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        if self.time_left > 0 {
            self.time_left -= 1;
            return TickOutcome::Counted {
                time_left: self.time_left,
            };
        }

        self.mode = self.mode.next();
        self.time_left = self.length_of(self.mode) * SECONDS_PER_MINUTE;
        TickOutcome::Rollover { mode: self.mode }
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Formats seconds as zero-padded mm:ss.
///
/// Minutes are not wrapped into hours, so 3600 renders as "60:00".
pub fn format_time(total_seconds: u32) -> String {
    let minutes = total_seconds / SECONDS_PER_MINUTE;
    let seconds = total_seconds % SECONDS_PER_MINUTE;
    format!("{:02}:{:02}", minutes, seconds)
}

// ============================================================================
// Tests
// ============================================================================
