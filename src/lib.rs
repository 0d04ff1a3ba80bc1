//! Session Clock Library
//!
//! This library provides the core functionality for the 25 + 5 clock.
//! It includes:
//! - The timer state machine and its data types
//! - The timer engine with its one-second tick scheduler
//! - The alert sink used on phase rollover
//! - CLI command parsing, input handling and display utilities

pub mod cli;
pub mod engine;
pub mod sound;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{format_time, Intent, Step, TickOutcome, TimerMode, TimerState};

pub use engine::{TickScheduler, TimerEngine};

pub use sound::{
    create_alert_sink, AlertSink, MockAlertSink, RodioAlertSink, SilentAlertSink, SoundError,
    SoundSource,
};
