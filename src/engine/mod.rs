//! Engine module for the session clock.
//!
//! - `timer`: the engine wiring state, scheduler and alert sink together
//! - `scheduler`: the single cancellable one-second timer

pub mod scheduler;
pub mod timer;

pub use scheduler::{TickScheduler, TICK_PERIOD};
pub use timer::TimerEngine;
