//! CLI module for the session clock.
//!
//! This module provides the terminal front end:
//! - `commands`: Command definitions using clap derive
//! - `input`: Parsing of typed button presses
//! - `display`: Text and JSON rendering of the clock
//! - `session`: The interactive event loop

pub mod commands;
pub mod display;
pub mod input;
pub mod session;

pub use commands::{Cli, Commands, RunArgs};
pub use display::{Display, OutputFormat};
pub use input::{parse_command, InputCommand, InputError};
pub use session::{run_session, spawn_stdin_reader, InputLines, SessionEnd};
