//! Parsing of typed commands into clock intents.
//!
//! Every button of the clock has a long name (matching the button's
//! element id in the web version) and a short alias.

use thiserror::Error;

use crate::types::Intent;

/// One parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Press a clock button
    Press(Intent),
    /// Show the key bindings
    Help,
    /// Leave the clock
    Quit,
}

/// Errors raised for input that maps to no command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command: '{0}' (type 'help' for the list)")]
    Unknown(String),
}

/// Help text listing every accepted command.
pub const HELP_TEXT: &str = "\
Commands:
  start, pause, p, <enter>   start / pause the countdown
  reset, r                   restore 25 + 5 and stop
  b+, break-increment        break length +1 minute
  b-, break-decrement        break length -1 minute
  s+, session-increment      session length +1 minute
  s-, session-decrement      session length -1 minute
  help, ?                    show this help
  quit, q, exit              leave the clock";

/// Parses one line of input.
///
/// Surrounding whitespace is ignored and matching is case-insensitive. An
/// empty line toggles start/pause.
pub fn parse_command(line: &str) -> Result<InputCommand, InputError> {
    let token = line.trim().to_ascii_lowercase();

    let command = match token.as_str() {
        "" | "start_stop" | "start" | "pause" | "p" => InputCommand::Press(Intent::StartStop),
        "reset" | "r" => InputCommand::Press(Intent::Reset),
        "break-increment" | "b+" => InputCommand::Press(Intent::BreakIncrement),
        "break-decrement" | "b-" => InputCommand::Press(Intent::BreakDecrement),
        "session-increment" | "s+" => InputCommand::Press(Intent::SessionIncrement),
        "session-decrement" | "s-" => InputCommand::Press(Intent::SessionDecrement),
        "help" | "?" => InputCommand::Help,
        "quit" | "q" | "exit" => InputCommand::Quit,
        _ => return Err(InputError::Unknown(line.trim().to_string())),
    };

    Ok(command)
}
