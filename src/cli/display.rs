//! Display adapter for the session clock.
//!
//! Renders the clock state either as human-readable text or as one JSON
//! object per line. The adapter only reads `TimerState`; all changes go
//! through the engine.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::input::HELP_TEXT;
use crate::types::{TickOutcome, TimerState};

/// Title shown at the top of every text frame.
pub const TITLE: &str = "25 + 5 Clock";

/// Output style selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// One JSON line of output.
#[derive(Debug, Serialize)]
struct Snapshot<'a> {
    event: &'static str,
    #[serde(flatten)]
    state: &'a TimerState,
    display: String,
    label: &'static str,
}

impl<'a> Snapshot<'a> {
    fn new(event: &'static str, state: &'a TimerState) -> Self {
        Self {
            event,
            state,
            display: state.formatted_time_left(),
            label: state.control_label(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    event: &'static str,
    message: &'a str,
}

// ============================================================================
// Display
// ============================================================================

/// Writes clock updates to an output stream.
pub struct Display<W: Write> {
    out: W,
    format: OutputFormat,
}

impl Display<io::Stdout> {
    /// Creates a display writing to stdout.
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write> Display<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Consumes the display and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Shows the full clock after a button press.
    pub fn show_frame(&mut self, state: &TimerState) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => self.write_json(&Snapshot::new("state", state)),
            OutputFormat::Text => {
                writeln!(self.out, "{}", TITLE)?;
                writeln!(
                    self.out,
                    "Break Length: {:<4} Session Length: {}",
                    state.break_length(),
                    state.session_length()
                )?;
                writeln!(self.out, "{}", state.mode())?;
                writeln!(self.out, "{}", state.formatted_time_left())?;
                writeln!(self.out, "[{}] [Reset]", state.control_label())?;
                writeln!(self.out)?;
                self.out.flush()
            }
        }
    }

    /// Shows the countdown after a scheduler tick.
    pub fn show_tick(&mut self, state: &TimerState, outcome: TickOutcome) -> io::Result<()> {
        let event = if outcome.is_rollover() {
            "rollover"
        } else {
            "tick"
        };

        match self.format {
            OutputFormat::Json => self.write_json(&Snapshot::new(event, state)),
            OutputFormat::Text => {
                if outcome.is_rollover() {
                    writeln!(self.out, "*** {} started ***", state.mode())?;
                }
                writeln!(
                    self.out,
                    "{} {}",
                    state.mode(),
                    state.formatted_time_left()
                )?;
                self.out.flush()
            }
        }
    }

    /// Shows the list of accepted commands.
    pub fn show_help(&mut self) -> io::Result<()> {
        self.show_message("help", HELP_TEXT)
    }

    /// Shows an error message.
    pub fn show_error(&mut self, message: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => self.show_message("error", message),
            OutputFormat::Text => self.show_message("error", &format!("Error: {}", message)),
        }
    }

    fn show_message(&mut self, event: &'static str, message: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => self.write_json(&Message { event, message }),
            OutputFormat::Text => {
                writeln!(self.out, "{}", message)?;
                self.out.flush()
            }
        }
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

// ============================================================================
// Tests
// ============================================================================
