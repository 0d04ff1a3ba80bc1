//! Interactive clock session.
//!
//! Reads one command per line, forwards button presses to the engine and
//! renders every change. Ticks come from the engine's scheduler; both
//! sources are polled on the same task so state is never shared.

use std::io::{self, BufRead, Write};
use std::thread;

use anyhow::{Context, Result};
use tokio::sync::mpsc;

use crate::cli::display::Display;
use crate::cli::input::{parse_command, InputCommand};
use crate::engine::TimerEngine;

/// Lines of user input, in order. The channel closing means end of input.
pub type InputLines = mpsc::UnboundedReceiver<io::Result<String>>;

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed quit
    Quit,
    /// Input was closed
    EndOfInput,
    /// Ctrl-C was received
    Interrupted,
}

/// Forwards stdin lines from a dedicated thread.
///
/// A blocking read on a plain thread does not hold up runtime shutdown,
/// so quitting never waits for another line to be typed.
pub fn spawn_stdin_reader() -> InputLines {
    let (tx, rx) = mpsc::unbounded_channel();

    thread::spawn(move || forward_lines(io::stdin().lock(), &tx));

    rx
}

/// Sends every line of `reader` until it ends, fails, or the receiver is gone.
///
/// Bytes that are not UTF-8 are replaced rather than rejected, so a stray
/// byte becomes an unknown command instead of a read error.
fn forward_lines<R: BufRead>(mut reader: R, tx: &mpsc::UnboundedSender<io::Result<String>>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                if tx.send(Ok(decode_line(&buf))).is_err() {
                    break;
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                let _ = tx.send(Err(e));
                break;
            }
        }
    }
}

/// Strips the line ending and decodes lossily.
fn decode_line(bytes: &[u8]) -> String {
    let line = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}

/// Runs the clock until the user quits, input ends, or Ctrl-C.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub async fn run_session<W: Write>(
    engine: &mut TimerEngine,
    mut input: InputLines,
    display: &mut Display<W>,
) -> Result<SessionEnd> {
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    display
        .show_frame(engine.state())
        .context("Failed to write clock")?;

    let end = loop {
        tokio::select! {
            line = input.recv() => {
                let Some(line) = line else {
                    break SessionEnd::EndOfInput;
                };
                let line = line.context("Failed to read input")?;

                match parse_command(&line) {
                    Ok(InputCommand::Press(intent)) => {
                        engine.dispatch(intent);
                        display.show_frame(engine.state()).context("Failed to write clock")?;
                    }
                    Ok(InputCommand::Help) => {
                        display.show_help().context("Failed to write help")?;
                    }
                    Ok(InputCommand::Quit) => break SessionEnd::Quit,
                    Err(e) => {
                        tracing::debug!("Rejected input: {}", e);
                        display.show_error(&e.to_string()).context("Failed to write error")?;
                    }
                }
            }
            () = engine.next_tick() => {
                let outcome = engine.tick();
                display
                    .show_tick(engine.state(), outcome)
                    .context("Failed to write countdown")?;
            }
            _ = &mut shutdown => break SessionEnd::Interrupted,
        }
    };

    tracing::debug!("Session ended: {:?}", end);
    Ok(end)
}
