//! Command definitions for the session clock CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::sound::SoundSource;

// ============================================================================
// CLI Structure
// ============================================================================

/// 25 + 5 Clock - a session/break countdown for the terminal
#[derive(Parser, Debug)]
#[command(
    name = "session-clock",
    version,
    about = "25 + 5 session/break countdown clock",
    long_about = "An interactive session/break countdown clock.\n\
                  Type commands on stdin (start, reset, b+, b-, s+, s-, quit) to press the clock's buttons.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute (defaults to running the clock)
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub run: RunArgs,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Returns the default log filter for the verbosity flag.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Run Arguments
// ============================================================================

/// Arguments for the interactive clock
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Disable the phase alert sound
    #[arg(long, conflicts_with = "sound")]
    pub no_sound: bool,

    /// Audio file to play on phase rollover instead of the built-in beep
    #[arg(long, value_name = "PATH")]
    pub sound: Option<PathBuf>,

    /// Print one JSON object per update instead of text frames
    #[arg(long)]
    pub json: bool,
}

impl RunArgs {
    /// Returns the alert source selected by the flags.
    pub fn sound_source(&self) -> SoundSource {
        SoundSource::from(self.sound.clone())
    }
}

// ============================================================================
// Tests
// ============================================================================
