//! 25 + 5 Clock - a session/break countdown for the terminal
//!
//! Alternates a work session (25 minutes by default) with a break
//! (5 minutes by default) and sounds an alert on every switch.

use anyhow::Result;
use clap::{CommandFactory, Parser};

use session_clock::cli::{
    run_session, spawn_stdin_reader, Cli, Commands, Display, OutputFormat, RunArgs,
};
use session_clock::{create_alert_sink, TimerEngine};

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.log_level());

    // Execute command
    if let Err(e) = execute(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
///
/// Logs go to stderr so stdout carries only clock output.
fn init_tracing(default_level: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
            Ok(())
        }
        None => run_clock(&cli.run).await,
    }
}

/// Runs the interactive clock on stdin/stdout.
async fn run_clock(args: &RunArgs) -> Result<()> {
    let alert = create_alert_sink(args.sound_source(), args.no_sound);
    let mut engine = TimerEngine::new(alert);
    let mut display = Display::stdout(OutputFormat::from_json_flag(args.json));

    let end = run_session(&mut engine, spawn_stdin_reader(), &mut display).await?;

    tracing::info!("Clock closed ({:?})", end);
    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
