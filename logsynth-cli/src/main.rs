//! LogSynth CLI entry point
//!
//! Parses arguments, loads configuration, initialises tracing, and
//! dispatches to the subcommand handlers. All user-facing output goes
//! to stdout via [`output::Reporter`]; diagnostics go to stderr.

mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use logsynth_core::config::LogSynthConfig;

use crate::cli::{Cli, Commands};
use crate::error::CliError;
use crate::output::Reporter;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    // Missing config file at the default path falls back to defaults;
    // an unreadable or invalid file is an error.
    let config = LogSynthConfig::load_or_default(&cli.config)?;

    // CLI flag wins over the config file.
    let log_level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.general.log_level);
    init_tracing(log_level);

    tracing::debug!(config = %cli.config.display(), log_level, "logsynth starting");

    let reporter = Reporter::new(cli.format);

    match cli.command {
        Commands::Run(args) => commands::run::execute(args, &config, &reporter),
        Commands::Rules(args) => commands::rules::execute(args, &reporter),
    }
}

/// Initialise the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the resolved level
/// from CLI/config applies. Diagnostics are written to stderr so that
/// stdout stays clean for command output.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
