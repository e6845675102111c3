//! CLI argument parsing using clap derive API
//!
//! This module defines the command-line interface structure using clap's
//! derive macros. It is purely declarative with no side effects or I/O.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// LogSynth -- convert web-server logs into MITRE ATT&CK events.
///
/// Use `logsynth <COMMAND> --help` for subcommand details.
#[derive(Parser, Debug)]
#[command(name = "logsynth", version, about, long_about = None)]
pub struct Cli {
    /// Path to the logsynth.toml configuration file.
    #[arg(short, long, default_value = "logsynth.toml")]
    pub config: PathBuf,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output rendering format.
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Supported output rendering formats.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the pipeline over one input file.
    Run(RunArgs),

    /// Inspect the built-in detection rules.
    Rules(RulesArgs),
}

// ---- run ----

/// Run one end-to-end pipeline pass.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Input file (Elasticsearch _search export or NDJSON).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output NDJSON file (truncated if it exists).
    #[arg(short, long)]
    pub output: PathBuf,
}

// ---- rules ----

/// Inspect the built-in detection rules.
#[derive(Args, Debug)]
pub struct RulesArgs {
    #[command(subcommand)]
    pub action: RulesAction,
}

#[derive(Subcommand, Debug)]
pub enum RulesAction {
    /// List the built-in rule table in evaluation order.
    List,
}
