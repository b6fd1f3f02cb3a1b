//! CLI argument parsing for titlecheck
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod format;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{BuildArgs, CheckArgs, DuplicatesArgs};
use parse::parse_output_format;
pub use titlecheck_core::format::OutputFormat;

/// Titlecheck - thesis title plagiarism checker
#[derive(Parser, Debug)]
#[command(name = "titlecheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (defaults to ./titlecheck.toml, then the global config)
    #[arg(long, global = true, env = "TITLECHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug logging and phase timings
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `info`, `titlecheck_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a title (or a file of titles) against the corpus
    Check(CheckArgs),

    /// Fit a vectorizer on the corpus and save it
    Build(BuildArgs),

    /// List near-duplicate titles inside the corpus
    Duplicates(DuplicatesArgs),

    /// Show the loaded corpus, vectorizer, classifier and policy
    Info,
}
