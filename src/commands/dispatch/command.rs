//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use titlecheck_core::artifacts;
use titlecheck_core::config::TitlecheckConfig;
use titlecheck_core::engine::CheckContext;
use titlecheck_core::error::Result;
use titlecheck_core::index::TitleIndex;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub cwd: &'a Path,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, cwd: &'a Path, start: Instant) -> Self {
        Self { cli, cwd, start }
    }

    /// Resolve a path given on the command line against the working directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    /// Load the explicit `--config` file, or discover one
    pub fn load_config(&self) -> Result<TitlecheckConfig> {
        let config = match &self.cli.config {
            Some(path) => TitlecheckConfig::load(&self.resolve(path))?,
            None => TitlecheckConfig::discover(self.cwd)?,
        };
        debug!(elapsed = ?self.start.elapsed(), "load_config");
        Ok(config)
    }

    /// Load corpus, vectorizer and classifier
    pub fn load_check_context(&self, config: &TitlecheckConfig) -> Result<CheckContext> {
        let context = artifacts::load_context(&config.artifacts, &config.vectorizer)?;
        debug!(elapsed = ?self.start.elapsed(), ?context, "load_artifacts");
        Ok(context)
    }

    /// Load and vectorize the corpus only
    pub fn load_index(&self, config: &TitlecheckConfig) -> Result<TitleIndex> {
        let index = artifacts::load_index(&config.artifacts, &config.vectorizer)?;
        debug!(elapsed = ?self.start.elapsed(), titles = index.len(), "load_index");
        Ok(index)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("titlecheck {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Checks thesis titles against a corpus of recorded titles.");
        println!();
        println!("Run `titlecheck --help` for usage information.");
        Ok(())
    }
}
