//! Command dispatch logic for titlecheck

use std::env;
use std::time::Instant;

use crate::cli::Cli;
use titlecheck_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = env::current_dir()?;

    debug!(elapsed = ?start.elapsed(), cwd = %cwd.display(), "resolve_cwd");

    let ctx = CommandContext::new(cli, &cwd, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
