//! Command implementations for all titlecheck commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{build, check, duplicates, info};
use titlecheck_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Check(args) => check::execute(ctx, args),
            Commands::Build(args) => build::execute(ctx, args),
            Commands::Duplicates(args) => duplicates::execute(ctx, args),
            Commands::Info => info::execute(ctx),
        }
    }
}
