//! CLI module for bookshelf
//!
//! Provides command-line interface for:
//! - init: Write a default config and seed an empty data file
//! - start: Load config and enter the HTTP serving loop

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run_command, start};
pub use errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}
