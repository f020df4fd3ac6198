//! CLI argument definitions using clap
//!
//! Commands:
//! - bookshelf init --config <path>
//! - bookshelf start --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bookshelf - A minimal file-backed book-tracking HTTP service
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default config (if absent) and seed an empty data file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./bookshelf.json")]
        config: PathBuf,
    },

    /// Start the bookshelf HTTP server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./bookshelf.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
