//! CLI argument definitions using clap
//!
//! Commands:
//! - gamestore init --config <path>
//! - gamestore start --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gamestore - a small game-store REST service over SQLite
#[derive(Parser, Debug)]
#[command(name = "gamestore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the configuration file, database file, and schema
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./gamestore.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./gamestore.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
