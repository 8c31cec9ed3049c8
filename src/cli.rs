//! Command-line interface for power_play.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Power Play - four-in-a-row win detection
#[derive(Parser, Debug)]
#[command(name = "power_play")]
#[command(about = "Detects four-in-a-row wins on Power Play grids", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a checker config file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a grid file (.toml or .json) for a winner
    Check {
        /// Grid file to check
        path: PathBuf,

        /// Report format (overrides the config file)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Scan a single line of cell codes, e.g. "1,0,1,1,1,1"
    Line {
        /// Cell codes separated by commas or spaces
        cells: String,

        /// Report format (overrides the config file)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List every line of a grid in scan order with its verdict
    Lines {
        /// Grid file to read
        path: PathBuf,
    },
}
