//! Power Play library - win detection around the pure rules crate
//!
//! Loads grids and configuration, runs the detector from
//! [`power_play_rules`] and renders the outcome.
//!
//! # Architecture
//!
//! - **Rules**: cells, grid, line scanner and win detector (`power_play_rules`)
//! - **Input**: grid documents (TOML/JSON) and single lines of codes
//! - **Config**: checker configuration (TOML)
//! - **Report**: text or JSON rendering of a win check
//!
//! # Example
//!
//! ```
//! use power_play::{GridFormat, UnknownCellPolicy, WinReport, parse_grid};
//!
//! # fn example() -> Result<(), power_play::InputError> {
//! let grid = parse_grid(
//!     "cells = [[2, 2, 2, 2, 0]]",
//!     GridFormat::Toml,
//!     UnknownCellPolicy::Reject,
//! )?;
//! let report = WinReport::check(&grid);
//! assert_eq!(report.to_string(), "white wins on rows #0 (1x5 grid)");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod input;
mod report;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{CheckerConfig, ConfigError, OutputFormat};

// Crate-level exports - Input
pub use input::{GridDocument, GridFormat, InputError, load_grid, parse_grid, parse_line};

// Crate-level exports - Reports
pub use report::WinReport;

// Crate-level exports - Rules
pub use power_play_rules::{
    Cell, Grid, GridError, Line, LineFamily, LineId, Player, UnknownCellPolicy, Win, WinResult,
    check_win, find_win, lines, scan_line,
};
