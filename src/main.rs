//! Power Play - command-line win checker
//!
//! Reads grids from TOML or JSON files and reports the first
//! four-in-a-row found.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use power_play::{
    CheckerConfig, Cli, Command, OutputFormat, WinReport, lines, load_grid, parse_line, scan_line,
};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CheckerConfig::load(cli.config.as_deref())?;
    init_tracing(&config);

    match cli.command {
        Command::Check { path, format } => run_check(&config, &path, format),
        Command::Line { cells, format } => run_line(&config, &cells, format),
        Command::Lines { path } => run_lines(&config, &path),
    }
}

/// Installs the stderr subscriber; `RUST_LOG` wins over the config filter.
fn init_tracing(config: &CheckerConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Check a grid file and print the report
#[instrument(skip(config), fields(path = %path.display()))]
fn run_check(config: &CheckerConfig, path: &Path, format: Option<OutputFormat>) -> Result<()> {
    let grid = load_grid(path, *config.unknown_cells())?;
    let report = WinReport::check(&grid);
    info!(result = ?report.result(), "Grid checked");

    println!("{}", report.render(format.unwrap_or(*config.format()))?);
    Ok(())
}

/// Scan one line given on the command line
#[instrument(skip(config))]
fn run_line(config: &CheckerConfig, cells: &str, format: Option<OutputFormat>) -> Result<()> {
    let line = parse_line(cells, *config.unknown_cells())?;
    let result = scan_line(&line);
    info!(len = line.len(), ?result, "Line scanned");

    match format.unwrap_or(*config.format()) {
        OutputFormat::Text => println!("{} (line of {})", result, line.len()),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "len": line.len(),
                "result": result,
            }))?
        ),
    }
    Ok(())
}

/// Print every line of a grid in scan order
#[instrument(skip(config), fields(path = %path.display()))]
fn run_lines(config: &CheckerConfig, path: &Path) -> Result<()> {
    let grid = load_grid(path, *config.unknown_cells())?;

    for line in lines(&grid) {
        let codes = line
            .cells()
            .iter()
            .map(|cell| cell.code().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("{}: [{}] -> {}", line.id(), codes, scan_line(line.cells()));
    }
    Ok(())
}
