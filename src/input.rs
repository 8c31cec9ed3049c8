//! Reading grids and lines supplied by the game-state owner.

use derive_more::{Display, Error};
use power_play_rules::{Cell, Grid, GridError, UnknownCellPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Text format of a grid document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GridFormat {
    /// `cells = [[...], ...]`
    #[display("toml")]
    Toml,
    /// `{ "cells": [[...], ...] }`
    #[display("json")]
    Json,
}

impl GridFormat {
    /// Picks the format from a file extension.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn from_path(path: &Path) -> Result<Self, InputError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(GridFormat::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(GridFormat::Json),
            other => Err(InputError::new(format!(
                "Unsupported grid file extension: {:?} (expected .toml or .json)",
                other
            ))),
        }
    }
}

/// On-disk grid document: rows of numeric cell codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDocument {
    /// Rows from top to bottom.
    pub cells: Vec<Vec<u8>>,
}

impl GridDocument {
    /// Converts the document into a checked grid.
    #[instrument(skip(self), fields(rows = self.cells.len()))]
    pub fn into_grid(self, policy: UnknownCellPolicy) -> Result<Grid, InputError> {
        Ok(Grid::from_codes(&self.cells, policy)?)
    }
}

/// Parses a grid document from text.
#[instrument(skip(text))]
pub fn parse_grid(
    text: &str,
    format: GridFormat,
    policy: UnknownCellPolicy,
) -> Result<Grid, InputError> {
    let document: GridDocument = match format {
        GridFormat::Toml => toml::from_str(text)
            .map_err(|e| InputError::new(format!("Failed to parse TOML grid: {}", e)))?,
        GridFormat::Json => serde_json::from_str(text)
            .map_err(|e| InputError::new(format!("Failed to parse JSON grid: {}", e)))?,
    };
    let grid = document.into_grid(policy)?;
    debug!(rows = grid.rows(), cols = grid.cols(), "Grid parsed");
    Ok(grid)
}

/// Loads a grid document from a `.toml` or `.json` file.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_grid(path: impl AsRef<Path>, policy: UnknownCellPolicy) -> Result<Grid, InputError> {
    let path = path.as_ref();
    let format = GridFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)
        .map_err(|e| InputError::new(format!("Failed to read grid file: {}", e)))?;
    let grid = parse_grid(&text, format, policy)?;
    info!(%format, rows = grid.rows(), cols = grid.cols(), "Grid loaded");
    Ok(grid)
}

/// Parses a single line of cell codes separated by commas or whitespace.
#[instrument]
pub fn parse_line(text: &str, policy: UnknownCellPolicy) -> Result<Vec<Cell>, InputError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            let code: u8 = token
                .parse()
                .map_err(|_| InputError::new(format!("Invalid cell code: {:?}", token)))?;
            Cell::from_code(code, policy).map_err(|e| InputError::new(e.to_string()))
        })
        .collect()
}

/// Error raised while reading input.
#[derive(Debug, Clone, Display, Error)]
#[display("Input error: {} at {}:{}", message, file, line)]
pub struct InputError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InputError {
    /// Creates a new input error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<GridError> for InputError {
    #[track_caller]
    fn from(err: GridError) -> Self {
        Self::new(format!("Invalid grid: {}", err))
    }
}
