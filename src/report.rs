//! Win reports for the command line.

use crate::config::OutputFormat;
use derive_getters::Getters;
use power_play_rules::{Grid, LineId, WinResult, find_win};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of checking one grid, with the winning line if any.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct WinReport {
    /// Number of rows in the checked grid.
    rows: usize,
    /// Number of columns in the checked grid.
    cols: usize,
    /// Win result.
    result: WinResult,
    /// First winning line in scan order.
    line: Option<LineId>,
}

impl WinReport {
    /// Checks a grid and records the outcome.
    #[instrument(skip(grid), fields(rows = grid.rows(), cols = grid.cols()))]
    pub fn check(grid: &Grid) -> Self {
        let win = find_win(grid);
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            result: win.map(|w| *w.player()).into(),
            line: win.map(|w| *w.line()),
        }
    }

    /// Renders the report in the given format.
    #[instrument(skip(self))]
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => serde_json::to_string_pretty(self),
        }
    }
}

impl std::fmt::Display for WinReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "{} on {}", self.result, line)?,
            None => write!(f, "{}", self.result)?,
        }
        write!(f, " ({}x{} grid)", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use power_play_rules::{LineFamily, Player};

    #[test]
    fn test_text_not_won() {
        let report = WinReport::check(&Grid::neutral(7, 6).unwrap());
        assert_eq!(report.to_string(), "no winner (7x6 grid)");
        assert_eq!(*report.line(), None);
    }

    #[test]
    fn test_text_won() {
        let report = WinReport::new(
            7,
            6,
            WinResult::Won(Player::Gray),
            Some(LineId::new(LineFamily::DescendingUpper, 0)),
        );
        assert_eq!(
            report.render(OutputFormat::Text).unwrap(),
            "gray wins on descending_upper #0 (7x6 grid)"
        );
    }

    #[test]
    fn test_json_won() {
        let report = WinReport::new(
            7,
            6,
            WinResult::Won(Player::White),
            Some(LineId::new(LineFamily::Columns, 2)),
        );
        let value: serde_json::Value =
            serde_json::from_str(&report.render(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(value["result"]["status"], "won");
        assert_eq!(value["result"]["winner"], "white");
        assert_eq!(value["line"]["family"], "columns");
        assert_eq!(value["line"]["index"], 2);
    }
}
