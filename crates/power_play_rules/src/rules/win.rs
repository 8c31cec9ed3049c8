//! Win detection logic for Power Play.

use super::super::{Grid, Player, WinResult};
use super::line::scan_line;
use super::lines::{LineId, lines};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// A winning line and the player who owns it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_new::new,
)]
pub struct Win {
    /// Player with four in a row.
    player: Player,
    /// First line, in scan order, holding the run.
    line: LineId,
}

/// Finds the first winning line on the grid.
///
/// Lines are scanned rows first, then columns, then the four diagonal sets,
/// and the search stops at the first hit. When several lines win at once the
/// reported one is therefore fixed by that order.
#[instrument(skip(grid), fields(rows = grid.rows(), cols = grid.cols()))]
pub fn find_win(grid: &Grid) -> Option<Win> {
    lines(grid).find_map(|line| {
        let result = scan_line(line.cells());
        trace!(line = %line.id(), len = line.cells().len(), ?result, "Scanned line");
        result.winner().map(|player| {
            debug!(%player, line = %line.id(), "Winning line found");
            Win::new(player, *line.id())
        })
    })
}

/// Checks if there is a winner on the grid.
///
/// Returns [`WinResult::Won`] for the first player found with four in a row
/// and [`WinResult::NotWon`] otherwise.
#[instrument(skip(grid), fields(rows = grid.rows(), cols = grid.cols()))]
pub fn check_win(grid: &Grid) -> WinResult {
    find_win(grid).map(|win| win.player).into()
}
