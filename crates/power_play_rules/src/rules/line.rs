//! Four-in-a-row detection on a single line.

use super::super::{Cell, Player, WinResult};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Number of contiguous same-colored cells needed to win.
pub const WINNING_RUN: usize = 4;

/// Checks whether a line holds four contiguous cells of one player.
///
/// Lines shorter than [`WINNING_RUN`] return [`WinResult::NotWon`] without
/// being scanned. Players are tried in declaration order, so gray is
/// reported if both could register.
#[instrument(level = "trace", skip(line), fields(len = line.len()))]
pub fn scan_line(line: &[Cell]) -> WinResult {
    if line.len() < WINNING_RUN {
        return WinResult::NotWon;
    }

    Player::iter()
        .find(|&player| has_run(line, player))
        .into()
}

/// Returns true if some window of [`WINNING_RUN`] cells is all `player`.
///
/// The last window starts at `line.len() - WINNING_RUN`.
fn has_run(line: &[Cell], player: Player) -> bool {
    let target = Cell::Occupied(player);
    line.windows(WINNING_RUN)
        .any(|window| window.iter().all(|&cell| cell == target))
}
