//! Pure Power Play rules: four-in-a-row detection on a rectangular grid.
//!
//! # Example
//!
//! ```
//! use power_play_rules::{Grid, Player, UnknownCellPolicy, WinResult, check_win};
//!
//! let grid = Grid::from_codes(
//!     &[[1u8, 0, 1, 1, 1, 1], [0, 0, 0, 0, 0, 0]],
//!     UnknownCellPolicy::Reject,
//! )?;
//! assert_eq!(check_win(&grid), WinResult::Won(Player::Gray));
//! # Ok::<(), power_play_rules::GridError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod grid;
pub mod rules;
mod types;
#[cfg(kani)]
mod verification;

pub use grid::{Grid, GridError};
pub use rules::{
    Line, LineFamily, LineId, WINNING_RUN, Win, check_win, find_win, lines, scan_line,
};
pub use types::{Cell, InvalidCellCode, Player, UnknownCellPolicy, WinResult};
