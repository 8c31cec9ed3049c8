//! Win rules for Power Play.
//!
//! Pure functions over borrowed grids and lines. Line extraction, line
//! scanning and the grid-level search are kept apart so each can be tested
//! and verified on its own.

pub mod line;
pub mod lines;
pub mod win;

pub use line::{WINNING_RUN, scan_line};
pub use lines::{Line, LineFamily, LineId, lines};
pub use win::{Win, check_win, find_win};
