//! Line extraction: rows, columns and both diagonal orientations.

use super::super::{Cell, Grid};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A family of lines, in scan order.
///
/// Diagonals are split into an upper set, starting on the top row, and a
/// lower set, starting on a side column below row 0. The two sets never
/// share a diagonal.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LineFamily {
    /// Rows, left to right.
    Rows,
    /// Columns, top to bottom.
    Columns,
    /// ↘ diagonals starting at `(0, i)`.
    DescendingUpper,
    /// ↘ diagonals starting at `(1 + i, 0)`.
    DescendingLower,
    /// ↗ diagonals starting at `(0, cols - 1 - i)`, read top to bottom.
    AscendingUpper,
    /// ↗ diagonals starting at `(1 + i, cols - 1)`, read top to bottom.
    AscendingLower,
}

/// Vertical movement per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowStep {
    Stay,
    Down,
}

/// Horizontal movement per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColStep {
    Stay,
    Right,
    Left,
}

/// Start cell and direction of one line.
#[derive(Debug, Clone, Copy)]
struct Walk {
    row: usize,
    col: Option<usize>,
    row_step: RowStep,
    col_step: ColStep,
}

impl LineFamily {
    /// Number of lines this family yields for a grid.
    ///
    /// Every diagonal set has `cols` offsets. Lower-set offsets whose start
    /// row lies past the last row yield empty lines.
    #[instrument(skip(grid), fields(rows = grid.rows(), cols = grid.cols()))]
    pub fn line_count(self, grid: &Grid) -> usize {
        match self {
            LineFamily::Rows => grid.rows(),
            LineFamily::Columns
            | LineFamily::DescendingUpper
            | LineFamily::DescendingLower
            | LineFamily::AscendingUpper
            | LineFamily::AscendingLower => grid.cols(),
        }
    }

    fn walk(self, grid: &Grid, index: usize) -> Walk {
        let last_col = grid.cols().checked_sub(1);
        let (row, col, row_step, col_step) = match self {
            LineFamily::Rows => (index, Some(0), RowStep::Stay, ColStep::Right),
            LineFamily::Columns => (0, Some(index), RowStep::Down, ColStep::Stay),
            LineFamily::DescendingUpper => (0, Some(index), RowStep::Down, ColStep::Right),
            LineFamily::DescendingLower => (1 + index, Some(0), RowStep::Down, ColStep::Right),
            LineFamily::AscendingUpper => (
                0,
                last_col.and_then(|c| c.checked_sub(index)),
                RowStep::Down,
                ColStep::Left,
            ),
            LineFamily::AscendingLower => (1 + index, last_col, RowStep::Down, ColStep::Left),
        };
        Walk {
            row,
            col,
            row_step,
            col_step,
        }
    }

    /// Collects the cells of the line at `index`.
    ///
    /// The walk stops as soon as it leaves the grid on either axis.
    pub fn extract(self, grid: &Grid, index: usize) -> Vec<Cell> {
        let walk = self.walk(grid, index);
        let mut row = walk.row;
        let Some(mut col) = walk.col else {
            return Vec::new();
        };

        let mut cells = Vec::new();
        while let Some(cell) = grid.get(row, col) {
            cells.push(cell);
            row = match walk.row_step {
                RowStep::Stay => row,
                RowStep::Down => row + 1,
            };
            col = match walk.col_step {
                ColStep::Stay => col,
                ColStep::Right => col + 1,
                ColStep::Left => match col.checked_sub(1) {
                    Some(next) => next,
                    None => break,
                },
            };
        }
        cells
    }
}

/// Identifies one line: its family and offset within the family.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_new::new,
)]
pub struct LineId {
    /// Family of the line.
    family: LineFamily,
    /// Offset `i` within the family.
    index: usize,
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} #{}", self.family, self.index)
    }
}

/// A line extracted from a grid.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Line {
    /// Where the line came from.
    id: LineId,
    /// Cells in reading order.
    cells: Vec<Cell>,
}

impl Line {
    /// Extracts the line named by `id`.
    pub fn extract(grid: &Grid, id: LineId) -> Self {
        Self {
            id,
            cells: id.family.extract(grid, id.index),
        }
    }
}

/// Yields every line of the grid in scan order.
///
/// Lines are built lazily, one per call to `next`, so a consumer that stops
/// early never builds the rest. Short diagonals are yielded like any other
/// line.
pub fn lines(grid: &Grid) -> impl Iterator<Item = Line> + '_ {
    LineFamily::iter().flat_map(move |family| {
        (0..family.line_count(grid)).map(move |index| Line::extract(grid, LineId::new(family, index)))
    })
}
