//! Rectangular Power Play grid.

use crate::types::{Cell, UnknownCellPolicy};
use tracing::instrument;

/// A rectangular grid of cells indexed `[row][col]`, row 0 at the top.
///
/// The only way to obtain a `Grid` is through a constructor that checks
/// rectangularity, so every grid handed to the detector is well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid from its rows, rejecting jagged input.
    #[instrument(skip(rows), fields(row_count = rows.len()))]
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, line) in rows.iter().enumerate() {
            if line.len() != cols {
                return Err(GridError::Jagged {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            cells.extend_from_slice(line);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Creates an all-neutral grid.
    ///
    /// Fails with [`GridError::TooLarge`] if `rows * cols` overflows `usize`.
    #[instrument]
    pub fn neutral(rows: usize, cols: usize) -> Result<Self, GridError> {
        let len = rows
            .checked_mul(cols)
            .ok_or(GridError::TooLarge { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Neutral; len],
        })
    }

    /// Builds a grid from numeric cell codes.
    #[instrument(skip(codes), fields(row_count = codes.len()))]
    pub fn from_codes<R>(codes: &[R], policy: UnknownCellPolicy) -> Result<Self, GridError>
    where
        R: AsRef<[u8]>,
    {
        let rows = codes
            .iter()
            .enumerate()
            .map(|(row, line)| {
                line.as_ref()
                    .iter()
                    .enumerate()
                    .map(|(col, &code)| {
                        Cell::from_code(code, policy)
                            .map_err(|_| GridError::UnknownCell { row, col, code })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(rows)
    }

    /// Returns this grid with one cell replaced.
    #[instrument(skip(self))]
    pub fn with_cell(mut self, row: usize, col: usize, cell: Cell) -> Result<Self, GridError> {
        let idx = self
            .index(row, col)
            .ok_or(GridError::OutOfBounds { row, col })?;
        self.cells[idx] = cell;
        Ok(self)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Gets the cell at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Returns one row as a slice.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Iterates over the rows from top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.rows).filter_map(move |row| self.row(row))
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.code())?;
            }
        }
        Ok(())
    }
}

/// Error raised while building a grid.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// A row's length differs from the first row's.
    #[display("Row {} has {} cells, expected {}", row, found, expected)]
    Jagged {
        /// Offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A cell code outside 0, 1, 2 under the reject policy.
    #[display("Unknown cell code {} at ({}, {})", code, row, col)]
    UnknownCell {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
        /// The code read.
        code: u8,
    },

    /// The cell count does not fit in `usize`.
    #[display("Grid of {} x {} cells is too large", rows, cols)]
    TooLarge {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },

    /// Coordinates outside the grid.
    #[display("Position ({}, {}) is outside the grid", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    const GRAY: Cell = Cell::Occupied(Player::Gray);

    #[test]
    fn test_new_rejects_jagged_rows() {
        let rows = vec![vec![Cell::Neutral; 4], vec![Cell::Neutral; 3]];
        assert_eq!(
            Grid::new(rows),
            Err(GridError::Jagged {
                row: 1,
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::new(Vec::new()).unwrap();
        assert_eq!(grid.rows(), 0);
        assert_eq!(grid.cols(), 0);
        assert_eq!(grid.get(0, 0), None);
    }

    #[test]
    fn test_get_and_row() {
        let grid = Grid::neutral(3, 2).unwrap().with_cell(1, 1, GRAY).unwrap();
        assert_eq!(grid.get(1, 1), Some(GRAY));
        assert_eq!(grid.get(1, 2), None);
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.row(1), Some(&[Cell::Neutral, GRAY][..]));
        assert_eq!(grid.row(3), None);
        assert_eq!(grid.iter_rows().count(), 3);
    }

    #[test]
    fn test_neutral_rejects_overflowing_size() {
        assert_eq!(
            Grid::neutral(usize::MAX, 2),
            Err(GridError::TooLarge {
                rows: usize::MAX,
                cols: 2
            })
        );
        let grid = Grid::neutral(usize::MAX, 0).unwrap();
        assert_eq!(grid.rows(), usize::MAX);
        assert_eq!(grid.get(0, 0), None);
    }

    #[test]
    fn test_with_cell_out_of_bounds() {
        let err = Grid::neutral(2, 2).unwrap().with_cell(2, 0, GRAY).unwrap_err();
        assert_eq!(err, GridError::OutOfBounds { row: 2, col: 0 });
    }

    #[test]
    fn test_from_codes() {
        let grid = Grid::from_codes(&[[0u8, 1], [2, 0]], UnknownCellPolicy::Reject).unwrap();
        assert_eq!(grid.get(0, 1), Some(GRAY));
        assert_eq!(grid.get(1, 0), Some(Cell::Occupied(Player::White)));
    }

    #[test]
    fn test_from_codes_unknown_cell() {
        let codes = vec![vec![0u8, 0], vec![0, 9]];
        assert_eq!(
            Grid::from_codes(&codes, UnknownCellPolicy::Reject),
            Err(GridError::UnknownCell {
                row: 1,
                col: 1,
                code: 9
            })
        );
        let grid = Grid::from_codes(&codes, UnknownCellPolicy::Neutral).unwrap();
        assert_eq!(grid.get(1, 1), Some(Cell::Neutral));
    }

    #[test]
    fn test_display_renders_codes() {
        let grid = Grid::from_codes(&[[1u8, 0, 2], [0, 0, 0]], UnknownCellPolicy::Reject).unwrap();
        assert_eq!(grid.to_string(), "1 0 2\n0 0 0");
    }
}
