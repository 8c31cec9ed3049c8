//! Tests for grid-level win detection.

use power_play::{
    Cell, Grid, LineFamily, LineId, Player, UnknownCellPolicy, WinResult, check_win, find_win,
    lines,
};

fn grid(codes: &[&[u8]]) -> Grid {
    Grid::from_codes(codes, UnknownCellPolicy::Reject).expect("Invalid grid")
}

fn sample_grid() -> Grid {
    grid(&[
        &[0, 0, 0, 1, 0, 0],
        &[0, 0, 1, 0, 0, 0],
        &[0, 1, 0, 0, 0, 0],
        &[1, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0],
    ])
}

#[test]
fn test_column_win() {
    let grid = grid(&[
        &[1, 0, 0, 0, 0, 0],
        &[1, 0, 0, 0, 0, 0],
        &[1, 0, 0, 0, 0, 0],
        &[1, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0],
    ]);
    assert_eq!(check_win(&grid), WinResult::Won(Player::Gray));
    assert_eq!(
        find_win(&grid).map(|win| *win.line().family()),
        Some(LineFamily::Columns)
    );
}

#[test]
fn test_all_neutral() {
    for (rows, cols) in [(7, 6), (1, 1), (4, 9), (10, 3)] {
        assert_eq!(check_win(&Grid::neutral(rows, cols).expect("Valid size")), WinResult::NotWon);
    }
}

#[test]
fn test_main_diagonal_white() {
    let grid = (0..4).fold(Grid::neutral(7, 6).expect("Valid size"), |grid, i| {
        grid.with_cell(i, i, Cell::Occupied(Player::White))
            .expect("In bounds")
    });
    let win = find_win(&grid).expect("Expected a win");
    assert_eq!(*win.player(), Player::White);
    assert_eq!(*win.line(), LineId::new(LineFamily::DescendingUpper, 0));
}

#[test]
fn test_sample_grid_anti_diagonal() {
    let win = find_win(&sample_grid()).expect("Expected a win");
    assert_eq!(*win.player(), Player::Gray);
    assert_eq!(*win.line(), LineId::new(LineFamily::AscendingUpper, 2));
}

#[test]
fn test_threes_do_not_win() {
    let grid = grid(&[
        &[1, 1, 1, 0, 0, 0],
        &[0, 0, 0, 0, 2, 0],
        &[2, 0, 0, 0, 2, 0],
        &[2, 0, 1, 0, 2, 0],
        &[2, 0, 0, 1, 0, 0],
        &[0, 0, 0, 0, 1, 0],
        &[0, 0, 0, 0, 0, 0],
    ]);
    assert_eq!(check_win(&grid), WinResult::NotWon);
}

#[test]
fn test_first_family_wins_the_tie() {
    // Gray row 6 and white column 0 both win; rows are scanned first.
    let grid = grid(&[
        &[2, 0, 0, 0, 0, 0],
        &[2, 0, 0, 0, 0, 0],
        &[2, 0, 0, 0, 0, 0],
        &[2, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0],
        &[0, 0, 1, 1, 1, 1],
    ]);
    assert_eq!(
        find_win(&grid).map(|win| *win.line()),
        Some(LineId::new(LineFamily::Rows, 6))
    );
}

#[test]
fn test_row_reported_over_diagonal() {
    // White holds the upper descending diagonal from (0, 2), gray holds row 5.
    let grid = grid(&[
        &[0, 0, 2, 0, 0, 0],
        &[0, 0, 0, 2, 0, 0],
        &[0, 0, 0, 0, 2, 0],
        &[0, 0, 0, 0, 0, 2],
        &[0, 0, 0, 0, 0, 0],
        &[1, 1, 1, 1, 0, 0],
        &[0, 0, 0, 0, 0, 0],
    ]);
    let win = find_win(&grid).expect("Grid has a winner");
    assert_eq!(*win.line(), LineId::new(LineFamily::Rows, 5));
    assert_eq!(*win.player(), Player::Gray);
    assert_eq!(check_win(&grid), WinResult::Won(Player::Gray));
}

#[test]
fn test_scan_order_matches_enumeration() {
    let grid = sample_grid();
    let ids: Vec<LineId> = lines(&grid).map(|line| *line.id()).collect();
    assert_eq!(ids.len(), 7 + 6 + 6 + 6 + 6 + 6);
    assert_eq!(ids[0], LineId::new(LineFamily::Rows, 0));
    assert_eq!(ids[7], LineId::new(LineFamily::Columns, 0));
    assert_eq!(ids[13], LineId::new(LineFamily::DescendingUpper, 0));
    assert_eq!(ids[36], LineId::new(LineFamily::AscendingLower, 5));
}

#[test]
fn test_short_diagonals_are_still_enumerated() {
    let grid = Grid::neutral(7, 6).expect("Valid size");
    let shortest = lines(&grid)
        .filter(|line| *line.id().family() == LineFamily::DescendingUpper)
        .map(|line| line.cells().len())
        .min();
    assert_eq!(shortest, Some(1));
}

#[test]
fn test_jagged_grid_rejected() {
    let rows = vec![vec![Cell::Neutral; 6], vec![Cell::Neutral; 5]];
    assert!(Grid::new(rows).is_err());
}
