//! Formal verification of the line scanner using the Kani model checker.
//!
//! These proof harnesses verify scanner properties for ALL lines up to
//! the given length.

#[cfg(kani)]
mod proofs {
    use crate::{Cell, UnknownCellPolicy, WinResult, scan_line};

    fn any_cell() -> Cell {
        let code: u8 = kani::any();
        kani::assume(code <= 3);
        Cell::try_from(code).unwrap_or(Cell::Neutral)
    }

    /// Verify that lines shorter than a winning run never win.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_short_lines_never_win() {
        let line = [any_cell(), any_cell(), any_cell()];
        let len: usize = kani::any();
        kani::assume(len <= 3);

        assert_eq!(scan_line(&line[..len]), WinResult::NotWon);
    }

    /// Verify that a reported winner owns at least four cells of the line.
    #[kani::proof]
    #[kani::unwind(7)]
    fn verify_winner_owns_cells() {
        let line = [
            any_cell(),
            any_cell(),
            any_cell(),
            any_cell(),
            any_cell(),
            any_cell(),
        ];

        if let WinResult::Won(player) = scan_line(&line) {
            let owned = line
                .iter()
                .filter(|&&cell| cell == Cell::Occupied(player))
                .count();
            assert!(owned >= 4, "Winner owns fewer than four cells");
        }
    }

    /// Verify that the neutral policy never produces an occupied cell from an unknown code.
    #[kani::proof]
    fn verify_unknown_codes_are_neutral() {
        let code: u8 = kani::any();
        kani::assume(code > 2);

        assert_eq!(
            Cell::from_code(code, UnknownCellPolicy::Neutral),
            Ok(Cell::Neutral)
        );
    }
}
