//! The constraint checker: row, column and box uniqueness.

use crate::csp::grid::{Grid, BOX_SIZE, GRID_SIZE};
use smallvec::SmallVec;

/// The legal values of one cell, ascending. Never longer than nine entries,
/// so the list lives inline.
pub type Candidates = SmallVec<[u8; 9]>;

/// Returns `true` if placing `value` at `(row, col)` violates none of the
/// row, column or box uniqueness constraints.
///
/// All three scans cover the full unit including the target position itself;
/// the caller guarantees the target cell is still empty, so its own slot can
/// never collide. This is a purely local one-step consistency check: it does
/// not imply the board remains solvable after the placement.
#[must_use]
pub fn is_valid(grid: &Grid, row: usize, col: usize, value: u8) -> bool {
    for x in 0..GRID_SIZE {
        if grid[(row, x)] == value {
            return false;
        }
    }
    for x in 0..GRID_SIZE {
        if grid[(x, col)] == value {
            return false;
        }
    }

    let start_row = row / BOX_SIZE * BOX_SIZE;
    let start_col = col / BOX_SIZE * BOX_SIZE;
    for r in start_row..start_row + BOX_SIZE {
        for c in start_col..start_col + BOX_SIZE {
            if grid[(r, c)] == value {
                return false;
            }
        }
    }
    true
}

/// Enumerates the values in `1..=9` that [`is_valid`] accepts for
/// `(row, col)`, in ascending order.
#[must_use]
pub fn legal_values(grid: &Grid, row: usize, col: usize) -> Candidates {
    (1..=9u8)
        .filter(|&value| is_valid(grid, row, col, value))
        .collect()
}
