//! Variable ordering: minimum remaining values with degree tie-break.
//!
//! Selection deliberately re-tests every candidate value of every empty cell
//! on each call, costing O(81 x 9) plus the degree scans. That makes the
//! selector the dominant cost per search node; the payoff is that the most
//! constrained cell is branched on first, which keeps the tree small.

use crate::csp::constraints::is_valid;
use crate::csp::grid::{Grid, BOX_SIZE, EMPTY, GRID_SIZE};

/// Number of values in `1..=9` that can legally be placed at `(row, col)`.
#[must_use]
pub fn domain_size(grid: &Grid, row: usize, col: usize) -> usize {
    (1..=9u8)
        .filter(|&value| is_valid(grid, row, col, value))
        .count()
}

/// Number of empty cells sharing a row, column or box with `(row, col)`,
/// summed over three independent scans.
///
/// The scans are additive, not a union: an empty box cell that also shares
/// the row or column is counted twice. The redundancy is part of the
/// tie-breaking behaviour and is kept on purpose; on an all-empty board
/// every cell scores 8 + 8 + 8 = 24.
#[must_use]
pub fn degree(grid: &Grid, row: usize, col: usize) -> usize {
    let mut count = 0;
    for x in 0..GRID_SIZE {
        if grid[(row, x)] == EMPTY && x != col {
            count += 1;
        }
        if grid[(x, col)] == EMPTY && x != row {
            count += 1;
        }
    }

    let start_row = row / BOX_SIZE * BOX_SIZE;
    let start_col = col / BOX_SIZE * BOX_SIZE;
    for r in start_row..start_row + BOX_SIZE {
        for c in start_col..start_col + BOX_SIZE {
            if grid[(r, c)] == EMPTY && (r, c) != (row, col) {
                count += 1;
            }
        }
    }
    count
}

/// Picks the next cell to branch on, or `None` when the board is full.
///
/// Scans all empty cells in row-major order and keeps a running best:
/// strictly smaller domain wins; equal domains fall back to strictly larger
/// degree; any remaining tie keeps the earliest cell found. The first empty
/// cell always seeds the running best, so `None` means exactly "no empty
/// cell".
#[must_use]
pub fn select_variable(grid: &Grid) -> Option<(usize, usize)> {
    let mut best = None;
    let mut best_domain = usize::MAX;
    let mut best_degree = 0;

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            if grid[(row, col)] != EMPTY {
                continue;
            }
            let domain = domain_size(grid, row, col);
            let deg = degree(grid, row, col);
            if domain < best_domain || (domain == best_domain && deg > best_degree) {
                best_domain = domain;
                best_degree = deg;
                best = Some((row, col));
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csp::grid::N_CELLS;

    fn empty_grid() -> Grid {
        "0".repeat(N_CELLS).parse().unwrap()
    }

    #[test]
    fn degree_counts_additively_on_an_empty_grid() {
        let grid = empty_grid();
        // 8 row peers + 8 column peers + 8 box peers; the four box peers
        // sharing the row or column are counted twice.
        assert_eq!(degree(&grid, 0, 0), 24);
        assert_eq!(degree(&grid, 4, 4), 24);
        assert_eq!(degree(&grid, 8, 8), 24);
    }

    #[test]
    fn degree_ignores_filled_peers() {
        let mut grid = empty_grid();
        grid[(0, 5)] = 4; // row peer of (0, 0), outside its box
        grid[(3, 1)] = 9; // column peer of (0, 1) only
        grid[(1, 1)] = 2; // box peer of both, sharing a column with (0, 1)
        // For (0, 0): row loses (0, 5); column unaffected; box loses (1, 1).
        assert_eq!(degree(&grid, 0, 0), 24 - 2);
        // For (0, 1): row loses (0, 5); column loses (3, 1) and (1, 1);
        // box loses (1, 1) a second time via the additive box scan.
        assert_eq!(degree(&grid, 0, 1), 24 - 4);
    }

    #[test]
    fn domain_size_matches_placed_conflicts() {
        let mut grid = empty_grid();
        assert_eq!(domain_size(&grid, 4, 4), 9);
        grid[(4, 0)] = 1;
        grid[(0, 4)] = 2;
        grid[(3, 3)] = 3;
        assert_eq!(domain_size(&grid, 4, 4), 6);
    }

    #[test]
    fn full_grid_selects_nothing() {
        let line: String = (0..N_CELLS).map(|i| char::from(b'1' + (i % 9) as u8)).collect();
        let grid: Grid = line.parse().unwrap();
        assert_eq!(select_variable(&grid), None);
    }

    #[test]
    fn uniform_ties_keep_the_first_cell() {
        // Every empty cell ties on domain and degree, so the row-major scan
        // keeps the first one.
        assert_eq!(select_variable(&empty_grid()), Some((0, 0)));
    }

    #[test]
    fn smaller_domain_wins() {
        let mut grid = empty_grid();
        // Constrain (8, 8) down to a single legal value.
        for (i, &value) in [1, 2, 3, 4, 5, 6, 7, 8].iter().enumerate() {
            grid[(8, i)] = value;
        }
        assert_eq!(domain_size(&grid, 8, 8), 1);
        assert_eq!(select_variable(&grid), Some((8, 8)));
    }

    #[test]
    fn degree_breaks_domain_ties() {
        // Start from a solved board, clear all of row 4 plus the single cell
        // (0, 4). Every cleared cell then has exactly one legal value (its
        // column pins row-4 cells, its row pins (0, 4)), so all domains tie
        // at 1 and the degree tie-break decides.
        let mut grid = {
            let mut cells = [[EMPTY; GRID_SIZE]; GRID_SIZE];
            for row in 0..GRID_SIZE {
                for col in 0..GRID_SIZE {
                    cells[row][col] =
                        ((row * BOX_SIZE + row / BOX_SIZE + col) % GRID_SIZE) as u8 + 1;
                }
            }
            Grid::new(cells)
        };
        for col in 0..GRID_SIZE {
            grid[(4, col)] = EMPTY;
        }
        grid[(0, 4)] = EMPTY;

        assert_eq!(domain_size(&grid, 0, 4), 1);
        assert_eq!(domain_size(&grid, 4, 0), 1);
        // (0, 4) has a single empty peer. (4, 0) sees its eight row mates
        // plus two of them again through the box scan. (4, 4) adds the
        // empty column peer (0, 4) on top of that.
        assert_eq!(degree(&grid, 0, 4), 1);
        assert_eq!(degree(&grid, 4, 0), 10);
        assert_eq!(degree(&grid, 4, 4), 11);
        // (0, 4) is found first but loses the tie on degree.
        assert_eq!(select_variable(&grid), Some((4, 4)));
    }
}
