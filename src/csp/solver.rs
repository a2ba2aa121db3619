//! The backtracking search engine.
//!
//! One [`Solver`] is one solving session: it owns the board and the
//! assignment trail for a single puzzle instance and is discarded after
//! reporting. Each recursion frame is one decision point:
//!
//! 1. If no cell is empty the board is solved; unwind without mutating.
//! 2. Otherwise pick the most constrained cell (MRV, degree tie-break).
//! 3. Enumerate its legal values ascending. An empty list is a dead end.
//! 4. For each value: place it, record the step, recurse. Success
//!    propagates immediately, leaving the placement in the board; failure
//!    clears the cell back to empty and pops the record before the next
//!    value is tried.
//!
//! Domains are re-derived from the board on every frame instead of being
//! stored and pruned, so undo is a single cell write plus a trail pop.

use crate::csp::constraints::legal_values;
use crate::csp::grid::{Grid, EMPTY};
use crate::csp::trail::{Step, Trail};
use crate::csp::variable_selection::{degree, select_variable};

/// Counters accumulated over one solving session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Tentative placements made, including ones later undone.
    pub decisions: usize,
    /// Placements undone after the branch below them failed.
    pub backtracks: usize,
}

/// A single-puzzle solving session.
///
/// The grid is owned exclusively and mutated in place; recursive calls
/// borrow the session mutably, never clone it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solver {
    grid: Grid,
    trail: Trail,
    stats: SearchStats,
}

impl Solver {
    /// Creates a session for `grid`.
    ///
    /// The given cells are trusted: a grid whose givens already conflict is
    /// not detected here and makes the search result meaningless.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            trail: Trail::new(),
            stats: SearchStats::default(),
        }
    }

    /// Runs the search. Returns `true` if a solution was found, in which
    /// case the board holds it and the trail holds the assignment path.
    ///
    /// On `false` every tentative placement has been undone, so the board
    /// is back in its initial state and the trail is empty.
    pub fn solve(&mut self) -> bool {
        self.solve_frame()
    }

    /// The board in its current state: the solution after a successful
    /// [`solve`](Self::solve), the untouched input otherwise.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The ordered assignment trace.
    #[must_use]
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// The session's search counters.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Consumes the session, returning board and trail.
    #[must_use]
    pub fn into_parts(self) -> (Grid, Trail) {
        (self.grid, self.trail)
    }

    fn solve_frame(&mut self) -> bool {
        if self.grid.is_complete() {
            return true;
        }

        // With empty cells present the selector always finds one; `None`
        // here would mean an unsolvable sub-state and fails the frame.
        let Some((row, col)) = select_variable(&self.grid) else {
            return false;
        };

        let candidates = legal_values(&self.grid, row, col);
        if candidates.is_empty() {
            return false;
        }

        // Captured once per decision point; every step pushed below carries
        // the same figures, as they describe the cell, not the value.
        let domain_size = candidates.len();
        let cell_degree = degree(&self.grid, row, col);

        for &value in &candidates {
            self.grid[(row, col)] = value;
            self.stats.decisions += 1;
            self.trail.push(Step {
                row,
                col,
                domain_size,
                degree: cell_degree,
                value,
                candidates: candidates.clone(),
            });

            if self.solve_frame() {
                return true;
            }

            self.grid[(row, col)] = EMPTY;
            self.trail.pop();
            self.stats.backtracks += 1;
        }
        false
    }
}
