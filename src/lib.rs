#![warn(missing_docs)]
//! A Sudoku solver treating the puzzle as a constraint satisfaction problem.
//!
//! The search is plain recursive backtracking over the 81 cells, guided by
//! two classic variable-ordering heuristics: minimum remaining values (pick
//! the empty cell with the fewest legal digits) with the degree heuristic as
//! tie-break (prefer the cell constraining the most empty peers). Legal
//! values are re-derived from the board on every decision rather than stored,
//! so no domain state has to be maintained across backtracks.
//!
//! Every tentative assignment is recorded on a [`csp::trail::Trail`]; records
//! for abandoned branches are popped on backtrack, so after a successful
//! solve the trail holds exactly the path from the root to the solution, in
//! the order the cells were filled.
//!
//! ## Example
//!
//! ```
//! use sudoku_csp::csp::grid::Grid;
//! use sudoku_csp::csp::solver::Solver;
//!
//! let puzzle: Grid =
//!     "001002000005006030460005000000104000600800143000090508800049050100320000009000300"
//!         .parse()
//!         .expect("valid puzzle line");
//!
//! let mut solver = Solver::new(puzzle);
//! assert!(solver.solve());
//! assert!(solver.grid().is_solved());
//! ```

/// The `csp` module contains the solver core: the board, the constraint
/// checker, the variable-ordering heuristics, the assignment trail and the
/// backtracking engine.
pub mod csp;

/// The `puzzle` module contains the input glue: decoding flat digit lines
/// and puzzle files into boards.
pub mod puzzle;
