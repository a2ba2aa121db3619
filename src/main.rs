//! # sudoku_csp
//!
//! A command-line Sudoku solver. Puzzles are 81-character lines (`0` or `.`
//! for an empty cell), supplied either inline or one per line in `.sudoku`
//! files; a directory is walked and every `.sudoku` file in it is solved.
//!
//! The search core is recursive backtracking with minimum-remaining-values
//! variable ordering and a degree-heuristic tie-break; see the library docs.
//!
//! ## Usage
//!
//! ```sh
//! # Solve a puzzle file (or every .sudoku file under a directory)
//! sudoku_csp <path>
//! sudoku_csp file --path puzzles/easy.sudoku
//!
//! # Solve a single inline puzzle
//! sudoku_csp line --input "001002000005006030460005000000104000600800143000090508800049050100320000009000300"
//!
//! # Generate shell completions
//! sudoku_csp completions bash
//! ```
//!
//! ### Common options
//!
//! - `-d, --debug`: print the parsed puzzle before solving.
//! - `-v, --verify`: re-check the solved board (default: `true`).
//! - `-s, --stats`: print timing, search and memory statistics (default: `true`).
//! - `-t, --trace <N>`: print the first N assignment records (default: `4`).

use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use sudoku_csp::csp::grid::Grid;
use sudoku_csp::csp::solver::{SearchStats, Solver};
use sudoku_csp::puzzle::parse::parse_puzzle_file;
use tikv_jemalloc_ctl::{epoch, stats};

/// Global allocator using `tikv-jemallocator`, which also backs the memory
/// usage figures in the statistics report.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Defines the command-line interface for the solver.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "sudoku_csp", version, about = "A Sudoku constraint solver")]
struct Cli {
    /// An optional bare path argument. If provided without a subcommand,
    /// it's treated as a puzzle file, or a directory of `.sudoku` files.
    path: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `file`, `line`).
    #[clap(subcommand)]
    command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    common: CommonOptions,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Solve a puzzle file (one 81-character puzzle per line).
    File {
        /// Path to the puzzle file.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve a single puzzle given inline as an 81-character line.
    Line {
        /// The puzzle, row-major; `0` or `.` marks an empty cell.
        #[arg(short, long)]
        input: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across subcommands.
#[derive(Args, Debug, Default, Clone)]
struct CommonOptions {
    /// Print the parsed puzzle before solving.
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Re-check the solved board against the Sudoku rules and the givens.
    #[arg(short, long, default_value_t = true)]
    verify: bool,

    /// Print timing, search and memory statistics after solving.
    #[arg(short, long, default_value_t = true)]
    stats: bool,

    /// Print the first N assignment records of the solution path.
    #[arg(short, long, default_value_t = 4)]
    trace: usize,
}

fn main() {
    let cli = Cli::parse();

    // A bare path without a subcommand solves that file or directory.
    if let Some(path) = cli.path.clone() {
        if cli.command.is_none() {
            if let Err(e) = solve_path(&path, &cli.common) {
                eprintln!("{e}");
                std::process::exit(1);
            }
            return;
        }
    }

    let result = match cli.command {
        Some(Commands::File { path, common }) => solve_path(&path, &common),
        Some(Commands::Line { input, common }) => solve_line(&input, &common),
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
        None => {
            eprintln!("No command provided. Use --help for more information.");
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Solves a puzzle file, or every `.sudoku` file under a directory.
fn solve_path(path: &Path, common: &CommonOptions) -> Result<(), String> {
    if path.is_dir() {
        return solve_dir(path, common);
    }
    solve_file(path, common)
}

/// Walks `path` and solves every `.sudoku` file found.
fn solve_dir(path: &Path, common: &CommonOptions) -> Result<(), String> {
    for entry in walkdir::WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        let file_path = entry.path();
        if !file_path.is_file() {
            continue;
        }
        if file_path.extension().is_none_or(|ext| ext != "sudoku") {
            eprintln!("Skipping non-puzzle file: {}", file_path.display());
            continue;
        }
        solve_file(file_path, common)?;
    }
    Ok(())
}

/// Parses and solves every puzzle in one file.
fn solve_file(path: &Path, common: &CommonOptions) -> Result<(), String> {
    let time = Instant::now();
    let grids = parse_puzzle_file(path)
        .map_err(|e| format!("{}: {e}", path.display()))?;
    let parse_time = time.elapsed();

    println!("Solving: {}", path.display());
    for grid in grids {
        solve_and_report(grid, common, parse_time);
    }
    Ok(())
}

/// Parses and solves a single inline puzzle.
fn solve_line(input: &str, common: &CommonOptions) -> Result<(), String> {
    let time = Instant::now();
    let grid: Grid = input.parse().map_err(|e| format!("invalid puzzle: {e}"))?;
    let parse_time = time.elapsed();

    solve_and_report(grid, common, parse_time);
    Ok(())
}

/// Solves one puzzle instance and reports trace, statistics and solution.
fn solve_and_report(grid: Grid, common: &CommonOptions, parse_time: Duration) {
    if common.debug {
        println!("Puzzle:\n{grid}");
        println!("Empty cells: {}", grid.empty_count());
    }

    let givens = grid.clone();

    epoch::advance().unwrap();
    let time = Instant::now();
    let mut solver = Solver::new(grid);
    let solved = solver.solve();
    let elapsed = time.elapsed();

    epoch::advance().unwrap();
    let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
    let resident_bytes = stats::resident::mib().unwrap().read().unwrap();
    let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
    let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

    if common.verify {
        verify_solution(&givens, &solver, solved);
    }

    if common.stats {
        print_stats(
            parse_time,
            elapsed,
            &givens,
            solver.stats(),
            solver.trail().len(),
            allocated_mib,
            resident_mib,
        );
    }

    if common.trace > 0 && solved {
        println!(
            "First {} Variable-Value Assignments:",
            common.trace.min(solver.trail().len())
        );
        for step in solver.trail().first(common.trace) {
            println!("{step}");
        }
    }

    if solved {
        println!("Solution:\n{}", solver.grid());
    } else {
        println!("No solution found");
    }
}

/// Re-checks a claimed solution: the board must satisfy the Sudoku rules and
/// every given must still hold its original value.
///
/// Prints whether the verification was successful; a failed verification is
/// a solver bug and panics.
fn verify_solution(givens: &Grid, solver: &Solver, solved: bool) {
    if !solved {
        println!("UNSOLVABLE");
        return;
    }

    let ok = solver.grid().is_solved() && givens_preserved(givens, solver.grid());
    println!("Verified: {ok:?}");
    assert!(ok, "Solution failed verification!");
}

/// Returns `true` if every non-empty cell of `givens` is unchanged in `solved`.
fn givens_preserved(givens: &Grid, solved: &Grid) -> bool {
    use sudoku_csp::csp::grid::{EMPTY, GRID_SIZE};
    (0..GRID_SIZE).all(|row| {
        (0..GRID_SIZE).all(|col| {
            givens[(row, col)] == EMPTY || givens[(row, col)] == solved[(row, col)]
        })
    })
}

/// Helper function to print a single statistic line in a formatted table row.
fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate (value/second).
fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints a summary of problem and search statistics.
fn print_stats(
    parse_time: Duration,
    elapsed: Duration,
    givens: &Grid,
    s: SearchStats,
    trail_len: usize,
    allocated: f64,
    resident: f64,
) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=======================[ Problem Statistics ]========================");
    stat_line("Parse time (s)", format!("{:.3}", parse_time.as_secs_f64()));
    stat_line("Givens", 81 - givens.empty_count());
    stat_line("Empty cells", givens.empty_count());

    println!("========================[ Search Statistics ]========================");
    stat_line_with_rate("Decisions", s.decisions, elapsed_secs);
    stat_line_with_rate("Backtracks", s.backtracks, elapsed_secs);
    stat_line("Assignments kept", trail_len);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn givens_preserved_spots_overwrites() {
        let puzzle: Grid =
            "001002000005006030460005000000104000600800143000090508800049050100320000009000300"
                .parse()
                .unwrap();
        let mut solver = Solver::new(puzzle.clone());
        assert!(solver.solve());
        assert!(givens_preserved(&puzzle, solver.grid()));

        let mut tampered = solver.grid().clone();
        let flipped = if puzzle[(0, 2)] == 1 { 2 } else { 1 };
        tampered[(0, 2)] = flipped;
        assert!(!givens_preserved(&puzzle, &tampered));
    }
}
