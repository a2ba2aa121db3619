//! A parser for flat-line puzzle files.
//!
//! A puzzle file holds one puzzle per line in the 81-character row-major
//! format (`'0'` or `'.'` for empty cells, `'1'..='9'` for givens). Blank
//! lines and lines starting with `#` are skipped, so files can carry
//! comments and visual spacing between instances.

use crate::csp::grid::{Grid, ParseGridError};
use std::io::{self, BufRead};
use std::path::Path;
use thiserror::Error;

/// Error produced when reading or decoding a puzzle file fails.
#[derive(Debug, Error)]
pub enum PuzzleFileError {
    /// The underlying reader failed.
    #[error("failed to read puzzle input: {0}")]
    Io(#[from] io::Error),

    /// A non-comment line was not a valid puzzle.
    #[error("line {line}: {source}")]
    Parse {
        /// 1-based line number within the input.
        line: usize,
        /// The underlying decoding failure.
        #[source]
        source: ParseGridError,
    },
}

/// Parses every puzzle in `reader`, in input order.
///
/// # Errors
///
/// Fails on the first I/O error or undecodable line; the error carries the
/// 1-based line number.
pub fn parse_puzzles<R: BufRead>(reader: R) -> Result<Vec<Grid>, PuzzleFileError> {
    let mut grids = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let grid = trimmed
            .parse()
            .map_err(|source| PuzzleFileError::Parse {
                line: index + 1,
                source,
            })?;
        grids.push(grid);
    }
    Ok(grids)
}

/// Opens `path` and parses every puzzle in it.
///
/// # Errors
///
/// Fails if the file cannot be opened or any line fails to decode.
pub fn parse_puzzle_file(path: &Path) -> Result<Vec<Grid>, PuzzleFileError> {
    let file = std::fs::File::open(path)?;
    parse_puzzles(io::BufReader::new(file))
}
