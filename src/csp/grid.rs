//! The 9x9 board substrate every other component reads and writes.
//!
//! Cells hold `0` for "empty" and `1..=9` for a placed digit. The grid is a
//! plain owned array mutated in place during search; recursive calls borrow
//! it mutably rather than copying it per step.

use itertools::iproduct;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;
use thiserror::Error;

/// Number of rows (and columns) on the board.
pub const GRID_SIZE: usize = 9;
/// Side length of one box.
pub const BOX_SIZE: usize = 3;
/// Total cell count of the board.
pub const N_CELLS: usize = GRID_SIZE * GRID_SIZE;
/// The cell value standing for "not yet assigned".
pub const EMPTY: u8 = 0;

/// A 9x9 Sudoku board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid([[u8; GRID_SIZE]; GRID_SIZE]);

impl Grid {
    /// Creates a grid from row-major cell values.
    #[must_use]
    pub const fn new(cells: [[u8; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self(cells)
    }

    /// Returns the first empty cell in row-major order, or `None` if the
    /// board is full.
    #[must_use]
    pub fn first_empty(&self) -> Option<(usize, usize)> {
        iproduct!(0..GRID_SIZE, 0..GRID_SIZE).find(|&(row, col)| self.0[row][col] == EMPTY)
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.0.iter().flatten().filter(|&&v| v == EMPTY).count()
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Returns `true` if the board is completely filled and every row,
    /// column and box contains each of `1..=9` exactly once.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        (0..GRID_SIZE).all(|i| {
            Self::unit_solved((0..GRID_SIZE).map(|col| self.0[i][col]))
                && Self::unit_solved((0..GRID_SIZE).map(|row| self.0[row][i]))
                && Self::unit_solved(Self::box_cells(i).map(|(row, col)| self.0[row][col]))
        })
    }

    /// Renders the board back into the flat 81-character line format,
    /// with `0` for empty cells.
    #[must_use]
    pub fn to_line(&self) -> String {
        self.0
            .iter()
            .flatten()
            .map(|&v| char::from(b'0' + v))
            .collect()
    }

    fn unit_solved(values: impl Iterator<Item = u8>) -> bool {
        let mut seen = [false; GRID_SIZE + 1];
        for value in values {
            let value = usize::from(value);
            if value == 0 || value > GRID_SIZE || seen[value] {
                return false;
            }
            seen[value] = true;
        }
        true
    }

    /// Cell coordinates of box `b`, numbered row-major from the top left.
    fn box_cells(b: usize) -> impl Iterator<Item = (usize, usize)> {
        let start_row = b / BOX_SIZE * BOX_SIZE;
        let start_col = b % BOX_SIZE * BOX_SIZE;
        (0..GRID_SIZE).map(move |k| (start_row + k / BOX_SIZE, start_col + k % BOX_SIZE))
    }
}

impl From<[[u8; GRID_SIZE]; GRID_SIZE]> for Grid {
    fn from(cells: [[u8; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self::new(cells)
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = u8;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

/// Error produced when decoding a flat puzzle line fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseGridError {
    /// The line did not contain exactly 81 cells.
    #[error("expected 81 cells, found {0}")]
    WrongLength(usize),

    /// A cell character was neither a digit nor an empty marker.
    #[error("invalid character '{found}' at cell {index}")]
    InvalidCharacter {
        /// Row-major index of the offending cell.
        index: usize,
        /// The character that could not be decoded.
        found: char,
    },
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Decodes the flat row-major line format: 81 characters, `'0'` or `'.'`
    /// for an empty cell, `'1'..='9'` for a given digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let len = line.chars().count();
        if len != N_CELLS {
            return Err(ParseGridError::WrongLength(len));
        }

        let mut cells = [[EMPTY; GRID_SIZE]; GRID_SIZE];
        for (index, ch) in line.chars().enumerate() {
            cells[index / GRID_SIZE][index % GRID_SIZE] = match ch {
                '0' | '.' => EMPTY,
                '1'..='9' => ch as u8 - b'0',
                _ => return Err(ParseGridError::InvalidCharacter { index, found: ch }),
            };
        }
        Ok(Self(cells))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            if row > 0 && row % BOX_SIZE == 0 {
                writeln!(f, "------+-------+------")?;
            }
            for col in 0..GRID_SIZE {
                if col > 0 {
                    if col % BOX_SIZE == 0 {
                        write!(f, " | ")?;
                    } else {
                        write!(f, " ")?;
                    }
                }
                match self.0[row][col] {
                    EMPTY => write!(f, ".")?,
                    v => write!(f, "{v}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
