//! Square board with a dead-zone border

use itertools::iproduct;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Edge length of the application board
pub const BOARD_SIZE: usize = 50;

/// Smallest board that still has an interior inside its one-cell border
pub const MIN_BOARD_SIZE: usize = 3;

/// Errors raised while building a board from explicit cell data
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board cannot be empty")]
    Empty,
    #[error("board size {0} is below the minimum of {min}", min = MIN_BOARD_SIZE)]
    TooSmall(usize),
    #[error("row {row} has length {len}, expected {expected} (boards are square)")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("invalid character '{ch}' at ({row}, {col}), expected one of 0 1 . #")]
    InvalidChar { ch: char, row: usize, col: usize },
}

/// An N×N grid of alive/dead cells, stored row-major.
///
/// The outermost ring (row 0, row N-1, column 0, column N-1) is the dead zone.
/// Nothing here forbids live cells on it; keeping it clear is up to the
/// patterns that place cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: usize,
    cells: Vec<bool>,
}

impl Board {
    /// Create an all-dead board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is smaller than [`MIN_BOARD_SIZE`].
    pub fn new(size: usize) -> Self {
        assert!(
            size >= MIN_BOARD_SIZE,
            "board size {size} is below the minimum of {MIN_BOARD_SIZE}"
        );
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Create a board from a square 2D boolean array
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self, BoardError> {
        if cells.is_empty() {
            return Err(BoardError::Empty);
        }

        let size = cells.len();
        for (row, line) in cells.iter().enumerate() {
            if line.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: line.len(),
                    expected: size,
                });
            }
        }
        if size < MIN_BOARD_SIZE {
            return Err(BoardError::TooSmall(size));
        }

        Ok(Self {
            size,
            cells: cells.into_iter().flatten().collect(),
        })
    }

    /// Assemble a board from already computed row-major cells.
    pub(crate) fn from_flat(size: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Get cell value at coordinates; anything off the board reads as dead
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row < self.size && col < self.size {
            self.cells[self.index(row, col)]
        } else {
            false
        }
    }

    /// Set cell value at coordinates.
    ///
    /// Callers are the engine's patterns, which only ever address cells on
    /// the board.
    pub(crate) fn set(&mut self, row: usize, col: usize, alive: bool) {
        let idx = self.index(row, col);
        self.cells[idx] = alive;
    }

    /// Kill every cell
    pub(crate) fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Whether the coordinates lie on the dead-zone ring
    pub fn is_border(&self, row: usize, col: usize) -> bool {
        let last = self.size - 1;
        row == 0 || col == 0 || row == last || col == last
    }

    /// Get all living cell coordinates, row-major
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.size, 0..self.size)
            .filter(|&(row, col)| self.get(row, col))
            .collect()
    }

    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the board has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Iterate over the rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.size)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                write!(f, "{}", if cell { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse rows of `0`/`1` or `.`/`#`; blank lines and surrounding
    /// whitespace are ignored.
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let cells = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, ch)| match ch {
                        '1' | '#' => Ok(true),
                        '0' | '.' => Ok(false),
                        _ => Err(BoardError::InvalidChar { ch, row, col }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_cells(cells)
    }
}
