//! Board representation and solvability analysis
//!
//! A board is a square grid holding the values `0..N²-1` where `0` marks the
//! blank. Boards are validated at construction so the search engine never
//! operates on a malformed configuration. Equality and hashing are cell-wise,
//! which lets boards key the explored set directly.

use ndarray::Array2;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::board::moves::Move;
use crate::io::configuration::{MAX_BOARD_DIMENSION, MIN_BOARD_DIMENSION};
use crate::io::error::{Result, SolverError};

/// Square sliding tile board with exactly one blank cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array2<u16>,
}

impl Board {
    /// Build a board from row-major tile values
    ///
    /// # Errors
    ///
    /// Returns `InvalidBoard` if the dimension is out of range, the value
    /// count does not match `size * size`, or the values are not a
    /// permutation of `0..size²-1` (which also guarantees a single blank).
    pub fn from_tiles(size: usize, tiles: &[u16]) -> Result<Self> {
        if !(MIN_BOARD_DIMENSION..=MAX_BOARD_DIMENSION).contains(&size) {
            return Err(SolverError::InvalidBoard {
                reason: format!(
                    "dimension {size} outside supported range \
                     {MIN_BOARD_DIMENSION}..={MAX_BOARD_DIMENSION}"
                ),
            });
        }

        let cell_count = size * size;
        if tiles.len() != cell_count {
            return Err(SolverError::InvalidBoard {
                reason: format!(
                    "expected {cell_count} values for a {size}x{size} board, got {}",
                    tiles.len()
                ),
            });
        }

        let mut seen = vec![false; cell_count];
        for &value in tiles {
            let slot = seen.get_mut(value as usize).ok_or_else(|| {
                SolverError::InvalidBoard {
                    reason: format!("tile value {value} out of range 0..{cell_count}"),
                }
            })?;
            if *slot {
                return Err(SolverError::InvalidBoard {
                    reason: format!("tile value {value} appears more than once"),
                });
            }
            *slot = true;
        }

        let cells = Array2::from_shape_vec((size, size), tiles.to_vec()).map_err(|e| {
            SolverError::InvalidBoard {
                reason: format!("shape error for {size}x{size} board: {e}"),
            }
        })?;

        Ok(Self { cells })
    }

    /// The canonical solved configuration for the given dimension
    ///
    /// Tile `k` occupies row `(k-1)/size`, column `(k-1)%size`, and the
    /// blank occupies the last cell.
    pub fn solved(size: usize) -> Self {
        let cells = Array2::from_shape_fn((size, size), |(row, col)| {
            let index = row * size + col;
            if index + 1 == size * size {
                0
            } else {
                (index + 1) as u16
            }
        });
        Self { cells }
    }

    /// Grid dimension N of this N×N board
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Value at the given cell, if in bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u16> {
        self.cells.get([row, col]).copied()
    }

    /// Iterate over `((row, col), value)` pairs in row-major order
    pub fn indexed_tiles(&self) -> impl Iterator<Item = ((usize, usize), u16)> + '_ {
        self.cells.indexed_iter().map(|(pos, &value)| (pos, value))
    }

    /// Locate the blank cell by scanning the grid
    ///
    /// Validated boards always contain a blank; the option only exists so
    /// callers holding an arbitrary grid do not have to assume one.
    pub fn find_blank(&self) -> Option<(usize, usize)> {
        self.cells
            .indexed_iter()
            .find(|&(_, &value)| value == 0)
            .map(|(pos, _)| pos)
    }

    /// Goal cell for a non-blank tile value on a board of the given size
    pub const fn goal_position(value: u16, size: usize) -> (usize, usize) {
        let index = (value - 1) as usize;
        (index / size, index % size)
    }

    /// Apply one blank move, producing the new board and blank position
    ///
    /// Returns `None` when the blank sits on the edge the move points past;
    /// expansion simply skips such directions.
    pub fn with_blank_moved(
        &self,
        blank: (usize, usize),
        mv: Move,
    ) -> Option<(Self, (usize, usize))> {
        let (dr, dc) = mv.offset();
        let row = blank.0.checked_add_signed(dr)?;
        let col = blank.1.checked_add_signed(dc)?;
        if row >= self.size() || col >= self.size() {
            return None;
        }

        let mut cells = self.cells.clone();
        cells.swap([blank.0, blank.1], [row, col]);
        Some((Self { cells }, (row, col)))
    }

    /// Number of inverted non-blank pairs in row-major order
    pub fn inversions(&self) -> usize {
        let flat: Vec<u16> = self.cells.iter().copied().collect();
        flat.iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(|(i, &value)| {
                flat.iter()
                    .skip(i + 1)
                    .filter(|&&later| later != 0 && later < value)
                    .count()
            })
            .sum()
    }

    /// Whether this configuration can reach the goal at all
    ///
    /// Odd dimensions are solvable iff the inversion count is even; even
    /// dimensions are solvable iff inversions plus the blank's row index
    /// (counted from the top) is odd.
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();
        if self.size() % 2 == 1 {
            inversions % 2 == 0
        } else {
            let blank_row = self.find_blank().map_or(0, |(row, _)| row);
            (inversions + blank_row) % 2 == 1
        }
    }
}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.dim().hash(state);
        for value in &self.cells {
            value.hash(state);
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.size() * self.size() - 1).to_string().len();
        for row in self.cells.rows() {
            let mut first = true;
            for value in row {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{value:>width$}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
