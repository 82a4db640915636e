//! Square type and utilities.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// The four diagonal directions as (row, column) deltas.
pub(crate) const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A playable (dark) cell, represented as (row, column).
///
/// Row 0 is Black's home row, row 7 is White's. A `Square` can only be built
/// for a cell where `row + col` is odd.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "(usize, usize)", into = "(usize, usize)")
)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Number of playable cells
    pub const COUNT: usize = 32;

    /// Create a new square, rejecting out of range and light cells
    pub fn new(row: usize, col: usize) -> Result<Self, SquareError> {
        if row >= 8 {
            return Err(SquareError::RowOutOfRange { row });
        }
        if col >= 8 {
            return Err(SquareError::ColumnOutOfRange { col });
        }
        if (row + col) % 2 == 0 {
            return Err(SquareError::LightSquare { row, col });
        }
        Ok(Square {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Create a square from coordinates known to be valid.
    ///
    /// # Panics
    /// Panics if the cell is out of range or light.
    #[must_use]
    pub fn at(row: usize, col: usize) -> Self {
        match Square::new(row, col) {
            Ok(square) => square,
            Err(err) => panic!("{err}"),
        }
    }

    /// Get the row (0-7)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Get the column (0-7)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Dark-cell index (0-31), four per row
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 4 + self.col as usize / 2
    }

    /// Create a square from a dark-cell index (0-31)
    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        let row = idx / 4;
        let col = (idx % 4) * 2 + if row % 2 == 0 { 1 } else { 0 };
        Square {
            row: row as u8,
            col: col as u8,
        }
    }

    /// The neighbouring cell one diagonal step away, if it is on the board
    #[inline]
    #[must_use]
    pub(crate) fn offset(self, dr: isize, dc: isize) -> Option<Square> {
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            // A diagonal step from a dark cell always lands on a dark cell.
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Rotate the square by 180 degrees (dark cells stay dark)
    #[inline]
    #[must_use]
    pub const fn rotated(self) -> Self {
        Square {
            row: 7 - self.row,
            col: 7 - self.col,
        }
    }

    /// Iterate over all 32 playable cells in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Square::COUNT).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.col + b'a') as char, 8 - self.row)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Square::new(row, col)
    }
}

impl From<Square> for (usize, usize) {
    fn from(sq: Square) -> Self {
        (sq.row(), sq.col())
    }
}
