//! Packed row encoding.
//!
//! Each row is a 32-bit word with 4 bits per column, column 0 in the most
//! significant nibble. Codes: `0x8` empty or unplayable, `0x2` white man,
//! `0x3` white king, `0xA` black man, `0xB` black king.

use super::error::DecodeError;
use super::{Board, Piece, Square};

/// Nibble stored for empty and light cells
pub const EMPTY_CODE: u8 = 0x8;

#[inline]
const fn nibble_shift(col: usize) -> usize {
    28 - 4 * col
}

impl Board {
    /// Encode the board as eight packed row words.
    #[must_use]
    pub fn encode(&self) -> [u32; 8] {
        let mut rows = [0u32; 8];
        for (row, word) in rows.iter_mut().enumerate() {
            for col in 0..8 {
                let code = Square::new(row, col)
                    .ok()
                    .and_then(|sq| self.get(sq))
                    .map_or(EMPTY_CODE, Piece::code);
                *word |= u32::from(code) << nibble_shift(col);
            }
        }
        rows
    }

    /// Decode eight packed row words.
    ///
    /// Returns an error if a nibble is not a known code or a piece code sits
    /// on a light cell.
    pub fn decode(rows: [u32; 8]) -> Result<Self, DecodeError> {
        let mut board = Board::empty();
        for (row, word) in rows.iter().enumerate() {
            for col in 0..8 {
                let code = ((word >> nibble_shift(col)) & 0xF) as u8;
                if code == EMPTY_CODE {
                    continue;
                }
                let piece =
                    Piece::from_code(code).ok_or(DecodeError::InvalidCode { row, col, code })?;
                let sq = Square::new(row, col)
                    .map_err(|_| DecodeError::PieceOnLightSquare { row, col, code })?;
                board.set(sq, Some(piece));
            }
        }
        Ok(board)
    }

    /// Decode packed row words known to be valid.
    ///
    /// # Panics
    /// Panics if the words do not describe a well-formed board.
    #[must_use]
    pub fn from_rows(rows: [u32; 8]) -> Self {
        match Board::decode(rows) {
            Ok(board) => board,
            Err(err) => panic!("{err}"),
        }
    }
}

impl TryFrom<[u32; 8]> for Board {
    type Error = DecodeError;

    fn try_from(rows: [u32; 8]) -> Result<Self, Self::Error> {
        Board::decode(rows)
    }
}

impl From<Board> for [u32; 8] {
    fn from(board: Board) -> Self {
        board.encode()
    }
}
