//! Applying moves, captures and promotion to a board.

use super::error::BoardError;
use super::{Board, Capture, Kind, Piece, Square};

impl Board {
    /// Apply a simple move of the piece on `from` to `to`.
    ///
    /// Fails if `from` is empty or `to` is not one of the piece's move targets.
    /// Promotion is not applied; see [`Board::promote_if_due`].
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<(), BoardError> {
        let piece = self.get(from).ok_or(BoardError::EmptySquare { square: from })?;
        if !self.move_targets(from).contains(&to) {
            return Err(BoardError::IllegalMove { from, to });
        }
        self.relocate(from, to, piece);
        Ok(())
    }

    /// Apply a capture by the piece on `from`, landing on `to`.
    ///
    /// Returns the cell of the removed piece. Fails if `from` is empty or `to`
    /// is not one of the piece's capture landings.
    pub fn apply_capture(&mut self, from: Square, to: Square) -> Result<Square, BoardError> {
        let piece = self.get(from).ok_or(BoardError::EmptySquare { square: from })?;
        let capture = self
            .capture_targets(from)
            .into_iter()
            .find(|c| c.to == to)
            .ok_or(BoardError::IllegalCapture { from, to })?;
        self.jump(from, capture, piece);
        Ok(capture.captured)
    }

    /// Crown a man standing on its promotion row. Returns true if it was crowned.
    pub fn promote_if_due(&mut self, sq: Square) -> bool {
        match self.get(sq) {
            Some(piece) if piece.kind == Kind::Man && sq.row() == piece.color.promotion_row() => {
                self.set(sq, Some(Piece::king(piece.color)));
                true
            }
            _ => false,
        }
    }

    /// Apply a capture already drawn from `capture_targets`.
    pub(crate) fn jump(&mut self, from: Square, capture: Capture, piece: Piece) {
        self.set(capture.captured, None);
        self.relocate(from, capture.to, piece);
    }

    #[inline]
    fn relocate(&mut self, from: Square, to: Square, piece: Piece) {
        self.set(from, None);
        self.set(to, Some(piece));
    }
}
