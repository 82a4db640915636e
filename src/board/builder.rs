//! Fluent builder for constructing draughts positions.
//!
//! Allows creating positions piece by piece rather than decoding packed rows.
//!
//! # Example
//! ```
//! use draughts_engine::board::{BoardBuilder, Color, Square};
//!
//! let state = BoardBuilder::new()
//!     .man(Square::at(5, 0), Color::White)
//!     .king(Square::at(2, 3), Color::Black)
//!     .side_to_move(Color::Black)
//!     .build_state();
//! assert_eq!(state.board().pieces().count(), 2);
//! ```

use super::{Board, Color, Piece, Square, State};

/// A fluent builder for constructing `Board` positions and root `State`s.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
    side_to_move: Color,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            board: Board::new(),
            side_to_move: Color::White,
        }
    }

    /// Place a piece on the board, replacing any existing one.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.board.set(square, Some(piece));
        self
    }

    #[must_use]
    pub fn man(self, square: Square, color: Color) -> Self {
        self.piece(square, Piece::man(color))
    }

    #[must_use]
    pub fn king(self, square: Square, color: Color) -> Self {
        self.piece(square, Piece::king(color))
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.set(square, None);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }

    /// Build a root search state with the configured side to move.
    #[must_use]
    pub fn build_state(self) -> State {
        State::new(self.board, self.side_to_move)
    }
}
