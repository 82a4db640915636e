//! Error types for draughts board operations.

use std::fmt;

use super::Square;

/// Error type for square construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfRange { row: usize },
    /// Column out of bounds (must be 0-7)
    ColumnOutOfRange { col: usize },
    /// Light cells are never playable
    LightSquare { row: usize, col: usize },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfRange { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColumnOutOfRange { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::LightSquare { row, col } => {
                write!(f, "Cell ({row}, {col}) is a light cell and cannot hold a piece")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for decoding the packed row representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Nibble is not one of the known cell codes
    InvalidCode { row: usize, col: usize, code: u8 },
    /// A piece code was found on a light cell
    PieceOnLightSquare { row: usize, col: usize, code: u8 },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidCode { row, col, code } => {
                write!(f, "Invalid cell code {code:#x} at ({row}, {col})")
            }
            DecodeError::PieceOnLightSquare { row, col, code } => {
                write!(f, "Piece code {code:#x} on light cell ({row}, {col})")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Error type for applying moves and captures to a board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The source cell holds no piece
    EmptySquare { square: Square },
    /// The destination is not in the piece's move list
    IllegalMove { from: Square, to: Square },
    /// The destination is not in the piece's capture list
    IllegalCapture { from: Square, to: Square },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::EmptySquare { square } => {
                write!(f, "No piece on {square}")
            }
            BoardError::IllegalMove { from, to } => {
                write!(f, "Illegal move {from}-{to}")
            }
            BoardError::IllegalCapture { from, to } => {
                write!(f, "Illegal capture {from}x{to}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for search-node contract violations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    /// The side to move has no legal continuation
    Terminal,
    /// No search pass has chosen a best child yet
    NotSearched,
    /// The move is not among the state's successors
    UnknownMove,
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::Terminal => write!(f, "State is terminal, there is no move to make"),
            StateError::NotSearched => write!(f, "State has not been searched yet"),
            StateError::UnknownMove => write!(f, "Move is not a legal successor of this state"),
        }
    }
}

impl std::error::Error for StateError {}
