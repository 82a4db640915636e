//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use draughts_engine::board::prelude::*;
//! ```

pub use super::{
    alpha_beta, find_best_move, search, Board, BoardBuilder, BoardError, Color, Kind, Move, Piece,
    SearchConfig, Square, SquareError, State, StateError,
};
