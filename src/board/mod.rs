//! Draughts board representation and game logic.
//!
//! The board only stores the 32 dark cells, as three 32-bit bitboards, so a
//! position is a cheap `Copy` value and every search branch owns its own
//! snapshot.
//!
//! # Example
//! ```
//! use draughts_engine::board::{find_best_move, State};
//!
//! let mut state = State::start();
//! let successors = state.children();
//! println!("Starting position has {} legal moves", successors.len());
//!
//! let best = find_best_move(&mut state, 4).unwrap();
//! println!("Best move: {best}");
//! ```

mod builder;
mod encoding;
mod error;
mod make_move;
mod movegen;
mod position;
pub mod prelude;
pub mod search;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{BoardError, DecodeError, SquareError, StateError};
pub use position::Board;
pub use types::{Bitboard, Capture, Color, Kind, Move, Piece, Square};

// Public API - search functions and configuration
pub use search::{
    alpha_beta, find_best_move, minimax, search, search_with_config, SearchConfig, SearchInfo,
    SearchLogger, SearchResult, SearchStats, State, StdoutLogger, BLACK_WINS, MAX_BOUND, MIN_BOUND,
    WHITE_WINS,
};
pub use search::smp::parallel_search;
