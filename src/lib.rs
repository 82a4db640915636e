//! Draughts (checkers) decision engine.
//!
//! The crate is split the same way the engine thinks about a position:
//! - [`board`] holds the compact board, the piece rules, the successor
//!   generator and the alpha-beta search over [`board::State`] nodes.
//! - [`game`] commits searched moves one after another and keeps the history.
//! - [`zobrist`] provides the position keys used by the game record.

// Routes diagnostics to the `log` facade when the `logging` feature is on.
#[cfg(feature = "logging")]
macro_rules! engine_log {
    ($level:ident, $($arg:tt)*) => {
        ::log::$level!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! engine_log {
    ($level:ident, $($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

pub mod board;
pub mod game;
pub mod zobrist;

pub use board::{Board, Color, Kind, Move, Piece, Square, State};
pub use game::Game;
