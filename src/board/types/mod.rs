//! Core draughts types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece`, `Kind` and `Color` - piece tags and their direction tables
//! - `Square` - a validated dark cell
//! - `Bitboard` - 32-bit set of dark cells
//! - `Move` and `Capture` - a full turn and a single jump

mod bitboard;
mod moves;
mod piece;
mod square;

// Re-export all public types
pub use bitboard::Bitboard;
pub use moves::{Capture, Move};
pub use piece::{Color, Kind, Piece};
pub use square::Square;
