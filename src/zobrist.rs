//! Zobrist hashing for draughts positions.
//!
//! Keys identify a (board, side to move) pair. The game record uses them to
//! count how often a position has occurred.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Board, Color, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[color][kind][square_index]
    pub(crate) piece_keys: [[[u64; Square::COUNT]; 2]; 2],
    pub(crate) black_to_move_key: u64,
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64);
        let mut piece_keys = [[[0; Square::COUNT]; 2]; 2];

        for color in &mut piece_keys {
            for kind in color.iter_mut() {
                for key in kind.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key: rng.gen(),
        }
    }
}

/// Shared key table, built on first use
pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

/// Key of `board` with `turn` to move.
#[must_use]
pub fn position_key(board: &Board, turn: Color) -> u64 {
    let mut key = board
        .pieces()
        .fold(0u64, |acc, (sq, piece)| {
            acc ^ ZOBRIST.piece_keys[piece.color.index()][piece.kind.index()][sq.index()]
        });
    if turn == Color::Black {
        key ^= ZOBRIST.black_to_move_key;
    }
    key
}
