//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `rules.rs` - Per-piece move and capture destinations, applying them
//! - `movegen.rs` - Successor generation, mandatory capture and chains
//! - `search.rs` - Alpha-beta, minimax equivalence and terminal scores
//! - `proptest.rs` - Property-based tests over random playouts

mod search;

use rand::prelude::*;

use super::{Board, Color};

/// Play `plies` random turns from the starting position.
///
/// Stops early when the side to move has no successor. Returns the board and
/// the side to move next.
pub(super) fn random_playout(seed: u64, plies: usize) -> (Board, Color) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut turn = Color::White;
    for _ in 0..plies {
        let successors = board.successors(turn);
        if successors.is_empty() {
            break;
        }
        let idx = rng.gen_range(0..successors.len());
        board = successors[idx].0;
        turn = turn.opponent();
    }
    (board, turn)
}
