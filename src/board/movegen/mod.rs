//! Successor generation.
//!
//! A turn is either a complete capture chain or, when no piece of the mover
//! can capture, a single step. Captures are mandatory and every chain runs
//! until the moving piece has no further capture from its landing cell.

mod targets;

use super::{Board, Color, Move, Piece, Square};

impl Board {
    /// Pieces of `color` with at least one capture available
    #[must_use]
    pub fn attacking_pieces_of(&self, color: Color) -> Vec<(Square, Piece)> {
        self.pieces_of(color)
            .filter(|&(sq, _)| self.can_attack_anywhere(sq))
            .collect()
    }

    /// Pieces of `color` with a simple move available and no capture
    #[must_use]
    pub fn movable_pieces_of(&self, color: Color) -> Vec<(Square, Piece)> {
        self.pieces_of(color)
            .filter(|&(sq, _)| self.can_move_anywhere(sq) && !self.can_attack_anywhere(sq))
            .collect()
    }

    /// True if `color` has any legal move or capture.
    #[must_use]
    pub fn has_any_move(&self, color: Color) -> bool {
        self.pieces_of(color)
            .any(|(sq, _)| self.can_move_anywhere(sq) || self.can_attack_anywhere(sq))
    }

    /// Every legal board reachable by `color` in one turn, with the move that
    /// produced it. No ordering is guaranteed.
    #[must_use]
    pub fn successors(&self, color: Color) -> Vec<(Board, Move)> {
        let mut out = Vec::new();

        let attackers = self.attacking_pieces_of(color);
        if !attackers.is_empty() {
            for (from, _) in attackers {
                self.expand_captures(from, &Move::chain(from), &mut out);
            }
            return out;
        }

        for (from, _) in self.movable_pieces_of(color) {
            for to in self.move_targets(from) {
                let mut next = *self;
                if next.apply_move(from, to).is_ok() {
                    next.promote_if_due(to);
                    out.push((next, Move::simple(from, to)));
                }
            }
        }
        out
    }

    /// Extend the chain of the piece on `at` by every available jump,
    /// pushing a successor whenever the piece has no capture left.
    fn expand_captures(&self, at: Square, chain: &Move, out: &mut Vec<(Board, Move)>) {
        let Some(piece) = self.get(at) else {
            return;
        };
        let captures = self.capture_targets(at);
        if captures.is_empty() {
            out.push((*self, chain.clone()));
            return;
        }
        for capture in captures {
            let mut next = *self;
            next.jump(at, capture, piece);
            // Crowned on landing; the chain continues with king captures.
            next.promote_if_due(capture.to);
            next.expand_captures(capture.to, &chain.then(capture), out);
        }
    }
}
