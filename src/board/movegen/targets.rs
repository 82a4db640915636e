//! Per-piece move and capture destinations.
//!
//! Men and kings share one ray walk; they differ only in their direction
//! table and in `reach`, the number of cells they may travel before and
//! after the jumped piece.

use super::super::{Board, Capture, Square};

impl Board {
    /// Destinations of simple moves for the piece on `from`.
    ///
    /// Empty when `from` holds no piece.
    #[must_use]
    pub fn move_targets(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.get(from) else {
            return Vec::new();
        };
        let mut targets = Vec::new();
        for &(dr, dc) in piece.move_directions() {
            let mut cursor = from;
            for _ in 0..piece.reach() {
                match cursor.offset(dr, dc) {
                    Some(next) if self.is_empty(next) => {
                        targets.push(next);
                        cursor = next;
                    }
                    _ => break,
                }
            }
        }
        targets
    }

    /// Captures available to the piece on `from`.
    ///
    /// A capture jumps exactly one opposing piece; every empty cell behind it
    /// (up to the piece's reach) is a separate landing.
    #[must_use]
    pub fn capture_targets(&self, from: Square) -> Vec<Capture> {
        let Some(piece) = self.get(from) else {
            return Vec::new();
        };
        let mut captures = Vec::new();
        for &(dr, dc) in piece.capture_directions() {
            let Some(captured) = self.first_opponent_on_ray(from, dr, dc, piece.reach()) else {
                continue;
            };
            let mut landing = captured;
            for _ in 0..piece.reach() {
                match landing.offset(dr, dc) {
                    Some(next) if self.is_empty(next) => {
                        captures.push(Capture { to: next, captured });
                        landing = next;
                    }
                    _ => break,
                }
            }
        }
        captures
    }

    #[inline]
    #[must_use]
    pub fn can_move_anywhere(&self, from: Square) -> bool {
        !self.move_targets(from).is_empty()
    }

    #[inline]
    #[must_use]
    pub fn can_attack_anywhere(&self, from: Square) -> bool {
        !self.capture_targets(from).is_empty()
    }

    /// The first occupied cell along a ray, if it is within `reach` and holds
    /// a piece of the other color.
    fn first_opponent_on_ray(
        &self,
        from: Square,
        dr: isize,
        dc: isize,
        reach: usize,
    ) -> Option<Square> {
        let own = self.get(from)?.color;
        let mut cursor = from;
        for _ in 0..reach {
            cursor = cursor.offset(dr, dc)?;
            if let Some(other) = self.get(cursor) {
                return (other.color != own).then_some(cursor);
            }
        }
        None
    }
}
