//! Board storage over the 32 dark cells.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Bitboard, Color, Kind, Piece, Square};
use crate::zobrist::position_key;

/// Draughts board over the 32 dark cells.
///
/// `occupied` holds one bitboard per color and `kings` marks which occupied
/// cells hold kings. The two color sets never overlap and `kings` is always a
/// subset of their union.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "[u32; 8]", into = "[u32; 8]")
)]
pub struct Board {
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) kings: Bitboard,
}

impl Board {
    /// Standard starting position: twelve men per side, Black on rows 0-2,
    /// White on rows 5-7.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for sq in Square::all() {
            match sq.row() {
                0..=2 => board.set(sq, Some(Piece::man(Color::Black))),
                5..=7 => board.set(sq, Some(Piece::man(Color::White))),
                _ => {}
            }
        }
        board
    }

    #[must_use]
    pub const fn empty() -> Self {
        Board {
            occupied: [Bitboard::EMPTY; 2],
            kings: Bitboard::EMPTY,
        }
    }

    #[inline]
    #[must_use]
    pub fn all_occupied(&self) -> Bitboard {
        self.occupied[0] | self.occupied[1]
    }

    #[inline]
    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        !self.all_occupied().contains(sq)
    }

    #[must_use]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        let color = if self.occupied[0].contains(sq) {
            Color::White
        } else if self.occupied[1].contains(sq) {
            Color::Black
        } else {
            return None;
        };
        let kind = if self.kings.contains(sq) {
            Kind::King
        } else {
            Kind::Man
        };
        Some(Piece::new(color, kind))
    }

    /// Store `piece` on `sq`, replacing whatever was there.
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        let bit = Bitboard::from_square(sq);
        self.occupied[0] &= !bit;
        self.occupied[1] &= !bit;
        self.kings &= !bit;
        if let Some(piece) = piece {
            self.occupied[piece.color.index()] |= bit;
            if piece.is_king() {
                self.kings |= bit;
            }
        }
    }

    /// Clear `sq`, returning the piece that stood there.
    pub fn delete(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.get(sq);
        self.set(sq, None);
        piece
    }

    /// All pieces on the board, in square index order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> {
        let board = *self;
        self.all_occupied()
            .iter()
            .filter_map(move |sq| board.get(sq).map(|piece| (sq, piece)))
    }

    /// All pieces of one color, in square index order
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> {
        let kings = self.kings;
        self.occupied_by(color).iter().map(move |sq| {
            let kind = if kings.contains(sq) {
                Kind::King
            } else {
                Kind::Man
            };
            (sq, Piece::new(color, kind))
        })
    }

    #[inline]
    #[must_use]
    pub fn count(&self, color: Color) -> u32 {
        self.occupied_by(color).popcount()
    }

    /// Signed material sum: man = 1.0, king = 1.6, White positive.
    #[must_use]
    pub fn balance(&self) -> f64 {
        let kings = |color: Color| (self.occupied_by(color) & self.kings).popcount() as i32;
        let men = |color: Color| self.count(color) as i32 - kings(color);

        let men_diff = men(Color::White) - men(Color::Black);
        let kings_diff = kings(Color::White) - kings(Color::Black);
        f64::from(men_diff) * Kind::Man.value() + f64::from(kings_diff) * Kind::King.value()
    }

    /// Zobrist key of this board with `turn` to move
    #[inline]
    #[must_use]
    pub fn zobrist_key(&self, turn: Color) -> u64 {
        position_key(self, turn)
    }

    /// The same cells with every piece's color swapped
    #[must_use]
    pub fn with_colors_swapped(&self) -> Self {
        Board {
            occupied: [self.occupied[1], self.occupied[0]],
            kings: self.kings,
        }
    }

    /// The position seen from the other side: rotated 180 degrees with colors swapped
    #[must_use]
    pub fn mirrored(&self) -> Self {
        Board {
            occupied: [self.occupied[1].rotated(), self.occupied[0].rotated()],
            kings: self.kings.rotated(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let board = Board::new();
        assert_eq!(board.count(Color::White), 12);
        assert_eq!(board.count(Color::Black), 12);
        assert_eq!(board.balance(), 0.0);
        assert_eq!(board.get(Square::at(0, 1)), Some(Piece::man(Color::Black)));
        assert_eq!(board.get(Square::at(7, 0)), Some(Piece::man(Color::White)));
        assert!(board.is_empty(Square::at(3, 0)));
        assert!(board.is_empty(Square::at(4, 1)));
    }

    #[test]
    fn test_set_replaces_and_delete_clears() {
        let mut board = Board::empty();
        let sq = Square::at(4, 3);
        board.set(sq, Some(Piece::king(Color::White)));
        board.set(sq, Some(Piece::man(Color::Black)));
        assert_eq!(board.get(sq), Some(Piece::man(Color::Black)));
        assert!(!board.occupied_by(Color::White).contains(sq));
        assert!(!board.kings.contains(sq));

        assert_eq!(board.delete(sq), Some(Piece::man(Color::Black)));
        assert_eq!(board.get(sq), None);
        assert_eq!(board.delete(sq), None);
    }

    #[test]
    fn test_balance_weights_kings() {
        let mut board = Board::empty();
        board.set(Square::at(4, 3), Some(Piece::king(Color::White)));
        board.set(Square::at(2, 1), Some(Piece::man(Color::Black)));
        board.set(Square::at(2, 3), Some(Piece::man(Color::Black)));
        assert!((board.balance() - (1.6 - 2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_pieces_of_filters_by_color() {
        let board = Board::new();
        assert!(board.pieces_of(Color::White).all(|(sq, p)| p.color == Color::White && sq.row() >= 5));
        assert_eq!(board.pieces().count(), 24);
    }

    #[test]
    fn test_zobrist_key_tracks_pieces_and_turn() {
        let board = Board::new();
        assert_eq!(board.zobrist_key(Color::White), position_key(&board, Color::White));
        assert_ne!(board.zobrist_key(Color::White), board.zobrist_key(Color::Black));

        let mut moved = board;
        moved.set(Square::at(5, 0), None);
        moved.set(Square::at(4, 1), Some(Piece::man(Color::White)));
        assert_ne!(moved.zobrist_key(Color::White), board.zobrist_key(Color::White));
    }

    #[test]
    fn test_color_swap_keeps_kinds() {
        let mut board = Board::empty();
        board.set(Square::at(4, 3), Some(Piece::king(Color::White)));
        board.set(Square::at(2, 1), Some(Piece::man(Color::Black)));
        let swapped = board.with_colors_swapped();
        for (sq, piece) in board.pieces() {
            assert_eq!(
                swapped.get(sq),
                Some(Piece::new(piece.color.opponent(), piece.kind))
            );
        }
        assert_eq!(swapped.pieces().count(), 2);
    }

    #[test]
    fn test_mirrored_start_is_start() {
        let board = Board::new();
        assert_eq!(board.mirrored(), board);
        assert_eq!(board.with_colors_swapped().balance(), 0.0);
    }
}
