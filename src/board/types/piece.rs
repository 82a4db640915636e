//! Piece, kind and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::DIAGONALS;

/// Men of each color only step towards the opponent's home row.
const WHITE_MAN_STEPS: [(isize, isize); 2] = [(-1, -1), (-1, 1)];
const BLACK_MAN_STEPS: [(isize, isize); 2] = [(1, -1), (1, 1)];

/// Piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Kind {
    Man,
    King,
}

impl Kind {
    /// Both kinds in index order
    pub const ALL: [Kind; 2] = [Kind::Man, Kind::King];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Kind::Man => 0,
            Kind::King => 1,
        }
    }

    /// Material value used by the static balance.
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Kind::Man => 1.0,
            Kind::King => 1.6,
        }
    }
}

/// Piece colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Scoring sign for evaluation (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Color::White => 1.0,
            Color::Black => -1.0,
        }
    }

    /// Row direction men of this color advance in
    #[inline]
    #[must_use]
    pub const fn forward(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row on which men of this color are crowned (the opponent's home row)
    #[inline]
    #[must_use]
    pub const fn promotion_row(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A draughts piece tagged by color and kind.
///
/// Its position is the cell that holds it; the board is the only owner.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub color: Color,
    pub kind: Kind,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(color: Color, kind: Kind) -> Self {
        Piece { color, kind }
    }

    #[inline]
    #[must_use]
    pub const fn man(color: Color) -> Self {
        Piece::new(color, Kind::Man)
    }

    #[inline]
    #[must_use]
    pub const fn king(color: Color) -> Self {
        Piece::new(color, Kind::King)
    }

    #[inline]
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self.kind, Kind::King)
    }

    /// Signed material value (positive for White)
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.kind.value() * self.color.sign()
    }

    /// Directions a simple move may take.
    #[must_use]
    pub(crate) const fn move_directions(self) -> &'static [(isize, isize)] {
        match (self.kind, self.color) {
            (Kind::Man, Color::White) => &WHITE_MAN_STEPS,
            (Kind::Man, Color::Black) => &BLACK_MAN_STEPS,
            (Kind::King, _) => &DIAGONALS,
        }
    }

    /// Directions a capture may take; backward captures are legal for men.
    #[must_use]
    pub(crate) const fn capture_directions(self) -> &'static [(isize, isize)] {
        &DIAGONALS
    }

    /// Number of cells the piece may travel along a ray before and after a jump
    #[inline]
    #[must_use]
    pub(crate) const fn reach(self) -> usize {
        match self.kind {
            Kind::Man => 1,
            Kind::King => 7,
        }
    }

    /// Nibble code used by the packed row encoding
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        match (self.color, self.kind) {
            (Color::White, Kind::Man) => 0x2,
            (Color::White, Kind::King) => 0x3,
            (Color::Black, Kind::Man) => 0xA,
            (Color::Black, Kind::King) => 0xB,
        }
    }

    /// Parse a piece from its nibble code
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Piece> {
        match code {
            0x2 => Some(Piece::man(Color::White)),
            0x3 => Some(Piece::king(Color::White)),
            0xA => Some(Piece::man(Color::Black)),
            0xB => Some(Piece::king(Color::Black)),
            _ => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match (self.color, self.kind) {
            (Color::White, Kind::Man) => 'w',
            (Color::White, Kind::King) => 'W',
            (Color::Black, Kind::Man) => 'b',
            (Color::Black, Kind::King) => 'B',
        };
        write!(f, "{c}")
    }
}
