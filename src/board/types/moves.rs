//! Move types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// A single jump: the landing cell and the cell of the piece it removes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Capture {
    pub to: Square,
    pub captured: Square,
}

/// One full turn: a simple step or a complete capture chain.
///
/// `path` lists every landing cell in order; for a capture chain `captured`
/// lists the removed pieces in the same order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    path: Vec<Square>,
    captured: Vec<Square>,
}

impl Move {
    /// Create a simple (non-capturing) move
    #[must_use]
    pub fn simple(from: Square, to: Square) -> Self {
        Move {
            from,
            path: vec![to],
            captured: Vec::new(),
        }
    }

    /// Start an empty capture chain at `from`
    #[must_use]
    pub(crate) fn chain(from: Square) -> Self {
        Move {
            from,
            path: Vec::new(),
            captured: Vec::new(),
        }
    }

    /// The chain extended by one more jump
    #[must_use]
    pub(crate) fn then(&self, capture: Capture) -> Self {
        let mut next = self.clone();
        next.path.push(capture.to);
        next.captured.push(capture.captured);
        next
    }

    #[inline]
    #[must_use]
    pub fn from(&self) -> Square {
        self.from
    }

    /// Final landing cell
    #[inline]
    #[must_use]
    pub fn to(&self) -> Square {
        self.path.last().copied().unwrap_or(self.from)
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &[Square] {
        &self.path
    }

    #[inline]
    #[must_use]
    pub fn captured(&self) -> &[Square] {
        &self.captured
    }

    #[inline]
    #[must_use]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.from)?;
        let sep = if self.is_capture() { 'x' } else { '-' };
        for sq in &self.path {
            write!(f, "{sep}{sq}")?;
        }
        Ok(())
    }
}
