//! Search constants.
//!
//! The terminal sentinels must dominate any material balance (at most
//! 12 kings, 19.2) and stay strictly inside the initial window.

/// Score of a position where Black, to move, has no legal continuation
pub const WHITE_WINS: f64 = 1000.0;

/// Score of a position where White, to move, has no legal continuation
pub const BLACK_WINS: f64 = -1000.0;

/// Initial alpha of a full-window search
pub const MIN_BOUND: f64 = -999_999.0;

/// Initial beta of a full-window search
pub const MAX_BOUND: f64 = 999_999.0;
