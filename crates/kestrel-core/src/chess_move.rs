//! Chess move representation: an ordered (source, destination) pair.

use std::fmt;

use crate::error::MoveParseError;
use crate::square::Square;

/// A move from one square to another.
///
/// Promotion and special-move kind are not stored. Pawns reaching the last
/// rank always become queens, and castling, en passant and captures are
/// recognized from the position the move is applied to.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    source: Square,
    dest: Square,
}

impl Move {
    #[inline]
    pub const fn new(source: Square, dest: Square) -> Move {
        Move { source, dest }
    }

    #[inline]
    pub const fn source(self) -> Square {
        self.source
    }

    #[inline]
    pub const fn dest(self) -> Square {
        self.dest
    }

    /// Parse coordinate notation such as `e2e4`. A trailing `q` is accepted
    /// for promotions; other promotion letters are rejected since they
    /// cannot be expressed.
    pub fn from_uci(s: &str) -> Result<Move, MoveParseError> {
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(MoveParseError::BadLength(s.to_string()));
        }
        let (from, rest) = s.split_at(2);
        let (to, promo) = rest.split_at(2);

        let (Some(source), Some(dest)) = (Square::from_algebraic(from), Square::from_algebraic(to))
        else {
            return Err(MoveParseError::BadSquare(s.to_string()));
        };
        if !promo.is_empty() && promo != "q" {
            return Err(MoveParseError::BadPromotion(s.to_string()));
        }
        Ok(Move::new(source, dest))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}
