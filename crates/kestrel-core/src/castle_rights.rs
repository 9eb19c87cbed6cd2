//! Castling rights and the fixed board geometry of castling moves.

use std::fmt;

use crate::color::Color;
use crate::error::FenError;
use crate::square::{File, Rank, Square};

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Classify a two-file king step by its direction.
    #[inline]
    pub fn of_king_step(from: Square, to: Square) -> CastleSide {
        if to.file() > from.file() {
            CastleSide::KingSide
        } else {
            CastleSide::QueenSide
        }
    }

    /// Square the king lands on.
    #[inline]
    pub const fn king_destination(self, color: Color) -> Square {
        match self {
            CastleSide::KingSide => Square::new(home_rank(color), File::FileG),
            CastleSide::QueenSide => Square::new(home_rank(color), File::FileC),
        }
    }

    /// Rook origin and destination squares.
    #[inline]
    pub const fn rook_squares(self, color: Color) -> (Square, Square) {
        let rank = home_rank(color);
        match self {
            CastleSide::KingSide => (
                Square::new(rank, File::FileH),
                Square::new(rank, File::FileF),
            ),
            CastleSide::QueenSide => (
                Square::new(rank, File::FileA),
                Square::new(rank, File::FileD),
            ),
        }
    }

    /// Square the king crosses on its way to the destination.
    #[inline]
    pub const fn transit_square(self, color: Color) -> Square {
        self.rook_squares(color).1
    }

    /// Squares strictly between king and rook, all of which must be empty.
    pub fn between(self, color: Color) -> impl Iterator<Item = Square> {
        let rank = home_rank(color);
        let files = match self {
            CastleSide::KingSide => 5..7,
            CastleSide::QueenSide => 1..4,
        };
        files.map(move |f| Square::new(rank, File::ALL[f]))
    }
}

/// Home square of the king of `color`.
#[inline]
pub const fn king_home(color: Color) -> Square {
    Square::new(home_rank(color), File::FileE)
}

#[inline]
const fn home_rank(color: Color) -> Rank {
    match color {
        Color::White => Rank::Rank1,
        Color::Black => Rank::Rank8,
    }
}

/// Castling rights encoded as a 4-bit field: bit 0 = WK, 1 = WQ, 2 = BK, 3 = BQ.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    pub const NONE: CastleRights = CastleRights(0);
    pub const ALL: CastleRights = CastleRights(0b1111);

    pub const WHITE_KING: CastleRights = CastleRights(0b0001);
    pub const WHITE_QUEEN: CastleRights = CastleRights(0b0010);
    pub const BLACK_KING: CastleRights = CastleRights(0b0100);
    pub const BLACK_QUEEN: CastleRights = CastleRights(0b1000);

    pub const WHITE_BOTH: CastleRights = CastleRights(0b0011);
    pub const BLACK_BOTH: CastleRights = CastleRights(0b1100);

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: CastleRights) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn insert(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 | other.0)
    }

    #[inline]
    pub const fn remove(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    /// Check whether a specific color and side may still castle.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.contains(Self::flag(color, side))
    }

    #[inline]
    const fn flag(color: Color, side: CastleSide) -> CastleRights {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => Self::WHITE_KING,
            (Color::White, CastleSide::QueenSide) => Self::WHITE_QUEEN,
            (Color::Black, CastleSide::KingSide) => Self::BLACK_KING,
            (Color::Black, CastleSide::QueenSide) => Self::BLACK_QUEEN,
        }
    }

    /// Clear every right tied to `sq`: a king home square drops both rights
    /// of that color, a rook corner drops the matching side.
    ///
    /// Applied to both the origin and the destination of every move, so a
    /// king or rook leaving home and a rook captured in its corner are both
    /// covered.
    #[inline]
    pub const fn revoke(self, sq: Square) -> CastleRights {
        self.remove(REVOKE[sq.index()])
    }

    /// Parse the FEN castling field (e.g. "KQkq", "Kq", "-").
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }
        if s.is_empty() {
            return Err(FenError::InvalidCastling {
                found: s.to_string(),
            });
        }

        s.chars().try_fold(CastleRights::NONE, |rights, c| {
            let flag = match c {
                'K' => Self::WHITE_KING,
                'Q' => Self::WHITE_QUEEN,
                'k' => Self::BLACK_KING,
                'q' => Self::BLACK_QUEEN,
                _ => {
                    return Err(FenError::InvalidCastling {
                        found: s.to_string(),
                    });
                }
            };
            Ok(rights.insert(flag))
        })
    }
}

/// Rights lost when a move touches a square, indexed by square.
const REVOKE: [CastleRights; 64] = {
    let mut table = [CastleRights::NONE; 64];
    table[Square::E1.index()] = CastleRights::WHITE_BOTH;
    table[Square::A1.index()] = CastleRights::WHITE_QUEEN;
    table[Square::H1.index()] = CastleRights::WHITE_KING;
    table[Square::E8.index()] = CastleRights::BLACK_BOTH;
    table[Square::A8.index()] = CastleRights::BLACK_QUEEN;
    table[Square::H8.index()] = CastleRights::BLACK_KING;
    table
};

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        let letters = [
            (Self::WHITE_KING, 'K'),
            (Self::WHITE_QUEEN, 'Q'),
            (Self::BLACK_KING, 'k'),
            (Self::BLACK_QUEEN, 'q'),
        ];
        for (flag, c) in letters {
            if self.contains(flag) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::{CastleRights, CastleSide, king_home};
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn fen_field_roundtrip() {
        for fen in ["KQkq", "Kq", "k", "-", "KQ", "kq"] {
            let rights = CastleRights::from_fen(fen).unwrap();
            assert_eq!(rights.to_string(), fen);
        }
        assert_eq!(CastleRights::from_fen("qK").unwrap().to_string(), "Kq");
    }

    #[test]
    fn fen_field_invalid() {
        assert!(CastleRights::from_fen("KQxq").is_err());
        assert!(CastleRights::from_fen("1").is_err());
        assert!(CastleRights::from_fen("").is_err());
    }

    #[test]
    fn has_color_side() {
        let rights = CastleRights::from_fen("Kq").unwrap();
        assert!(rights.has(Color::White, CastleSide::KingSide));
        assert!(!rights.has(Color::White, CastleSide::QueenSide));
        assert!(!rights.has(Color::Black, CastleSide::KingSide));
        assert!(rights.has(Color::Black, CastleSide::QueenSide));
    }

    #[test]
    fn revoke_by_square() {
        assert_eq!(CastleRights::ALL.revoke(Square::E1), CastleRights::BLACK_BOTH);
        assert_eq!(
            CastleRights::ALL.revoke(Square::H8),
            CastleRights::ALL.remove(CastleRights::BLACK_KING)
        );
        assert_eq!(CastleRights::ALL.revoke(Square::A1).to_string(), "Kkq");
        assert_eq!(CastleRights::ALL.revoke(Square::D4), CastleRights::ALL);
    }

    #[test]
    fn castling_geometry() {
        assert_eq!(king_home(Color::White), Square::E1);
        assert_eq!(king_home(Color::Black), Square::E8);
        assert_eq!(CastleSide::KingSide.king_destination(Color::White), Square::G1);
        assert_eq!(CastleSide::QueenSide.king_destination(Color::Black), Square::C8);
        assert_eq!(
            CastleSide::QueenSide.rook_squares(Color::White),
            (Square::A1, Square::D1)
        );
        assert_eq!(CastleSide::KingSide.transit_square(Color::Black), Square::F8);
        let between: Vec<_> = CastleSide::QueenSide.between(Color::White).collect();
        assert_eq!(between, [Square::B1, Square::C1, Square::D1]);
        let between: Vec<_> = CastleSide::KingSide.between(Color::Black).collect();
        assert_eq!(between, [Square::F8, Square::G8]);
    }

    #[test]
    fn side_of_king_step() {
        assert_eq!(CastleSide::of_king_step(Square::E1, Square::G1), CastleSide::KingSide);
        assert_eq!(CastleSide::of_king_step(Square::E8, Square::C8), CastleSide::QueenSide);
    }
}
