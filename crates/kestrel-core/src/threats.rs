//! Per-square attack classification for one attacking color.

use std::fmt;

use crate::color::Color;
use crate::movegen::{king, knights, pawns, sliders};
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::{File, Rank, Square};

/// How strongly a square is attacked.
///
/// Ordered so that `Direct > Discovered > None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Threat {
    #[default]
    None,
    /// Attacked only once an intervening piece moves away.
    Discovered,
    /// An attacking piece could capture on this square right now.
    Direct,
}

/// Threat classification of all 64 squares, as seen from one attacking color.
#[derive(Clone, PartialEq, Eq)]
pub struct ThreatMap {
    squares: [Threat; Square::COUNT],
}

/// Marks every square a piece of `attacker` on `from` threatens.
pub(crate) type ThreatFn = fn(&Position, Square, Color, &mut ThreatMap);

/// Threat generators indexed by [`PieceKind::index`].
const THREAT_FNS: [ThreatFn; PieceKind::COUNT] = [
    pawns::pawn_threats,
    knights::knight_threats,
    sliders::bishop_threats,
    sliders::rook_threats,
    sliders::queen_threats,
    king::king_threats,
];

impl ThreatMap {
    /// A map with no threats.
    pub fn empty() -> ThreatMap {
        ThreatMap {
            squares: [Threat::None; Square::COUNT],
        }
    }

    /// Compute the threats every piece of `attacker` exerts on `pos`.
    pub fn compute(pos: &Position, attacker: Color) -> ThreatMap {
        let mut map = ThreatMap::empty();
        for (sq, piece) in pos.pieces() {
            if piece.color() == attacker {
                THREAT_FNS[piece.kind().index()](pos, sq, attacker, &mut map);
            }
        }
        map
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Threat {
        self.squares[sq.index()]
    }

    #[inline]
    pub fn is_direct(&self, sq: Square) -> bool {
        self.get(sq) == Threat::Direct
    }

    /// Raise `sq` to `level`. A square never drops to a weaker level once a
    /// stronger attack on it is recorded.
    #[inline]
    pub(crate) fn mark(&mut self, sq: Square, level: Threat) {
        let slot = &mut self.squares[sq.index()];
        *slot = (*slot).max(level);
    }

    /// Number of squares at exactly `level`.
    pub fn count(&self, level: Threat) -> usize {
        self.squares.iter().filter(|&&t| t == level).count()
    }
}

impl fmt::Debug for ThreatMap {
    /// Grid with rank 8 on top: `X` direct, `o` discovered, `.` none.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ThreatMap")?;
        for rank in Rank::ALL.into_iter().rev() {
            for file in File::ALL {
                let c = match self.get(Square::new(rank, file)) {
                    Threat::Direct => 'X',
                    Threat::Discovered => 'o',
                    Threat::None => '.',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
