//! Classification of a move against the position it is played from, for
//! consumers that have to carry the move out physically.

use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// What happens on the board when a move is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    Capture,
    Castle,
    EnPassant,
}

/// A move together with everything needed to execute it by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDescription {
    pub mv: Move,
    pub kind: MoveKind,
    /// The moving pawn reaches the last rank and becomes a queen.
    pub promotion: bool,
    pub moved: Piece,
    /// The piece removed from the board, which for en passant is the pawn
    /// behind the destination square.
    pub captured: Option<Piece>,
}

/// Tall/short category of the moving and captured pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Heights {
    pub moved_tall: bool,
    /// `false` when nothing is captured.
    pub captured_tall: bool,
}

impl MoveDescription {
    /// Sort the moving and captured pieces with a caller-defined predicate.
    pub fn heights(&self, is_tall: impl Fn(PieceKind) -> bool) -> Heights {
        Heights {
            moved_tall: is_tall(self.moved.kind()),
            captured_tall: self.captured.is_some_and(|p| is_tall(p.kind())),
        }
    }
}

/// Describe `mv` as played from `pos`, or `None` if its source square is
/// empty.
pub fn describe_move(pos: &Position, mv: Move) -> Option<MoveDescription> {
    let (src, dst) = (mv.source(), mv.dest());
    let moved = pos.piece_at(src)?;
    let target = pos.piece_at(dst);

    let (kind, captured) = match moved.kind() {
        PieceKind::Pawn
            if target.is_none() && src.file() != dst.file() && pos.en_passant() == Some(dst) =>
        {
            let victim = dst
                .shift(-moved.color().forward(), 0)
                .and_then(|sq| pos.piece_at(sq));
            (MoveKind::EnPassant, victim)
        }
        PieceKind::King if src.file().distance(dst.file()) == 2 => (MoveKind::Castle, None),
        _ if target.is_some() => (MoveKind::Capture, target),
        _ => (MoveKind::Normal, None),
    };

    Some(MoveDescription {
        mv,
        kind,
        promotion: moved.kind() == PieceKind::Pawn && dst.rank().is_back_rank(),
        moved,
        captured,
    })
}
