//! King steps, castling and threats.

use crate::castle_rights::{CastleSide, king_home};
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;
use crate::threats::{Threat, ThreatMap};

use super::{MoveList, ROYAL_STEPS, leaper_moves};

pub(crate) fn king_threats(_pos: &Position, from: Square, _attacker: Color, map: &mut ThreatMap) {
    for to in ROYAL_STEPS.iter().filter_map(|step| step.from(from)) {
        map.mark(to, Threat::Direct);
    }
}

/// One-square steps plus castling.
///
/// Castling is offered when the right is held, king and rook stand on
/// their home squares and every square between them is empty. Whether the
/// king starts in, crosses or lands on an attacked square is left to the
/// legal filter.
pub(super) fn king_moves(pos: &Position, from: Square, us: Color, list: &mut MoveList) {
    leaper_moves(pos, from, us, &ROYAL_STEPS, list);

    if from != king_home(us) {
        return;
    }
    let rook = Piece::new(PieceKind::Rook, us);
    for side in CastleSide::ALL {
        let (rook_from, _) = side.rook_squares(us);
        if pos.castling().has(us, side)
            && pos.piece_at(rook_from) == Some(rook)
            && side.between(us).all(|sq| pos.is_empty(sq))
        {
            list.push(Move::new(from, side.king_destination(us)));
        }
    }
}
