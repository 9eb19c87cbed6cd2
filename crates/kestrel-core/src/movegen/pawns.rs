//! Pawn pushes, captures and threats.

use crate::chess_move::Move;
use crate::color::Color;
use crate::position::Position;
use crate::square::Square;
use crate::threats::{Threat, ThreatMap};

use super::MoveList;

/// The two forward-diagonal squares a pawn of `us` on `from` covers.
#[inline]
fn capture_squares(from: Square, us: Color) -> impl Iterator<Item = Square> {
    let forward = us.forward();
    [forward - 1, forward + 1]
        .into_iter()
        .filter_map(move |delta| from.shift(delta, 1))
}

/// Mark both forward diagonals, whether or not anything stands there.
pub(crate) fn pawn_threats(_pos: &Position, from: Square, attacker: Color, map: &mut ThreatMap) {
    for to in capture_squares(from, attacker) {
        map.mark(to, Threat::Direct);
    }
}

/// Single and double pushes onto empty squares, diagonal captures of enemy
/// pieces, and en passant onto the current target.
pub(super) fn pawn_moves(pos: &Position, from: Square, us: Color, list: &mut MoveList) {
    let forward = us.forward();

    if let Some(one) = from.shift(forward, 0)
        && pos.is_empty(one)
    {
        list.push(Move::new(from, one));
        if from.rank() == us.pawn_rank()
            && let Some(two) = one.shift(forward, 0)
            && pos.is_empty(two)
        {
            list.push(Move::new(from, two));
        }
    }

    // the target only counts on the rank a pawn of ours could capture onto
    let en_passant = pos
        .en_passant()
        .filter(|ep| ep.rank() == us.en_passant_rank());

    for to in capture_squares(from, us) {
        let is_enemy = pos.color_at(to) == Some(!us);
        if is_enemy || en_passant == Some(to) {
            list.push(Move::new(from, to));
        }
    }
}
