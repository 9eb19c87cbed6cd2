//! Move ordering by forcing class: check and capture, check, capture, quiet.

use kestrel_core::{Move, MoveList, Position, ThreatMap, describe_move};

use crate::eval::material::piece_value;

/// Score bands. A capture weighs twice the victim's value, so every capture
/// short of a king stays below a quiet check.
pub const QUIET: i32 = 1;
pub const CHECK: i32 = 2_000;

/// Does playing `mv` leave the opponent's king on a directly attacked square?
pub fn gives_check(pos: &Position, mv: Move) -> bool {
    let us = pos.side_to_move();
    let next = pos.apply_move(mv);
    next.king_square(!us)
        .is_some_and(|king| ThreatMap::compute(&next, us).is_direct(king))
}

/// Priority of `mv` in `pos`. Higher scores are searched first.
///
/// - Check and capture: `CHECK + victim value`
/// - Check only: `CHECK`
/// - Capture only: `2 * victim value`
/// - Quiet: `QUIET`
///
/// En passant counts as capturing a pawn.
pub fn score_move(pos: &Position, mv: Move) -> i32 {
    let victim = describe_move(pos, mv)
        .and_then(|desc| desc.captured)
        .map(|piece| piece_value(piece.kind()));

    match (gives_check(pos, mv), victim) {
        (true, Some(value)) => CHECK + value,
        (true, None) => CHECK,
        (false, Some(value)) => 2 * value,
        (false, None) => QUIET,
    }
}

/// Sort `moves` by descending [`score_move`]. Equal scores keep generation order.
pub fn order_moves(pos: &Position, moves: MoveList) -> MoveList {
    let mut scored: Vec<(i32, Move)> = moves
        .into_iter()
        .map(|mv| (score_move(pos, mv), mv))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, mv)| mv).collect()
}
