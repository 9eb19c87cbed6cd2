//! Bishop, rook and queen rays.

use crate::chess_move::Move;
use crate::color::Color;
use crate::position::Position;
use crate::square::Square;
use crate::threats::{Threat, ThreatMap};

use super::{BISHOP_STEPS, MoveList, ROOK_STEPS, ROYAL_STEPS, Step};

/// Walk each ray from `from`, classifying the squares it reaches.
///
/// A ray starts at [`Threat::Direct`]. Empty squares take the current
/// level. A friendly piece is defended only while the ray is still direct,
/// and ends the ray. The first enemy piece is marked and the ray continues
/// behind it as [`Threat::Discovered`]; a second enemy piece is marked at
/// that level and ends the ray.
fn slide_threats(
    pos: &Position,
    from: Square,
    attacker: Color,
    steps: &[Step],
    map: &mut ThreatMap,
) {
    for step in steps {
        let mut level = Threat::Direct;
        let mut sq = from;
        while let Some(next) = step.from(sq) {
            sq = next;
            match pos.color_at(sq) {
                None => map.mark(sq, level),
                Some(color) if color == attacker => {
                    if level == Threat::Direct {
                        map.mark(sq, Threat::Direct);
                    }
                    break;
                }
                Some(_) => {
                    map.mark(sq, level);
                    if level == Threat::Discovered {
                        break;
                    }
                    level = Threat::Discovered;
                }
            }
        }
    }
}

/// Walk each ray until blocked: a capture ends the ray after the enemy
/// square, a friendly piece ends it before its square.
fn slide_moves(pos: &Position, from: Square, us: Color, steps: &[Step], list: &mut MoveList) {
    for step in steps {
        let mut sq = from;
        while let Some(next) = step.from(sq) {
            sq = next;
            match pos.color_at(sq) {
                None => list.push(Move::new(from, sq)),
                Some(color) if color == us => break,
                Some(_) => {
                    list.push(Move::new(from, sq));
                    break;
                }
            }
        }
    }
}

pub(crate) fn bishop_threats(pos: &Position, from: Square, attacker: Color, map: &mut ThreatMap) {
    slide_threats(pos, from, attacker, &BISHOP_STEPS, map);
}

pub(crate) fn rook_threats(pos: &Position, from: Square, attacker: Color, map: &mut ThreatMap) {
    slide_threats(pos, from, attacker, &ROOK_STEPS, map);
}

pub(crate) fn queen_threats(pos: &Position, from: Square, attacker: Color, map: &mut ThreatMap) {
    slide_threats(pos, from, attacker, &ROYAL_STEPS, map);
}

pub(super) fn bishop_moves(pos: &Position, from: Square, us: Color, list: &mut MoveList) {
    slide_moves(pos, from, us, &BISHOP_STEPS, list);
}

pub(super) fn rook_moves(pos: &Position, from: Square, us: Color, list: &mut MoveList) {
    slide_moves(pos, from, us, &ROOK_STEPS, list);
}

pub(super) fn queen_moves(pos: &Position, from: Square, us: Color, list: &mut MoveList) {
    slide_moves(pos, from, us, &ROYAL_STEPS, list);
}
