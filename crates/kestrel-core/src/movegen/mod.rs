//! Pseudo-legal and legal move generation.
//!
//! Each piece kind has its own module with one function that generates its
//! moves and one that marks the squares it threatens. Both are reached
//! through tables indexed by [`PieceKind`].

pub(crate) mod king;
pub(crate) mod knights;
pub(crate) mod pawns;
pub(crate) mod sliders;

use std::fmt;

use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;
use crate::threats::ThreatMap;

/// One step in a fixed direction: an index delta plus the largest file
/// change a single step in that direction can make without wrapping.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Step {
    delta: i8,
    max_file_step: u8,
}

impl Step {
    const fn new(delta: i8, max_file_step: u8) -> Step {
        Step { delta, max_file_step }
    }

    #[inline]
    pub(crate) fn from(self, sq: Square) -> Option<Square> {
        sq.shift(self.delta, self.max_file_step)
    }
}

pub(crate) const KNIGHT_STEPS: [Step; 8] = [
    Step::new(10, 2),
    Step::new(17, 2),
    Step::new(15, 2),
    Step::new(6, 2),
    Step::new(-10, 2),
    Step::new(-17, 2),
    Step::new(-15, 2),
    Step::new(-6, 2),
];

pub(crate) const BISHOP_STEPS: [Step; 4] = [
    Step::new(9, 1),
    Step::new(7, 1),
    Step::new(-9, 1),
    Step::new(-7, 1),
];

pub(crate) const ROOK_STEPS: [Step; 4] = [
    Step::new(1, 1),
    Step::new(8, 0),
    Step::new(-1, 1),
    Step::new(-8, 0),
];

/// Queen rays and king steps share the eight compass directions.
pub(crate) const ROYAL_STEPS: [Step; 8] = [
    Step::new(1, 1),
    Step::new(9, 1),
    Step::new(8, 0),
    Step::new(7, 1),
    Step::new(-1, 1),
    Step::new(-9, 1),
    Step::new(-8, 0),
    Step::new(-7, 1),
];

/// Owned, growable buffer of generated moves, in generation order.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MoveList(Vec<Move>);

impl MoveList {
    pub fn new() -> MoveList {
        MoveList(Vec::with_capacity(48))
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.0.push(mv);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.0.iter()
    }

    pub fn contains(&self, mv: Move) -> bool {
        self.0.contains(&mv)
    }

    /// Keep only the moves for which `keep` returns `true`, compacting the
    /// survivors to the front in their original order.
    pub fn retain(&mut self, keep: impl FnMut(&Move) -> bool) {
        self.0.retain(keep);
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> MoveList {
        MoveList(iter.into_iter().collect())
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter().map(ToString::to_string)).finish()
    }
}

/// Appends the pseudo-legal moves of the piece of `us` on `from`.
type MoveGenFn = fn(&Position, Square, Color, &mut MoveList);

/// Move generators indexed by [`PieceKind::index`].
const MOVE_FNS: [MoveGenFn; PieceKind::COUNT] = [
    pawns::pawn_moves,
    knights::knight_moves,
    sliders::bishop_moves,
    sliders::rook_moves,
    sliders::queen_moves,
    king::king_moves,
];

/// How thoroughly the legal filter verifies king safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KingSafety {
    /// Simulate every candidate only while the mover is in check. Outside
    /// of check only king destinations and castling paths are screened, so
    /// a pinned piece may still step off its pin line.
    #[default]
    WhenInCheck,
    /// Simulate every candidate and reject any that leaves the king attacked.
    Always,
}

/// Generate every geometrically possible move for `color`, ignoring
/// whether it leaves that side's king attacked.
pub fn generate_pseudo_moves(pos: &Position, color: Color) -> MoveList {
    let mut list = MoveList::new();
    for (sq, piece) in pos.pieces() {
        if piece.color() == color {
            MOVE_FNS[piece.kind().index()](pos, sq, color, &mut list);
        }
    }
    list
}

/// Generate the legal moves for `color` with the two-tier filter of
/// [`KingSafety::WhenInCheck`]. Use [`generate_legal_moves_with`] and
/// [`KingSafety::Always`] to also catch pinned pieces outside of check.
pub fn generate_legal_moves(pos: &Position, color: Color) -> MoveList {
    generate_legal_moves_with(pos, color, KingSafety::WhenInCheck)
}

/// Generate legal moves for `color` under the given king-safety policy.
///
/// King moves onto directly attacked squares are always dropped, as is
/// castling out of or through check. Remaining candidates are simulated
/// when `policy` asks for it or when `color` is currently in check.
pub fn generate_legal_moves_with(
    pos: &Position,
    color: Color,
    policy: KingSafety,
) -> MoveList {
    let enemy = ThreatMap::compute(pos, !color);
    let in_check = pos.king_square(color).is_some_and(|k| enemy.is_direct(k));
    let simulate = in_check || policy == KingSafety::Always;

    let mut moves = generate_pseudo_moves(pos, color);
    moves.retain(|&mv| {
        let (src, dst) = (mv.source(), mv.dest());
        let is_king = pos.piece_at(src).is_some_and(|p| p.kind() == PieceKind::King);
        if is_king {
            if enemy.is_direct(dst) {
                return false;
            }
            if src.file().distance(dst.file()) == 2 {
                let transit = CastleSide::of_king_step(src, dst).transit_square(color);
                if enemy.is_direct(src) || enemy.is_direct(transit) {
                    return false;
                }
            }
        }
        !simulate || !leaves_king_attacked(pos, mv, color)
    });
    moves
}

/// Play `mv` for `color` on a scratch copy and report whether `color`'s
/// king ends up directly attacked.
pub(crate) fn leaves_king_attacked(pos: &Position, mv: Move, color: Color) -> bool {
    let mut base = *pos;
    base.set_side_to_move(color);
    let next = base.apply_move(mv);
    next.king_square(color)
        .is_some_and(|k| ThreatMap::compute(&next, !color).is_direct(k))
}

/// Shared generator for pieces that jump to a fixed set of squares.
pub(crate) fn leaper_moves(
    pos: &Position,
    from: Square,
    us: Color,
    steps: &[Step],
    list: &mut MoveList,
) {
    for step in steps {
        if let Some(to) = step.from(from)
            && pos.color_at(to) != Some(us)
        {
            list.push(Move::new(from, to));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{KingSafety, generate_legal_moves, generate_legal_moves_with, generate_pseudo_moves};
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::position::Position;
    use crate::square::Square;

    fn pos(fen: &str) -> Position {
        fen.parse().unwrap()
    }

    fn mv(uci: &str) -> Move {
        Move::from_uci(uci).unwrap()
    }

    #[test]
    fn starting_position_20_moves() {
        let start = Position::starting_position();
        assert_eq!(generate_legal_moves(&start, Color::White).len(), 20);
        assert_eq!(generate_legal_moves(&start, Color::Black).len(), 20);
    }

    #[test]
    fn moves_come_out_in_square_order() {
        let moves = generate_legal_moves(&Position::starting_position(), Color::White);
        // b1 knight first, in step-table order, then the g1 knight
        assert_eq!(moves[0], mv("b1c3"));
        assert_eq!(moves[1], mv("b1a3"));
        assert_eq!(moves[2], mv("g1h3"));
        assert_eq!(moves[3], mv("g1f3"));
        assert_eq!(moves[4], mv("a2a3"));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let p = pos("4k3/8/8/8/8/8/r7/4K3 w - - 0 1");
        let moves = generate_legal_moves(&p, Color::White);
        assert!(!moves.contains(mv("e1e2")));
        assert!(moves.contains(mv("e1f1")));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn check_must_be_answered() {
        // rook e8 gives check: the bishop interposes on e3 or the king walks
        let p = pos("4r1k1/8/8/8/8/8/3B4/4K3 w - - 0 1");
        let moves = generate_legal_moves(&p, Color::White);
        for m in &moves {
            let after = p.apply_move(*m);
            assert!(!after.is_in_check(Color::White), "{m} leaves the king in check");
        }
        assert!(moves.contains(mv("d2e3")));
        assert!(!moves.contains(mv("d2c3")));
        assert!(!moves.contains(mv("e1e2")));
    }

    #[test]
    fn pinned_knight_has_no_moves_under_strict_policy() {
        let p = pos("4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1");
        let moves = generate_legal_moves_with(&p, Color::White, KingSafety::Always);
        assert!(moves.iter().all(|m| m.source() != Square::E2));
    }

    #[test]
    fn pinned_piece_slips_through_when_not_in_check() {
        // the knight is pinned but the king is not in check, so the cheap
        // filter lets it move
        let p = pos("4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1");
        let lax = generate_legal_moves_with(&p, Color::White, KingSafety::WhenInCheck);
        assert!(lax.contains(mv("e2c3")));
        let strict = generate_legal_moves_with(&p, Color::White, KingSafety::Always);
        assert!(!strict.contains(mv("e2c3")));
    }

    #[test]
    fn in_check_both_policies_agree() {
        let p = pos("4r1k1/8/8/8/8/5n2/8/4K3 w - - 0 1");
        let lax = generate_legal_moves_with(&p, Color::White, KingSafety::WhenInCheck);
        let strict = generate_legal_moves_with(&p, Color::White, KingSafety::Always);
        assert_eq!(lax, strict);
        // double check: only the king moves
        assert!(strict.iter().all(|m| m.source() == Square::E1));
    }

    #[test]
    fn default_filter_screens_only_king_moves_outside_check() {
        // the bishop on e2 is pinned by the rook on e8, yet with the king
        // out of check all of its moves survive the two-tier filter
        let p = pos("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1");
        let moves = generate_legal_moves(&p, Color::White);
        assert_eq!(moves, generate_legal_moves_with(&p, Color::White, KingSafety::WhenInCheck));
        assert_eq!(moves.iter().filter(|m| m.source() == Square::E2).count(), 9);
        assert_eq!(moves.len(), 13);

        let strict = generate_legal_moves_with(&p, Color::White, KingSafety::Always);
        assert!(strict.iter().all(|m| m.source() == Square::E1));
        assert_eq!(strict.len(), 4);
        assert_eq!(KingSafety::default(), KingSafety::WhenInCheck);
    }

    #[test]
    fn iter_borrows_in_generation_order() {
        let moves = generate_legal_moves(&Position::starting_position(), Color::White);
        let via_iter: Vec<Move> = moves.iter().copied().collect();
        assert_eq!(via_iter.len(), 20);
        assert_eq!(via_iter[0], moves[0]);
        assert_eq!(via_iter[19], moves[19]);
    }

    #[test]
    fn castling_both_sides_when_clear() {
        let p = pos("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let moves = generate_legal_moves(&p, Color::White);
        assert!(moves.contains(mv("e1g1")));
        assert!(moves.contains(mv("e1c1")));
        let moves = generate_legal_moves(&p, Color::Black);
        assert!(moves.contains(mv("e8g8")));
        assert!(moves.contains(mv("e8c8")));
    }

    #[test]
    fn castling_needs_rights_and_empty_path() {
        let p = pos("r3k2r/8/8/8/8/8/8/RN2K2R w Kkq - 0 1");
        let moves = generate_pseudo_moves(&p, Color::White);
        assert!(moves.contains(mv("e1g1")));
        assert!(!moves.contains(mv("e1c1")));
    }

    #[test]
    fn castling_rejected_out_of_check() {
        let p = pos("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        let moves = generate_legal_moves(&p, Color::White);
        assert!(!moves.contains(mv("e1g1")));
        assert!(!moves.contains(mv("e1c1")));
    }

    #[test]
    fn castling_rejected_through_check() {
        // bishop a6 covers f1
        let p = pos("4k3/8/b7/8/8/8/8/R3K2R w KQ - 0 1");
        let moves = generate_legal_moves(&p, Color::White);
        assert!(!moves.contains(mv("e1g1")));
        assert!(moves.contains(mv("e1c1")));
        // the cheap screen alone already catches it
        let lax = generate_legal_moves_with(&p, Color::White, KingSafety::WhenInCheck);
        assert!(!lax.contains(mv("e1g1")));
    }

    #[test]
    fn castling_rejected_into_check() {
        // rook g8 covers g1
        let p = pos("4k1r1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        let moves = generate_legal_moves(&p, Color::White);
        assert!(!moves.contains(mv("e1g1")));
        assert!(moves.contains(mv("e1c1")));
    }

    #[test]
    fn queenside_b_file_attack_does_not_block() {
        // b1 is attacked but the king never crosses it
        let p = pos("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        let moves = generate_legal_moves(&p, Color::White);
        assert!(moves.contains(mv("e1c1")));
    }

    #[test]
    fn en_passant_capture_generated() {
        let p = pos("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        let moves = generate_legal_moves(&p, Color::White);
        assert!(moves.contains(mv("e5d6")));
    }

    #[test]
    fn en_passant_exposing_king_is_illegal() {
        let p = pos("4k3/8/8/KPp4r/8/8/8/8 w - c6 0 1");
        let moves = generate_legal_moves_with(&p, Color::White, KingSafety::Always);
        assert!(!moves.contains(mv("b5c6")));
    }

    #[test]
    fn promotion_is_a_single_move() {
        let p = pos("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let moves = generate_legal_moves(&p, Color::White);
        assert_eq!(moves.iter().filter(|m| m.source() == Square::A7).count(), 1);
    }

    #[test]
    fn no_moves_when_mated() {
        let p = pos("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        assert!(generate_legal_moves(&p, Color::White).is_empty());
    }
}
