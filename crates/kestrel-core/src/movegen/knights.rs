//! Knight moves and threats.

use crate::color::Color;
use crate::position::Position;
use crate::square::Square;
use crate::threats::{Threat, ThreatMap};

use super::{KNIGHT_STEPS, MoveList, leaper_moves};

pub(crate) fn knight_threats(_pos: &Position, from: Square, _attacker: Color, map: &mut ThreatMap) {
    for to in KNIGHT_STEPS.iter().filter_map(|step| step.from(from)) {
        map.mark(to, Threat::Direct);
    }
}

/// Jumps to every on-board square not held by a friendly piece.
pub(super) fn knight_moves(pos: &Position, from: Square, us: Color, list: &mut MoveList) {
    leaper_moves(pos, from, us, &KNIGHT_STEPS, list);
}

#[cfg(test)]
mod tests {
    use super::{knight_moves, knight_threats};
    use crate::color::Color;
    use crate::movegen::MoveList;
    use crate::position::Position;
    use crate::square::Square;
    use crate::threats::{Threat, ThreatMap};

    #[test]
    fn center_knight_has_eight_targets() {
        let pos: Position = "4k3/8/8/8/3N4/8/8/4K3 w - - 0 1".parse().unwrap();
        let mut list = MoveList::new();
        knight_moves(&pos, Square::D4, Color::White, &mut list);
        assert_eq!(list.len(), 8);
    }

    #[test]
    fn edge_knight_skips_wrapped_and_friendly_squares() {
        let pos: Position = "4k3/8/8/8/8/8/2P5/N3K3 w - - 0 1".parse().unwrap();
        let mut list = MoveList::new();
        knight_moves(&pos, Square::A1, Color::White, &mut list);
        let targets: Vec<_> = list.into_iter().map(|m| m.dest()).collect();
        assert_eq!(targets, [Square::B3]);
    }

    #[test]
    fn threats_cover_friendly_squares() {
        let pos: Position = "4k3/8/8/8/8/8/2P5/N3K3 w - - 0 1".parse().unwrap();
        let mut map = ThreatMap::empty();
        knight_threats(&pos, Square::A1, Color::White, &mut map);
        assert_eq!(map.get(Square::C2), Threat::Direct);
        assert_eq!(map.get(Square::B3), Threat::Direct);
        assert_eq!(map.count(Threat::Direct), 2);
    }
}
