//! Check detection and game-over classification.

use std::fmt;

use crate::color::Color;
use crate::movegen::generate_legal_moves;
use crate::position::Position;
use crate::threats::ThreatMap;

/// Where the game stands for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    /// A hundred plies without a pawn move or capture.
    FiftyMoveDraw,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => f.write_str("ongoing"),
            GameStatus::Checkmate { winner: Color::White } => f.write_str("checkmate, white wins"),
            GameStatus::Checkmate { winner: Color::Black } => f.write_str("checkmate, black wins"),
            GameStatus::Stalemate => f.write_str("stalemate"),
            GameStatus::FiftyMoveDraw => f.write_str("draw by fifty-move rule"),
        }
    }
}

/// Plies without progress after which the game is drawn.
pub const FIFTY_MOVE_PLIES: u16 = 100;

impl Position {
    /// `true` if `color`'s king stands on a directly attacked square.
    /// A side without a king is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|k| ThreatMap::compute(self, !color).is_direct(k))
    }

    /// Classify the position for the side to move. Having no legal move
    /// takes precedence over the fifty-move rule.
    pub fn status(&self) -> GameStatus {
        let us = self.side_to_move();
        if generate_legal_moves(self, us).is_empty() {
            if self.is_in_check(us) {
                GameStatus::Checkmate { winner: !us }
            } else {
                GameStatus::Stalemate
            }
        } else if self.halfmove_clock() >= FIFTY_MOVE_PLIES {
            GameStatus::FiftyMoveDraw
        } else {
            GameStatus::Ongoing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GameStatus;
    use crate::color::Color;
    use crate::position::Position;

    fn pos(fen: &str) -> Position {
        fen.parse().unwrap()
    }

    #[test]
    fn fools_mate() {
        let p = pos("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        assert!(p.is_in_check(Color::White));
        assert_eq!(p.status(), GameStatus::Checkmate { winner: Color::Black });
        assert!(p.status().is_over());
    }

    #[test]
    fn back_rank_mate_for_white() {
        let p = pos("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert_eq!(p.status(), GameStatus::Checkmate { winner: Color::White });
    }

    #[test]
    fn stalemate() {
        let p = pos("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(!p.is_in_check(Color::Black));
        assert_eq!(p.status(), GameStatus::Stalemate);
    }

    #[test]
    fn fifty_move_draw() {
        let p = pos("4k3/8/8/8/8/8/8/QQQ1K3 w - - 100 80");
        assert_eq!(p.status(), GameStatus::FiftyMoveDraw);
        let p = pos("4k3/8/8/8/8/8/8/QQQ1K3 w - - 99 80");
        assert_eq!(p.status(), GameStatus::Ongoing);
    }

    #[test]
    fn kingless_side_is_never_in_check() {
        let p = pos("8/8/8/8/8/8/8/r7 w - - 0 1");
        assert!(!p.is_in_check(Color::White));
        assert_eq!(p.status(), GameStatus::Stalemate);
    }

    #[test]
    fn display() {
        let mate = GameStatus::Checkmate { winner: Color::Black };
        assert_eq!(mate.to_string(), "checkmate, black wins");
        assert_eq!(GameStatus::FiftyMoveDraw.to_string(), "draw by fifty-move rule");
        assert_eq!(GameStatus::Stalemate.to_string(), "stalemate");
    }

    #[test]
    fn starting_position_is_ongoing() {
        assert_eq!(Position::starting_position().status(), GameStatus::Ongoing);
    }
}
