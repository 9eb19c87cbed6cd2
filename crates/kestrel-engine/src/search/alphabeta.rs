//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Scores are always from White's perspective: White maximizes, Black
//! minimizes.

use kestrel_core::{
    Color, FIFTY_MOVE_PLIES, KingSafety, Move, Position, generate_legal_moves_with,
};

use crate::evaluate;
use crate::search::ordering::order_moves;

/// Base score for checkmate, positive when White delivers it.
pub const MATE_SCORE: f64 = 10_000.0;

/// Per-ply penalty subtracted from a mate score so faster mates rank higher.
const MATE_CLOCK_PENALTY: f64 = 0.05;

/// Score of a position whose side to move has no legal moves.
///
/// Checkmate scores `±MATE_SCORE` shrunk toward zero by the half-move
/// clock. Stalemate scores 0.
pub fn terminal_score(pos: &Position) -> f64 {
    let us = pos.side_to_move();
    if !pos.is_in_check(us) {
        return 0.0;
    }
    let sign = match us {
        Color::White => -1.0,
        Color::Black => 1.0,
    };
    sign * MATE_SCORE - sign * MATE_CLOCK_PENALTY * f64::from(pos.halfmove_clock())
}

pub(super) struct SearchContext {
    pub nodes: u64,
    pub king_safety: KingSafety,
    /// Depth of the root call; only that call records a best move.
    pub root_depth: u8,
}

pub(super) fn search(
    pos: &Position,
    depth: u8,
    mut alpha: f64,
    mut beta: f64,
    maximizing: bool,
    ctx: &mut SearchContext,
) -> (f64, Option<Move>) {
    ctx.nodes += 1;

    let moves = generate_legal_moves_with(pos, pos.side_to_move(), ctx.king_safety);
    if moves.is_empty() {
        return (terminal_score(pos), None);
    }
    if depth == 0 {
        return (evaluate(pos), None);
    }
    if pos.halfmove_clock() >= FIFTY_MOVE_PLIES {
        return (0.0, None);
    }

    let is_root = depth == ctx.root_depth;
    let mut best_move = None;

    if maximizing {
        let mut value = f64::NEG_INFINITY;
        for mv in order_moves(pos, moves) {
            let (score, _) = search(&pos.apply_move(mv), depth - 1, alpha, beta, false, ctx);
            if score > value {
                value = score;
                if is_root {
                    best_move = Some(mv);
                }
            }
            if value > beta {
                break;
            }
            alpha = alpha.max(value);
        }
        (value, best_move)
    } else {
        let mut value = f64::INFINITY;
        for mv in order_moves(pos, moves) {
            let (score, _) = search(&pos.apply_move(mv), depth - 1, alpha, beta, true, ctx);
            if score < value {
                value = score;
                if is_root {
                    best_move = Some(mv);
                }
            }
            if value < alpha {
                break;
            }
            beta = beta.min(value);
        }
        (value, best_move)
    }
}

/// Search `pos` to `depth` plies inside the window `(alpha, beta)`.
///
/// Returns the score and, for `depth > 0`, the best move found at this
/// root. `maximizing` should be true when White is to move. Uses the
/// default [`KingSafety`] policy.
pub fn alpha_beta(
    pos: &Position,
    depth: u8,
    alpha: f64,
    beta: f64,
    maximizing: bool,
) -> (f64, Option<Move>) {
    let mut ctx = SearchContext {
        nodes: 0,
        king_safety: KingSafety::default(),
        root_depth: depth,
    };
    search(pos, depth, alpha, beta, maximizing, &mut ctx)
}
