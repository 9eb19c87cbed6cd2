//! Perft (performance test) for move generation correctness verification.

use crate::chess_move::Move;
use crate::movegen::{KingSafety, generate_legal_moves_with};
use crate::position::Position;

/// Count the leaf nodes of the fully legal move tree at the given depth.
///
/// Depth 0 returns 1. Depth 1 returns the number of legal moves without
/// playing them.
pub fn perft(pos: &Position, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves_with(pos, pos.side_to_move(), KingSafety::Always);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|mv| perft(&pos.apply_move(mv), depth - 1))
        .sum()
}

/// Perft broken down by root move, sorted by move text.
pub fn divide(pos: &Position, depth: usize) -> Vec<(Move, u64)> {
    let moves = generate_legal_moves_with(pos, pos.side_to_move(), KingSafety::Always);
    let mut results: Vec<(Move, u64)> = moves
        .into_iter()
        .map(|mv| (mv, perft(&pos.apply_move(mv), depth.saturating_sub(1))))
        .collect();
    results.sort_by_key(|(mv, _)| mv.to_string());
    results
}
