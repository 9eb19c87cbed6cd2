//! Material values.
//!
//! All scores are from White's perspective (positive = White ahead).

use kestrel_core::{Color, PieceKind, Position};

/// Base material values indexed by [`PieceKind::index()`].
///
/// | Piece  | value |
/// |--------|-------|
/// | Pawn   |   100 |
/// | Knight |   320 |
/// | Bishop |   330 |
/// | Rook   |   500 |
/// | Queen  |   900 |
/// | King   | 20000 |
pub const MATERIAL_VALUE: [i32; PieceKind::COUNT] = [
    100,    // Pawn
    320,    // Knight
    330,    // Bishop
    500,    // Rook
    900,    // Queen
    20_000, // King
];

#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    MATERIAL_VALUE[kind.index()]
}

/// Material balance: the sum of every piece's value, signed by its color.
pub fn material(pos: &Position) -> i32 {
    pos.pieces()
        .map(|(_, piece)| match piece.color() {
            Color::White => piece_value(piece.kind()),
            Color::Black => -piece_value(piece.kind()),
        })
        .sum()
}
