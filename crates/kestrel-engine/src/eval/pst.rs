//! Piece-square tables (PST) for all six piece types.
//!
//! All tables are defined from White's perspective in LERF order:
//! index 0 = A1, index 7 = H1, index 8 = A2, ..., index 63 = H8.
//! Black looks up the square rotated by 180 degrees (`63 - index`).
//! Use [`pst_value`] to look up the value for either color.

use kestrel_core::{Color, Piece, PieceKind, Position, Square};

/// Kings use [`KING_MIDDLEGAME`] before this full move and [`KING_ENDGAME`] from it on.
pub const KING_ENDGAME_FULLMOVE: u16 = 35;

// ---------------------------------------------------------------------------
// Individual piece-square tables
// ---------------------------------------------------------------------------

/// Pawn PST. Rank 1 and rank 8 entries are 0 since pawns never sit there.
#[rustfmt::skip]
const PAWN: [i32; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
      5,  10,  10, -20, -20,  10,  10,   5,
      5,  -5, -10,   0,   0, -10,  -5,   5,
      0,   0,   0,  20,  20,   0,   0,   0,
      5,   5,  10,  25,  25,  10,   5,   5,
     10,  10,  20,  30,  30,  20,  10,  10,
     50,  50,  50,  50,  50,  50,  50,  50,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK: [i32; 64] = [
      0,   0,   0,   5,   5,   0,   0,   0,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
      5,  10,  10,  10,  10,  10,  10,   5,
      0,   0,   0,   0,   0,   0,   0,   0,
];

/// The two queen tables differ on ranks 2 and 3; neither is a rotation of
/// the other.
#[rustfmt::skip]
const WHITE_QUEEN: [i32; 64] = [
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    -10,   0,   5,   0,   0,   0,   0, -10,
    -10,   5,   5,   5,   5,   5,   0, -10,
      0,   0,   5,   5,   5,   5,   0,  -5,
     -5,   0,   5,   5,   5,   5,   0,  -5,
    -10,   0,   5,   5,   5,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

#[rustfmt::skip]
const BLACK_QUEEN: [i32; 64] = [
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    -10,   0,   0,   0,   0,   5,   0, -10,
    -10,   0,   5,   5,   5,   5,   5, -10,
      0,   0,   5,   5,   5,   5,   0,  -5,
     -5,   0,   5,   5,   5,   5,   0,  -5,
    -10,   0,   5,   5,   5,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

#[rustfmt::skip]
const KING_MIDDLEGAME: [i32; 64] = [
     20,  30,  10,   0,   0,  10,  30,  20,
     20,  20,   0,   0,   0,   0,  20,  20,
    -10, -20, -20, -20, -20, -20, -20, -10,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
];

#[rustfmt::skip]
const KING_ENDGAME: [i32; 64] = [
    -50, -30, -30, -30, -30, -30, -30, -50,
    -30, -30,   0,   0,   0,   0, -30, -30,
    -30, -10,  20,  30,  30,  20, -10, -30,
    -30, -10,  30,  40,  40,  30, -10, -30,
    -30, -10,  30,  40,  40,  30, -10, -30,
    -30, -10,  20,  30,  30,  20, -10, -30,
    -30, -20, -10,   0,   0, -10, -20, -30,
    -50, -40, -30, -20, -20, -30, -40, -50,
];

// ---------------------------------------------------------------------------
// Lookup helper
// ---------------------------------------------------------------------------

fn table(piece: Piece, fullmove: u16) -> &'static [i32; 64] {
    match piece.kind() {
        PieceKind::Pawn => &PAWN,
        PieceKind::Knight => &KNIGHT,
        PieceKind::Bishop => &BISHOP,
        PieceKind::Rook => &ROOK,
        PieceKind::Queen => match piece.color() {
            Color::White => &WHITE_QUEEN,
            Color::Black => &BLACK_QUEEN,
        },
        PieceKind::King if fullmove < KING_ENDGAME_FULLMOVE => &KING_MIDDLEGAME,
        PieceKind::King => &KING_ENDGAME,
    }
}

/// Positional bonus for `piece` on `sq`, unsigned (from the owner's view).
#[inline]
pub fn pst_value(piece: Piece, sq: Square, fullmove: u16) -> i32 {
    let idx = match piece.color() {
        Color::White => sq.index(),
        Color::Black => sq.rotate().index(),
    };
    table(piece, fullmove)[idx]
}

/// Sum of every piece's positional bonus, signed by its color.
pub fn positional(pos: &Position) -> i32 {
    let fullmove = pos.fullmove_number();
    pos.pieces()
        .map(|(sq, piece)| {
            let value = pst_value(piece, sq, fullmove);
            match piece.color() {
                Color::White => value,
                Color::Black => -value,
            }
        })
        .sum()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use kestrel_core::{Piece, Position, Square};

    use super::{positional, pst_value};

    #[test]
    fn pawn_white_e4() {
        assert_eq!(pst_value(Piece::WHITE_PAWN, Square::E4, 1), 20);
    }

    /// The black lookup rotates the board: e5 maps to d4.
    #[test]
    fn pawn_black_e5_rotates_to_d4() {
        assert_eq!(
            pst_value(Piece::BLACK_PAWN, Square::E5, 1),
            pst_value(Piece::WHITE_PAWN, Square::D4, 1)
        );
        assert_eq!(pst_value(Piece::BLACK_PAWN, Square::A2, 1), 50);
    }

    #[test]
    fn knight_a1_h1_symmetric() {
        assert_eq!(
            pst_value(Piece::WHITE_KNIGHT, Square::A1, 1),
            pst_value(Piece::WHITE_KNIGHT, Square::H1, 1)
        );
    }

    #[test]
    fn queens_use_their_own_tables() {
        // c2 for White is +5; its rotation f7 for Black reads index 10 of
        // the black table, which is 0
        assert_eq!(pst_value(Piece::WHITE_QUEEN, Square::C2, 1), 5);
        assert_eq!(pst_value(Piece::BLACK_QUEEN, Square::F7, 1), 0);
        assert_eq!(pst_value(Piece::BLACK_QUEEN, Square::C7, 1), 5);
    }

    #[test]
    fn king_switches_tables_at_move_35() {
        assert_eq!(pst_value(Piece::WHITE_KING, Square::G1, 34), 30);
        assert_eq!(pst_value(Piece::WHITE_KING, Square::G1, 35), -30);
        assert_eq!(pst_value(Piece::BLACK_KING, Square::E5, 40), 40);
    }

    #[test]
    fn positional_balance() {
        assert_eq!(positional(&Position::starting_position()), 0);
        // knight d4 (+20) and king e1 (0) against king e8 (0)
        let pos: Position = "4k3/8/8/8/3N4/8/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(positional(&pos), 20);
    }
}
