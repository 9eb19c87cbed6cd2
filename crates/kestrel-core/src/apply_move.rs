//! Move execution via copy-make.

use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

impl Position {
    /// Apply a move and return the resulting position. Copy-make: `self` is
    /// not modified.
    ///
    /// No legality check is made. Castling is recognized as a king moving two
    /// files, en passant as a pawn moving diagonally onto the en passant
    /// target, and a pawn reaching the last rank always becomes a queen.
    ///
    /// # Panics
    ///
    /// Panics if the source square is empty.
    pub fn apply_move(&self, mv: Move) -> Position {
        let mut next = *self;
        let us = self.side_to_move();
        let (src, dst) = (mv.source(), mv.dest());

        let Some(piece) = next.take(src) else {
            panic!("apply_move: no piece on {src} for {mv} in {self}");
        };
        let mut is_capture = next.take(dst).is_some();

        match piece.kind() {
            PieceKind::King if src.file().distance(dst.file()) == 2 => {
                let (rook_from, rook_to) = CastleSide::of_king_step(src, dst).rook_squares(us);
                if let Some(rook) = next.take(rook_from) {
                    next.put(rook_to, rook);
                }
            }
            PieceKind::Pawn
                if !is_capture
                    && src.file() != dst.file()
                    && self.en_passant() == Some(dst) =>
            {
                // the captured pawn sits one rank behind the target square
                if let Some(victim) = dst.shift(-us.forward(), 0) {
                    next.take(victim);
                }
                is_capture = true;
            }
            _ => {}
        }

        let is_pawn = piece.kind() == PieceKind::Pawn;
        let placed = if is_pawn && dst.rank().is_back_rank() {
            Piece::new(PieceKind::Queen, us)
        } else {
            piece
        };
        next.put(dst, placed);

        next.set_castling(self.castling().revoke(src).revoke(dst));

        let double_push = is_pawn && src.index().abs_diff(dst.index()) == 16;
        next.set_en_passant(if double_push {
            src.shift(us.forward(), 0)
        } else {
            None
        });

        next.set_halfmove_clock(if is_pawn || is_capture {
            0
        } else {
            self.halfmove_clock().saturating_add(1)
        });

        next.set_side_to_move(!us);
        if us == Color::Black {
            next.set_fullmove_number(self.fullmove_number().saturating_add(1));
        }

        next
    }
}
