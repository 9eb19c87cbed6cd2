//! FEN string parsing and serialization for [`Position`].

use std::fmt;
use std::str::FromStr;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::position::Position;
use crate::square::{File, Rank, Square};

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for Position {
    type Err = FenError;

    /// Parse the six FEN fields in order. Fields must be separated by
    /// exactly one space; any malformed field fails the whole load.
    fn from_str(fen: &str) -> Result<Position, FenError> {
        let fields: Vec<&str> = fen.split(' ').collect();
        let [placement, color, castling, en_passant, halfmove, fullmove] = fields[..] else {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        };

        let mut pos = Position::empty();
        parse_placement(&mut pos, placement)?;

        pos.set_side_to_move(match color {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        });

        pos.set_castling(CastleRights::from_fen(castling)?);

        pos.set_en_passant(match en_passant {
            "-" => None,
            s => Some(Square::from_algebraic(s).ok_or_else(|| FenError::InvalidEnPassant {
                found: s.to_string(),
            })?),
        });

        pos.set_halfmove_clock(parse_counter("halfmove clock", halfmove)?);
        pos.set_fullmove_number(parse_counter("fullmove number", fullmove)?);

        pos.validate()?;
        Ok(pos)
    }
}

/// Walk ranks 8 down to 1 and files a to h; digits skip empty files.
fn parse_placement(pos: &mut Position, placement: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let rows = ranks.iter().zip(Rank::ALL.into_iter().rev());
    for (rank_index, (rank_str, rank)) in rows.enumerate() {
        let mut file_index: usize = 0;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                file_index += digit as usize;
                continue;
            }

            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            let Some(&file) = File::ALL.get(file_index) else {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: file_index + 1,
                });
            };
            pos.put(Square::new(rank, file), piece);
            file_index += 1;
        }

        if file_index != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: file_index,
            });
        }
    }
    Ok(())
}

/// Clocks are plain unsigned decimal numbers; signs and spaces are rejected.
fn parse_counter(field: &'static str, s: &str) -> Result<u16, FenError> {
    let invalid = || FenError::InvalidMoveCounter {
        field,
        found: s.to_string(),
    };
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    s.parse::<u16>().map_err(|_| invalid())
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rank) in Rank::ALL.into_iter().rev().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            let mut empty_run = 0u8;
            for file in File::ALL {
                match self.piece_at(Square::new(rank, file)) {
                    Some(piece) => {
                        if empty_run > 0 {
                            write!(f, "{empty_run}")?;
                            empty_run = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                write!(f, "{empty_run}")?;
            }
        }

        write!(f, " {} {}", self.side_to_move(), self.castling())?;
        match self.en_passant() {
            Some(sq) => write!(f, " {sq}")?,
            None => write!(f, " -")?,
        }
        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}
