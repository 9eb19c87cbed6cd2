//! Error types for FEN parsing, board validation and move notation.

use std::fmt;

use crate::color::Color;
use crate::square::Square;

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// The FEN string does not have exactly 6 single-space-separated fields.
    WrongFieldCount {
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    WrongRankCount {
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    BadRankLength {
        /// Zero-based rank index as written (0 = rank 8, 7 = rank 1).
        rank_index: usize,
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    InvalidPieceChar {
        character: char,
    },
    /// The active color field is not "w" or "b".
    InvalidColor {
        found: String,
    },
    /// The castling field is not "-" or a run of `KQkq` letters.
    InvalidCastling {
        found: String,
    },
    /// The en passant field is not "-" or a valid algebraic square.
    InvalidEnPassant {
        found: String,
    },
    /// A move counter (halfmove clock or fullmove number) is not a valid number.
    InvalidMoveCounter {
        /// The field name ("halfmove clock" or "fullmove number").
        field: &'static str,
        found: String,
    },
    /// The parsed board fails structural validation.
    InvalidBoard {
        source: BoardError,
    },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "expected 6 FEN fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "expected 8 ranks in piece placement, found {found}")
            }
            FenError::BadRankLength { rank_index, length } => {
                write!(f, "rank {} describes {length} squares, expected 8", 8 - rank_index)
            }
            FenError::InvalidPieceChar { character } => {
                write!(f, "invalid piece character: '{character}'")
            }
            FenError::InvalidColor { found } => {
                write!(f, "invalid active color: \"{found}\"")
            }
            FenError::InvalidCastling { found } => {
                write!(f, "invalid castling rights: \"{found}\"")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "invalid en passant square: \"{found}\"")
            }
            FenError::InvalidMoveCounter { field, found } => {
                write!(f, "invalid {field}: \"{found}\"")
            }
            FenError::InvalidBoard { source } => {
                write!(f, "invalid board: {source}")
            }
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::InvalidBoard { source } => Some(source),
            _ => None,
        }
    }
}

impl From<BoardError> for FenError {
    fn from(source: BoardError) -> Self {
        FenError::InvalidBoard { source }
    }
}

/// Errors from structural validation of a [`Position`](crate::position::Position).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side has more than one king.
    #[error("expected at most 1 king for {color:?}, found {count}")]
    TooManyKings { color: Color, count: usize },
    /// A pawn occupies the first or eighth rank.
    #[error("pawn found on back rank at {square}")]
    PawnOnBackRank { square: Square },
}

/// Errors from parsing a move in coordinate notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    /// The text is not four or five characters long.
    #[error("move \"{0}\" must look like e2e4 or e7e8q")]
    BadLength(String),
    /// One of the two squares is not valid algebraic notation.
    #[error("invalid square in move \"{0}\"")]
    BadSquare(String),
    /// The fifth character names something other than a queen.
    #[error("unsupported promotion in move \"{0}\", pawns always promote to a queen")]
    BadPromotion(String),
}
