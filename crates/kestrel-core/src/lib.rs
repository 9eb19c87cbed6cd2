//! Core chess types: position model, threat maps, move generation, and game rules.

mod apply_move;
mod castle_rights;
mod chess_move;
mod color;
mod describe;
mod error;
mod fen;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod position;
mod square;
mod status;
mod threats;

pub use castle_rights::{CastleRights, CastleSide, king_home};
pub use chess_move::Move;
pub use color::Color;
pub use describe::{Heights, MoveDescription, MoveKind, describe_move};
pub use error::{BoardError, FenError, MoveParseError};
pub use fen::STARTING_FEN;
pub use movegen::{
    KingSafety, MoveList, generate_legal_moves, generate_legal_moves_with, generate_pseudo_moves,
};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::{Position, PrettyBoard};
pub use square::{File, Rank, Square};
pub use status::{FIFTY_MOVE_PLIES, GameStatus};
pub use threats::{Threat, ThreatMap};
