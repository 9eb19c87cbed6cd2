//! UCI protocol errors.

use kestrel_core::{FenError, MoveParseError};

/// Errors that can occur during UCI protocol handling.
#[derive(Debug, thiserror::Error)]
pub enum UciError {
    /// The `position` command is missing `startpos` or `fen` keyword.
    #[error("malformed position command: missing startpos or fen keyword")]
    MalformedPosition,

    /// Failed to parse a FEN string.
    #[error("invalid FEN '{fen}': {source}")]
    InvalidFen {
        /// The FEN string that failed to parse.
        fen: String,
        source: FenError,
    },

    /// A move string in the `position` command is not coordinate notation.
    #[error("invalid move: {source}")]
    InvalidMove {
        #[from]
        source: MoveParseError,
    },

    /// A move in the `position` command starts from an empty square.
    #[error("move {uci_move} has no piece on its source square")]
    EmptySource {
        /// The offending move.
        uci_move: String,
    },

    /// A `go` parameter was given without a value.
    #[error("missing value for go parameter '{param}'")]
    MissingGoValue { param: String },

    /// A `go` parameter value could not be parsed.
    #[error("invalid value '{value}' for go parameter '{param}'")]
    InvalidGoValue { param: String, value: String },

    /// `setoption` without a `name` part.
    #[error("malformed setoption command: expected 'name <id> [value <x>]'")]
    MalformedSetOption,

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
