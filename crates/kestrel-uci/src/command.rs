//! UCI command parsing.

use kestrel_core::{Move, Position};

use crate::error::UciError;

/// Parameters for the `go` command.
///
/// A bare `go` searches to the configured depth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    /// Search to this depth only.
    pub depth: Option<u8>,
}

/// A parsed UCI command.
#[derive(Debug)]
pub enum Command {
    /// `uci` -- identify the engine.
    Uci,
    /// `isready` -- synchronization ping.
    IsReady,
    /// `ucinewgame` -- reset to the starting position.
    UciNewGame,
    /// `position` -- a position with any listed moves already applied.
    Position(Position),
    /// `go` -- search the current position.
    Go(GoParams),
    /// `setoption name <name> [value <value>]`.
    SetOption { name: String, value: String },
    /// `d` -- print the current position.
    Display,
    /// `quit` -- exit the engine.
    Quit,
    /// Unrecognized command (silently ignored per UCI spec).
    Unknown(String),
}

/// Parse a single line of UCI input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, UciError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&first, rest)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match first {
        "uci" => Ok(Command::Uci),
        "isready" => Ok(Command::IsReady),
        "ucinewgame" => Ok(Command::UciNewGame),
        "quit" => Ok(Command::Quit),
        "d" => Ok(Command::Display),
        "position" => parse_position(rest),
        "go" => parse_go(rest),
        "setoption" => parse_setoption(rest),
        _ => Ok(Command::Unknown(first.to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [moves e2e4 d7d5 ...]`
/// - `position fen <fen-string> [moves e2e4 d7d5 ...]`
///
/// Moves are applied without a legality check. Only malformed moves and
/// moves from an empty square are rejected.
fn parse_position(tokens: &[&str]) -> Result<Command, UciError> {
    let (mut position, rest) = match tokens {
        ["startpos", rest @ ..] => (Position::starting_position(), rest),
        ["fen", rest @ ..] => {
            // FEN is 6 space-separated fields
            let split = rest.len().min(6);
            let fen = rest[..split].join(" ");
            let position = fen
                .parse::<Position>()
                .map_err(|source| UciError::InvalidFen {
                    fen: fen.clone(),
                    source,
                })?;
            (position, &rest[split..])
        }
        _ => return Err(UciError::MalformedPosition),
    };

    if let ["moves", moves @ ..] = rest {
        for uci_str in moves {
            let mv = Move::from_uci(uci_str)?;
            if position.piece_at(mv.source()).is_none() {
                return Err(UciError::EmptySource {
                    uci_move: uci_str.to_string(),
                });
            }
            position = position.apply_move(mv);
        }
    }

    Ok(Command::Position(position))
}

/// Parse the `go` command arguments. Unknown tokens are silently skipped.
fn parse_go(tokens: &[&str]) -> Result<Command, UciError> {
    let mut params = GoParams::default();

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            "depth" => {
                params.depth = Some(parse_int(tokens.get(i + 1), "depth")?);
                i += 2;
            }
            _ => {
                // Unknown token -- skip per UCI convention
                i += 1;
            }
        }
    }

    Ok(Command::Go(params))
}

/// Parse an integer value from a token.
fn parse_int<T: std::str::FromStr>(token: Option<&&str>, param: &str) -> Result<T, UciError> {
    let value = token.ok_or_else(|| UciError::MissingGoValue {
        param: param.to_string(),
    })?;
    value.parse().map_err(|_| UciError::InvalidGoValue {
        param: param.to_string(),
        value: value.to_string(),
    })
}

/// Parse `name <words...> [value <words...>]`.
fn parse_setoption(tokens: &[&str]) -> Result<Command, UciError> {
    let ["name", rest @ ..] = tokens else {
        return Err(UciError::MalformedSetOption);
    };
    let (name, value) = match rest.iter().position(|&t| t == "value") {
        Some(at) => (&rest[..at], &rest[at + 1..]),
        None => (rest, &[][..]),
    };
    if name.is_empty() {
        return Err(UciError::MalformedSetOption);
    }
    Ok(Command::SetOption {
        name: name.join(" "),
        value: value.join(" "),
    })
}

#[cfg(test)]
mod tests {
    use kestrel_core::{Piece, Square};

    use super::*;

    #[test]
    fn parse_uci() {
        assert!(matches!(parse_command("uci").unwrap(), Command::Uci));
    }

    #[test]
    fn parse_isready() {
        assert!(matches!(parse_command("isready").unwrap(), Command::IsReady));
    }

    #[test]
    fn parse_quit() {
        assert!(matches!(parse_command("quit").unwrap(), Command::Quit));
    }

    #[test]
    fn parse_display() {
        assert!(matches!(parse_command("d").unwrap(), Command::Display));
    }

    #[test]
    fn parse_ucinewgame() {
        assert!(matches!(
            parse_command("ucinewgame").unwrap(),
            Command::UciNewGame
        ));
    }

    #[test]
    fn parse_position_startpos() {
        match parse_command("position startpos").unwrap() {
            Command::Position(pos) => assert_eq!(pos, Position::starting_position()),
            _ => panic!("expected Position"),
        }
    }

    #[test]
    fn parse_position_startpos_with_moves() {
        match parse_command("position startpos moves e2e4 e7e5").unwrap() {
            Command::Position(pos) => {
                assert_eq!(pos.piece_at(Square::E4), Some(Piece::WHITE_PAWN));
                assert_eq!(pos.piece_at(Square::E5), Some(Piece::BLACK_PAWN));
                assert_eq!(pos.en_passant(), Some(Square::E6));
            }
            _ => panic!("expected Position"),
        }
    }

    #[test]
    fn parse_position_fen() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        match parse_command(&format!("position fen {fen}")).unwrap() {
            Command::Position(pos) => assert_eq!(pos.to_string(), fen),
            _ => panic!("expected Position"),
        }
    }

    #[test]
    fn parse_position_fen_with_moves() {
        let cmd = parse_command("position fen 4k3/8/8/8/8/8/4P3/4K3 w - - 0 1 moves e2e4")
            .unwrap();
        match cmd {
            Command::Position(pos) => {
                assert_eq!(pos.to_string(), "4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1");
            }
            _ => panic!("expected Position"),
        }
    }

    #[test]
    fn moves_are_not_checked_for_legality() {
        // a rook jumping over its own pawn still gets applied
        match parse_command("position startpos moves a1a5").unwrap() {
            Command::Position(pos) => {
                assert_eq!(pos.piece_at(Square::A5), Some(Piece::WHITE_ROOK));
            }
            _ => panic!("expected Position"),
        }
    }

    #[test]
    fn parse_position_bad_moves() {
        assert!(matches!(
            parse_command("position startpos moves e2e9"),
            Err(UciError::InvalidMove { .. })
        ));
        assert!(matches!(
            parse_command("position startpos moves e4e5"),
            Err(UciError::EmptySource { .. })
        ));
    }

    #[test]
    fn parse_go_depth() {
        match parse_command("go depth 6").unwrap() {
            Command::Go(params) => assert_eq!(params.depth, Some(6)),
            _ => panic!("expected Go"),
        }
    }

    #[test]
    fn parse_go_bare_defaults() {
        match parse_command("go").unwrap() {
            Command::Go(params) => assert_eq!(params, GoParams::default()),
            _ => panic!("expected Go"),
        }
    }

    #[test]
    fn parse_go_skips_unsupported_limits() {
        match parse_command("go wtime 300000 depth 3 infinite").unwrap() {
            Command::Go(params) => assert_eq!(params.depth, Some(3)),
            _ => panic!("expected Go"),
        }
    }

    #[test]
    fn parse_go_missing_depth_value() {
        assert!(matches!(
            parse_command("go depth"),
            Err(UciError::MissingGoValue { .. })
        ));
    }

    #[test]
    fn parse_go_invalid_depth_value() {
        assert!(matches!(
            parse_command("go depth abc"),
            Err(UciError::InvalidGoValue { .. })
        ));
    }

    #[test]
    fn parse_setoption() {
        match parse_command("setoption name Depth value 3").unwrap() {
            Command::SetOption { name, value } => {
                assert_eq!(name, "Depth");
                assert_eq!(value, "3");
            }
            _ => panic!("expected SetOption"),
        }
    }

    #[test]
    fn parse_setoption_multiword_name() {
        match parse_command("setoption name Clear Hash").unwrap() {
            Command::SetOption { name, value } => {
                assert_eq!(name, "Clear Hash");
                assert_eq!(value, "");
            }
            _ => panic!("expected SetOption"),
        }
    }

    #[test]
    fn parse_setoption_malformed() {
        assert!(parse_command("setoption Depth 3").is_err());
        assert!(parse_command("setoption name value 3").is_err());
    }

    #[test]
    fn parse_unknown_command() {
        let cmd = parse_command("foobar").unwrap();
        assert!(matches!(cmd, Command::Unknown(_)));
    }

    #[test]
    fn parse_empty_line() {
        let cmd = parse_command("").unwrap();
        assert!(matches!(cmd, Command::Unknown(_)));
    }

    #[test]
    fn parse_position_missing_keyword() {
        assert!(matches!(
            parse_command("position"),
            Err(UciError::MalformedPosition)
        ));
    }

    #[test]
    fn parse_position_invalid_fen() {
        assert!(matches!(
            parse_command("position fen invalid"),
            Err(UciError::InvalidFen { .. })
        ));
    }
}
