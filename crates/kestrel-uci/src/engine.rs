//! Synchronous UCI engine loop.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use kestrel_core::{Color, KingSafety, Position};
use kestrel_engine::{SearchConfig, SearchResult, Searcher};

use crate::command::{Command, GoParams, parse_command};
use crate::error::UciError;

/// The UCI engine, holding the current position and search settings.
///
/// Commands are handled one at a time on the calling thread; `go` blocks
/// until the search completes.
#[derive(Debug, Default)]
pub struct UciEngine {
    position: Position,
    searcher: Searcher,
}

impl UciEngine {
    /// Create a new engine with the starting position.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn config(&self) -> &SearchConfig {
        self.searcher.config()
    }

    /// Run the UCI loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<(), UciError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received UCI command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.handle(cmd, output)?,
                Err(e) => warn!(error = %e, "UCI parse error"),
            }
            output.flush()?;
        }

        info!("kestrel shutting down");
        Ok(())
    }

    fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), UciError> {
        match cmd {
            Command::Uci => self.handle_uci(out)?,
            Command::IsReady => writeln!(out, "readyok")?,
            Command::UciNewGame => self.position = Position::starting_position(),
            Command::Position(position) => self.position = position,
            Command::Go(params) => self.handle_go(params, out)?,
            Command::SetOption { name, value } => self.handle_setoption(&name, &value),
            Command::Display => {
                writeln!(out, "{}", self.position.pretty())?;
                writeln!(out, "Fen: {}", self.position)?;
            }
            Command::Quit | Command::Unknown(_) => {}
        }
        Ok(())
    }

    fn handle_uci<W: Write>(&self, out: &mut W) -> Result<(), UciError> {
        let config = self.searcher.config();
        writeln!(out, "id name kestrel")?;
        writeln!(out, "id author the kestrel developers")?;
        writeln!(
            out,
            "option name Depth type spin default {} min 1 max {}",
            config.depth,
            kestrel_engine::config::MAX_DEPTH
        )?;
        writeln!(
            out,
            "option name StrictLegality type check default {}",
            config.king_safety == KingSafety::Always
        )?;
        writeln!(out, "uciok")?;
        Ok(())
    }

    fn handle_setoption(&mut self, name: &str, value: &str) {
        match self.searcher.config_mut().set_option(name, value) {
            Ok(()) => info!(name, value, "option set"),
            Err(e) => warn!(error = %e, "setoption rejected"),
        }
    }

    fn handle_go<W: Write>(&mut self, params: GoParams, out: &mut W) -> Result<(), UciError> {
        let status = self.position.status();
        if status.is_over() {
            info!(%status, "go on a finished game");
            writeln!(out, "info string {status}")?;
        }

        let mut config = *self.searcher.config();
        if let Some(depth) = params.depth
            && depth > 0
        {
            config.depth = depth;
        }
        let result = Searcher::new(config).search(&self.position);

        writeln!(
            out,
            "info depth {} score cp {} nodes {}",
            result.depth,
            self.centipawns(&result),
            result.nodes
        )?;
        match result.best_move {
            Some(mv) => writeln!(out, "bestmove {mv}")?,
            None => writeln!(out, "bestmove 0000")?,
        }
        Ok(())
    }

    /// UCI scores are from the side to move's point of view.
    fn centipawns(&self, result: &SearchResult) -> i64 {
        let score = match self.position.side_to_move() {
            Color::White => result.score,
            Color::Black => -result.score,
        };
        score.round() as i64
    }
}
