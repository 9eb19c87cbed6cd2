//! Search algorithms and move ordering.

pub mod alphabeta;
pub mod ordering;

use kestrel_core::{Color, Move, Position};
use tracing::info;

use crate::config::SearchConfig;

use alphabeta::{SearchContext, search};

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Best root move, or `None` when the side to move has no legal moves.
    pub best_move: Option<Move>,
    /// Score in centipawns from White's perspective.
    pub score: f64,
    /// Positions examined, the root included.
    pub nodes: u64,
    /// Depth searched.
    pub depth: u8,
}

/// Fixed-depth alpha-beta searcher.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SearchConfig {
        &mut self.config
    }

    /// Search `pos` to the configured depth with a full window.
    pub fn search(&self, pos: &Position) -> SearchResult {
        let depth = self.config.depth;
        let mut ctx = SearchContext {
            nodes: 0,
            king_safety: self.config.king_safety,
            root_depth: depth,
        };
        let maximizing = pos.side_to_move() == Color::White;
        let (score, best_move) = search(
            pos,
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            maximizing,
            &mut ctx,
        );

        info!(
            depth,
            score,
            nodes = ctx.nodes,
            best_move = %best_move.map_or_else(|| "none".to_string(), |mv| mv.to_string()),
            "search finished"
        );

        SearchResult {
            best_move,
            score,
            nodes: ctx.nodes,
            depth,
        }
    }
}
