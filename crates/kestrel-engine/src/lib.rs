//! Search and evaluation for kestrel.

pub mod config;
pub mod eval;
pub mod search;

pub use config::{ConfigError, SearchConfig};
pub use eval::evaluate;
pub use search::alphabeta::{MATE_SCORE, alpha_beta, terminal_score};
pub use search::ordering::order_moves;
pub use search::{SearchResult, Searcher};
