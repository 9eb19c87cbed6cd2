//! UCI protocol handling for kestrel.

pub mod command;
pub mod engine;
pub mod error;

pub use command::{Command, GoParams, parse_command};
pub use engine::UciEngine;
pub use error::UciError;
