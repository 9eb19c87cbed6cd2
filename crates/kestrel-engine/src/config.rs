//! Search settings adjustable from the front-end.

use kestrel_core::KingSafety;
use thiserror::Error;

/// Depth searched when nothing else is configured.
pub const DEFAULT_DEPTH: u8 = 5;

/// Deepest search accepted through [`SearchConfig::set_option`].
pub const MAX_DEPTH: u8 = 32;

/// Errors from applying a named option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("invalid value '{value}' for option '{name}'")]
    InvalidValue { name: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched from the root.
    pub depth: u8,
    /// Which legal-move filter the search uses.
    pub king_safety: KingSafety,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            king_safety: KingSafety::default(),
        }
    }
}

impl SearchConfig {
    /// Apply a `setoption`-style name/value pair. Option names are
    /// case-insensitive.
    ///
    /// - `Depth`: integer in `1..=MAX_DEPTH`
    /// - `StrictLegality`: `true` simulates every move for king safety,
    ///   `false` only while in check
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        };

        match name.to_ascii_lowercase().as_str() {
            "depth" => {
                let depth: u8 = value.parse().map_err(|_| invalid())?;
                if !(1..=MAX_DEPTH).contains(&depth) {
                    return Err(invalid());
                }
                self.depth = depth;
            }
            "strictlegality" => {
                self.king_safety = match value.to_ascii_lowercase().as_str() {
                    "true" => KingSafety::Always,
                    "false" => KingSafety::WhenInCheck,
                    _ => return Err(invalid()),
                };
            }
            _ => return Err(ConfigError::UnknownOption(name.to_string())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use kestrel_core::KingSafety;

    use super::{ConfigError, DEFAULT_DEPTH, SearchConfig};

    #[test]
    fn defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.depth, DEFAULT_DEPTH);
        assert_eq!(config.king_safety, KingSafety::WhenInCheck);
    }

    #[test]
    fn set_depth() {
        let mut config = SearchConfig::default();
        config.set_option("Depth", "3").unwrap();
        assert_eq!(config.depth, 3);
        assert!(config.set_option("depth", "0").is_err());
        assert!(config.set_option("depth", "deep").is_err());
        assert_eq!(config.depth, 3);
    }

    #[test]
    fn set_strict_legality() {
        let mut config = SearchConfig::default();
        config.set_option("StrictLegality", "TRUE").unwrap();
        assert_eq!(config.king_safety, KingSafety::Always);
        config.set_option("StrictLegality", "false").unwrap();
        assert_eq!(config.king_safety, KingSafety::WhenInCheck);
        assert_eq!(
            config.set_option("StrictLegality", "maybe"),
            Err(ConfigError::InvalidValue {
                name: "StrictLegality".to_string(),
                value: "maybe".to_string(),
            })
        );
    }

    #[test]
    fn unknown_option() {
        let mut config = SearchConfig::default();
        assert_eq!(
            config.set_option("Hash", "16"),
            Err(ConfigError::UnknownOption("Hash".to_string()))
        );
    }
}
