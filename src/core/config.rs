//! Game configuration.
//!
//! A `GameConfig` fixes the layout every new game and restart starts from,
//! and whether a session keeps undo history. Build it in code:
//!
//! ```
//! use peg_solitaire::core::{Board, GameConfig};
//!
//! let config = GameConfig::default().without_history();
//! assert_eq!(config.layout, Board::english());
//! assert!(!config.record_history);
//! ```
//!
//! or load it from JSON, with the layout written as row strings:
//!
//! ```
//! use peg_solitaire::core::GameConfig;
//!
//! let config = GameConfig::from_json(r#"{ "layout": ["ooo", "o.o", "ooo"] }"#).unwrap();
//! assert_eq!(config.layout.count_pegs(), 8);
//! assert!(config.record_history);
//! ```

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::error::ConfigError;

fn default_record_history() -> bool {
    true
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Starting layout. Copied, never shared, on every new game.
    #[serde(default)]
    pub layout: Board,

    /// Snapshot the state before each capturing move so it can be undone.
    #[serde(default = "default_record_history")]
    pub record_history: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            layout: Board::english(),
            record_history: true,
        }
    }
}

impl GameConfig {
    /// Create a configuration for the given layout, with history enabled.
    #[must_use]
    pub fn new(layout: Board) -> Self {
        Self {
            layout,
            record_history: true,
        }
    }

    /// Parse a configuration from JSON.
    ///
    /// Missing fields take their defaults. A layout with no playable
    /// square is rejected.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the layout can host a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layout.count_playable() == 0 {
            return Err(ConfigError::NoPlayableSquares);
        }
        Ok(())
    }

    /// Replace the starting layout.
    #[must_use]
    pub fn with_layout(mut self, layout: Board) -> Self {
        self.layout = layout;
        self
    }

    /// Disable undo history.
    #[must_use]
    pub fn without_history(mut self) -> Self {
        self.record_history = false;
        self
    }
}
