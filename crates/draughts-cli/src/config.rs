//! Configuration file loading for the terminal front-end.
//!
//! Settings come from an optional TOML file (`draughts.toml` by default);
//! command-line flags are applied on top by the binary.

use draughts_core::Color;
use draughts_engine::Game;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Front-end settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DraughtsConfig {
    /// The side that moves first. Defaults to red.
    #[serde(default = "default_first_to_move")]
    pub first_to_move: Color,
    /// Draw the board with terminal colors. Defaults to true.
    #[serde(default = "default_true")]
    pub color: bool,
    /// Clear the screen before drawing the board. Defaults to true.
    #[serde(default = "default_true")]
    pub clear_screen: bool,
    /// Starting position as a board diagram. Defaults to the opening layout.
    #[serde(default)]
    pub position: Option<String>,
}

fn default_first_to_move() -> Color {
    Game::FIRST_TO_MOVE
}

fn default_true() -> bool {
    true
}

impl Default for DraughtsConfig {
    fn default() -> Self {
        DraughtsConfig {
            first_to_move: default_first_to_move(),
            color: true,
            clear_screen: true,
            position: None,
        }
    }
}

impl DraughtsConfig {
    /// Default location of the configuration file.
    pub fn default_path() -> PathBuf {
        PathBuf::from("draughts.toml")
    }

    /// Loads the configuration from `path`.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
