//! Arcade configuration, loaded from TOML

use chess_core::Color;
use classical_engine::DEFAULT_DEPTH;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::session::Difficulty;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A side of the board as written in config files and on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Light,
    Dark,
}

impl From<Side> for Color {
    fn from(side: Side) -> Color {
        match side {
            Side::Light => Color::Light,
            Side::Dark => Color::Dark,
        }
    }
}

/// Who sits at the board in an interactive game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Human against the bot
    Bot,
    /// Two humans sharing the terminal
    Pvp,
}

/// Bot settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BotConfig {
    pub difficulty: Difficulty,
    /// Search depth for tiers above easy
    pub search_depth: u8,
    /// Split root moves across threads
    pub parallel_root: bool,
    /// Seed for the random tier (None = entropy)
    pub seed: Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            search_depth: DEFAULT_DEPTH,
            parallel_root: false,
            seed: None,
        }
    }
}

/// Game flow settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// Plies after which self-play stops
    pub max_plies: u32,
    pub mode: GameMode,
    /// Side the human plays in bot mode; the bot takes the other one
    pub human_color: Side,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            mode: GameMode::Bot,
            human_color: Side::Light,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ArcadeConfig {
    pub bot: BotConfig,
    pub game: GameConfig,
}

impl ArcadeConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Side the bot plays in an interactive game, `None` when two humans play.
    pub fn bot_side(&self) -> Option<Color> {
        match self.game.mode {
            GameMode::Bot => Some(Color::from(self.game.human_color).other()),
            GameMode::Pvp => None,
        }
    }

    /// Load config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
