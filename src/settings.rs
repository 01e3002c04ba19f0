//! Game settings: symbol choice, who opens, and the computer's thinking pause.

use crate::games::tictactoe::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Which side takes the first move in a new game.
///
/// Defaults to [`FirstPlayer::Human`] so the player moves first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FirstPlayer {
    /// The human opens.
    #[default]
    Human,
    /// The computer opens.
    Computer,
}

impl FirstPlayer {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Human => "Player",
            Self::Computer => "Computer",
        }
    }

    /// Toggles between `Human` and `Computer`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }
}

/// User-configurable settings, loadable from TOML.
///
/// Missing keys take their defaults:
///
/// ```toml
/// human_mark = "X"
/// first_player = "human"
/// think_delay_ms = 500
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Mark the human plays. The computer takes the other one.
    #[serde(default = "default_human_mark")]
    human_mark: Player,

    /// Who moves first in each game.
    #[serde(default)]
    first_player: FirstPlayer,

    /// Pause before the computer's move is applied, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,
}

fn default_human_mark() -> Player {
    Player::X
}

fn default_think_delay_ms() -> u64 {
    500
}

impl Settings {
    /// Creates settings with defaults.
    pub fn new() -> Self {
        Self {
            human_mark: default_human_mark(),
            first_player: FirstPlayer::default(),
            think_delay_ms: default_think_delay_ms(),
        }
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read settings file: {}", e))
        })?;

        let settings: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse settings: {}", e))
        })?;

        info!(
            human_mark = %settings.human_mark,
            first_player = settings.first_player.label(),
            think_delay_ms = settings.think_delay_ms,
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Sets the human's mark; the computer's follows.
    pub fn with_human_mark(mut self, mark: Player) -> Self {
        self.human_mark = mark;
        self
    }

    /// Sets who opens.
    pub fn with_first_player(mut self, first: FirstPlayer) -> Self {
        self.first_player = first;
        self
    }

    /// Sets the thinking pause.
    pub fn with_think_delay_ms(mut self, millis: u64) -> Self {
        self.think_delay_ms = millis;
        self
    }

    /// The computer's mark.
    pub fn computer_mark(&self) -> Player {
        self.human_mark.opponent()
    }

    /// Mark of the side that opens.
    pub fn opening_mark(&self) -> Player {
        match self.first_player {
            FirstPlayer::Human => self.human_mark,
            FirstPlayer::Computer => self.computer_mark(),
        }
    }

    /// The thinking pause as a [`Duration`].
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.human_mark(), &Player::X);
        assert_eq!(settings.computer_mark(), Player::O);
        assert_eq!(settings.opening_mark(), Player::X);
        assert_eq!(settings.think_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_computer_first_opens_with_computer_mark() {
        let settings = Settings::new()
            .with_human_mark(Player::O)
            .with_first_player(FirstPlayer::Computer);
        assert_eq!(settings.opening_mark(), Player::X);
    }

    #[test]
    fn test_first_player_parse_and_toggle() {
        assert_eq!("computer".parse::<FirstPlayer>().unwrap(), FirstPlayer::Computer);
        assert_eq!("Human".parse::<FirstPlayer>().unwrap(), FirstPlayer::Human);
        assert_eq!(FirstPlayer::Human.toggle(), FirstPlayer::Computer);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str("first_player = \"computer\"").unwrap();
        assert_eq!(settings.first_player(), &FirstPlayer::Computer);
        assert_eq!(settings.human_mark(), &Player::X);
        assert_eq!(settings.think_delay_ms(), &500);
    }
}
