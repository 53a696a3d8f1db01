//! Validated game configuration.

use crate::games::tictactoe::{BoardGeometry, Player};
use derive_getters::Getters;
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Smallest window edge that leaves room to draw a cell.
pub const MIN_WINDOW_SIZE: u32 = 30;

/// Settings for one run of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct GameConfig {
    /// Window width and height in pixels.
    window_size: u32,
    /// Player who moves first.
    first_player: Player,
}

impl GameConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the window is smaller than
    /// [`MIN_WINDOW_SIZE`].
    #[instrument]
    pub fn new(window_size: u32, first_player: Player) -> Result<Self, ConfigError> {
        if window_size < MIN_WINDOW_SIZE {
            return Err(ConfigError::new(format!(
                "Window size {} is below the minimum of {}",
                window_size, MIN_WINDOW_SIZE
            )));
        }
        debug!("Config validated");
        Ok(Self {
            window_size,
            first_player,
        })
    }

    /// Pixel layout for the configured window.
    pub fn geometry(&self) -> BoardGeometry {
        BoardGeometry::new(self.window_size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_size: 600,
            first_player: Player::O,
        }
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
    #[instrument(skip(message))]
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
    fn test_default_matches_reference_window() {
        let config = GameConfig::default();
        assert_eq!(*config.window_size(), 600);
        assert_eq!(*config.first_player(), Player::O);
        assert_eq!(config.geometry().cell_size(), 200);
    }

    #[test]
    fn test_rejects_tiny_window() {
        let err = GameConfig::new(12, Player::O).unwrap_err();
        assert!(err.message.contains("below the minimum"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_accepts_custom_first_player() {
        let config = GameConfig::new(300, Player::X).unwrap();
        assert_eq!(*config.first_player(), Player::X);
    }
}
