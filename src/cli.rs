//! Command-line interface for tictactoe_gui.

use crate::games::tictactoe::Player;
use clap::{Parser, ValueEnum};

/// Tic-tac-toe for two players sharing one mouse
#[derive(Parser, Debug)]
#[command(name = "tictactoe_gui")]
#[command(about = "Two-player tic-tac-toe in a native window", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Window width and height in pixels
    #[arg(long, default_value = "600")]
    pub size: u32,

    /// Player who moves first
    #[arg(long, value_enum, default_value_t = FirstPlayer::O)]
    pub first: FirstPlayer,
}

/// Which symbol takes the first move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FirstPlayer {
    /// O opens the game.
    #[default]
    O,
    /// X opens the game.
    X,
}

impl From<FirstPlayer> for Player {
    fn from(first: FirstPlayer) -> Self {
        match first {
            FirstPlayer::O => Player::O,
            FirstPlayer::X => Player::X,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tictactoe_gui"]);
        assert_eq!(cli.size, 600);
        assert_eq!(cli.first, FirstPlayer::O);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from(["tictactoe_gui", "--size", "450", "--first", "x"]);
        assert_eq!(cli.size, 450);
        assert_eq!(Player::from(cli.first), Player::X);
    }
}
