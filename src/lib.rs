//! Two-player tic-tac-toe played with the mouse in a native window.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid of [`Square`]s
//! - **Rules**: pure [`check_win`] / [`check_draw`] evaluation
//! - **Controller**: [`GameController`] maps clicks to cells, applies
//!   moves and decides when the game ends
//! - **GUI**: an eframe window implementing the controller's
//!   [`Renderer`] and [`Notifier`] seams
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_gui::{GameConfig, Player};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::new(600, Player::O)?;
//! tictactoe_gui::gui::run(config)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

pub mod cli;
pub mod gui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, MIN_WINDOW_SIZE};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardGeometry, GameController, GameStatus, InputSource, MoveError, Notifier, Phase,
    Player, PointerDown, Position, Renderer, Square, check_draw, check_win, outcome,
};

/// Rule engine internals, including the table of winning lines.
pub use games::tictactoe::rules;
