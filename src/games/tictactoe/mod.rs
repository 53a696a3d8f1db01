//! Tic-tac-toe: board model, rules and the click-driven controller.

mod controller;
mod error;
mod position;
pub mod rules;
mod types;

pub use controller::{
    BoardGeometry, GameController, InputSource, Notifier, Phase, PointerDown, Renderer,
};
pub use error::MoveError;
pub use position::Position;
pub use rules::{check_draw, check_win, outcome};
pub use types::{Board, GameStatus, Player, Square};
