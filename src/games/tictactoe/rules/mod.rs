//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the controller can evaluate them after every move.

pub mod draw;
pub mod win;

pub use draw::{check_draw, outcome};
pub use win::{LINES, check_win};
