//! Move rejection errors.

use derive_more::{Display, Error};

/// Why a move was not applied.
///
/// None of these are fatal: the controller drops the input and waits for
/// the next click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The coordinates do not name a square on the board.
    #[display("Cell ({row}, {col}) is outside the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The square already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}
