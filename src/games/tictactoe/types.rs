//! Core domain types for tic-tac-toe.

use super::error::MoveError;
use super::position::Position;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Player {
    /// Player O (moves first by default).
    O,
    /// Player X.
    X,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// The board only stores marks. Turn order is enforced by the
/// [`GameController`](super::GameController), not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Number of rows and columns.
    pub const SIDE: usize = 3;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at `(row, col)`, or `None` off the board.
    pub fn square(&self, row: usize, col: usize) -> Option<Square> {
        Position::from_row_col(row, col).map(|pos| self.get(pos))
    }

    /// Places `player`'s mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if either coordinate is outside
    /// `0..3`, and [`MoveError::Occupied`] if the square already holds a mark.
    /// The board is left untouched on error.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<(), MoveError> {
        let pos = Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        if self.get(pos) != Square::Empty {
            return Err(MoveError::Occupied { row, col });
        }
        self.squares[pos.to_index()] = Square::Occupied(player);
        Ok(())
    }

    /// Checks if the square at `(row, col)` is empty.
    ///
    /// Coordinates off the board are never empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.square(row, col) == Some(Square::Empty)
    }

    /// Checks if every square holds a mark.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Counts the marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.squares.chunks(Self::SIDE).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<&str> = row
                .iter()
                .map(|s| match s {
                    Square::Empty => "_",
                    Square::Occupied(Player::O) => "O",
                    Square::Occupied(Player::X) => "X",
                })
                .collect();
            write!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Text shown to the players when the game ends.
    pub fn announcement(&self) -> Option<String> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(format!("Player {} wins!", player)),
            GameStatus::Draw => Some("Draw!".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_marks_empty_square() {
        let mut board = Board::new();
        assert!(board.is_empty(1, 2));
        board.place(1, 2, Player::X).unwrap();
        assert!(!board.is_empty(1, 2));
        assert_eq!(board.get(Position::MiddleRight), Square::Occupied(Player::X));
    }

    #[test]
    fn test_place_rejects_occupied_square() {
        let mut board = Board::new();
        board.place(0, 0, Player::O).unwrap();
        let before = board;

        let result = board.place(0, 0, Player::X);

        assert_eq!(result, Err(MoveError::Occupied { row: 0, col: 0 }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_rejects_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(
            board.place(3, 0, Player::O),
            Err(MoveError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(
            board.place(0, 7, Player::O),
            Err(MoveError::OutOfBounds { row: 0, col: 7 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_is_empty_off_board_is_false() {
        let board = Board::new();
        assert!(!board.is_empty(3, 3));
        assert!(!board.is_empty(0, 3));
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();
        for row in 0..3 {
            for col in 0..3 {
                assert!(!board.is_full());
                board.place(row, col, Player::O).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_display_grid() {
        let mut board = Board::new();
        board.place(0, 0, Player::O).unwrap();
        board.place(2, 1, Player::X).unwrap();
        assert_eq!(board.to_string(), "O _ _\n_ _ _\n_ X _");
    }

    #[test]
    fn test_announcement() {
        assert_eq!(GameStatus::InProgress.announcement(), None);
        assert_eq!(
            GameStatus::Won(Player::O).announcement().as_deref(),
            Some("Player O wins!")
        );
        assert_eq!(GameStatus::Draw.announcement().as_deref(), Some("Draw!"));
    }
}
