//! Draw detection logic for tic-tac-toe.

use super::super::{Board, GameStatus, Player};
use super::win::check_win;
use tracing::instrument;

/// Checks if the game is drawn: the board is full and nobody has a line.
#[instrument(skip(board))]
pub fn check_draw(board: &Board) -> bool {
    board.is_full() && !check_win(board, Player::O) && !check_win(board, Player::X)
}

/// Evaluates the board from scratch. Wins take precedence over draws.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> GameStatus {
    if let Some(winner) = [Player::O, Player::X]
        .into_iter()
        .find(|&player| check_win(board, player))
    {
        GameStatus::Won(winner)
    } else if check_draw(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(rows: [&str; 3]) -> Board {
        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, mark) in line.chars().enumerate() {
                match mark {
                    'O' => board.place(row, col, Player::O).unwrap(),
                    'X' => board.place(row, col, Player::X).unwrap(),
                    _ => {}
                }
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!check_draw(&Board::new()));
        assert_eq!(outcome(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = board_from(["OXO", "OXX", "XOO"]);
        assert!(!check_win(&board, Player::O));
        assert!(!check_win(&board, Player::X));
        assert!(check_draw(&board));
        assert_eq!(outcome(&board), GameStatus::Draw);
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = board_from(["OOO", "XXO", "XOX"]);
        assert!(board.is_full());
        assert!(!check_draw(&board));
        assert_eq!(outcome(&board), GameStatus::Won(Player::O));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let board = board_from(["OX_", "___", "___"]);
        assert!(!check_draw(&board));
        assert_eq!(outcome(&board), GameStatus::InProgress);
    }
}
