//! Event-driven game controller.
//!
//! The controller owns the board and the turn marker. It turns pointer
//! clicks into moves, asks the [`Renderer`] to redraw, evaluates the rules
//! and raises the end-of-game notice through the [`Notifier`]. Windowing,
//! drawing and dialogs stay behind those traits.

use super::error::MoveError;
use super::rules::{check_draw, check_win};
use super::types::{Board, GameStatus, Player};
use super::Position;
use tracing::{debug, info, instrument};

/// A primary-button press at window-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerDown {
    /// Horizontal pixel offset from the left edge.
    pub x: u32,
    /// Vertical pixel offset from the top edge.
    pub y: u32,
}

impl PointerDown {
    /// Creates a pointer-down event.
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Draws a complete frame of the game.
pub trait Renderer {
    /// Redraws the whole board and the turn indicator.
    fn render(&mut self, board: &Board, current: Player);
}

/// Shows a modal end-of-game message.
pub trait Notifier {
    /// Displays `message`; returns once the player has acknowledged it.
    fn notify(&mut self, message: &str);
}

/// Blocking source of pointer-down events.
pub trait InputSource {
    /// Waits for the next click. `None` means the window was closed.
    fn next_pointer_down(&mut self) -> Option<PointerDown>;
}

impl<I> InputSource for I
where
    I: Iterator<Item = PointerDown>,
{
    fn next_pointer_down(&mut self) -> Option<PointerDown> {
        self.next()
    }
}

/// Pixel layout of the square window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardGeometry {
    window_size: u32,
}

impl BoardGeometry {
    /// Creates a layout for a square window `window_size` pixels wide.
    pub fn new(window_size: u32) -> Self {
        Self { window_size }
    }

    /// Edge length of the window in pixels.
    pub fn window_size(&self) -> u32 {
        self.window_size
    }

    /// Edge length of one cell in pixels.
    pub fn cell_size(&self) -> u32 {
        self.window_size / 3
    }

    /// Maps pixel coordinates to `(row, col)` by integer division.
    ///
    /// The result is not bounds-checked: clicks on the far right or bottom
    /// edge map to index 3.
    pub fn cell_at(&self, x: u32, y: u32) -> (usize, usize) {
        let cell = self.cell_size().max(1);
        ((y / cell) as usize, (x / cell) as usize)
    }

    /// Pixel center of a cell, as `(x, y)`.
    pub fn cell_center(&self, pos: Position) -> (u32, u32) {
        let cell = self.cell_size();
        (
            pos.col() as u32 * cell + cell / 2,
            pos.row() as u32 * cell + cell / 2,
        )
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::new(600)
    }
}

/// Where the controller is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for the current player to click a cell.
    AwaitingInput,
    /// The game is over. Only [`GameController::reset`] leaves this phase.
    GameOver(GameStatus),
}

impl Phase {
    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self, Phase::GameOver(_))
    }
}

/// Drives one game from the first click to the final notice.
#[derive(Debug)]
pub struct GameController<R, N> {
    board: Board,
    current: Player,
    first: Player,
    phase: Phase,
    geometry: BoardGeometry,
    renderer: R,
    notifier: N,
}

impl<R: Renderer, N: Notifier> GameController<R, N> {
    /// Creates a controller with an empty board and `first` to move.
    ///
    /// Nothing is drawn until [`present`](Self::present) or
    /// [`run`](Self::run) is called.
    #[instrument(skip(renderer, notifier))]
    pub fn new(geometry: BoardGeometry, first: Player, renderer: R, notifier: N) -> Self {
        Self {
            board: Board::new(),
            current: first,
            first,
            phase: Phase::AwaitingInput,
            geometry,
            renderer,
            notifier,
        }
    }

    /// Draws the current state.
    pub fn present(&mut self) {
        self.renderer.render(&self.board, self.current);
    }

    /// Handles one click.
    ///
    /// On success the returned phase tells whether the game goes on. A
    /// rejected click leaves the board, the turn and the phase unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] for clicks outside the board, on an occupied
    /// cell, or after the game has ended.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn handle_pointer_down(&mut self, x: u32, y: u32) -> Result<Phase, MoveError> {
        if self.phase.is_over() {
            debug!("Click ignored, game is over");
            return Err(MoveError::GameOver);
        }

        let (row, col) = self.geometry.cell_at(x, y);
        let Some(cell) = Position::from_row_col(row, col) else {
            debug!(row, col, "Click outside the board");
            return Err(MoveError::OutOfBounds { row, col });
        };

        if let Err(e) = self.board.place(row, col, self.current) {
            debug!(error = %e, "Move rejected");
            return Err(e);
        }
        info!(%cell, "Move accepted");

        // The final notice blocks, so the new piece must be on screen first.
        self.renderer.render(&self.board, self.current);

        let status = if check_win(&self.board, self.current) {
            GameStatus::Won(self.current)
        } else if check_draw(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };

        if let Some(message) = status.announcement() {
            info!(?status, board = %self.board, "Game over");
            self.phase = Phase::GameOver(status);
            self.notifier.notify(&message);
            return Ok(self.phase);
        }

        self.current = self.current.opponent();
        self.renderer.render(&self.board, self.current);
        Ok(self.phase)
    }

    /// Runs the blocking loop until the game ends or input runs out.
    ///
    /// Draws the initial frame, then handles one event at a time. Rejected
    /// clicks are dropped.
    #[instrument(skip_all)]
    pub fn run<I: InputSource>(&mut self, input: &mut I) -> Phase {
        self.present();
        while !self.phase.is_over() {
            let Some(event) = input.next_pointer_down() else {
                info!("Input closed before the game ended");
                break;
            };
            // Rejected clicks are routine; the debug log in the handler is enough.
            let _ = self.handle_pointer_down(event.x, event.y);
        }
        self.phase
    }

    /// Starts a fresh game with the original starting player.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.board = Board::new();
        self.current = self.first;
        self.phase = Phase::AwaitingInput;
        self.present();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player who places the next mark.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the pixel layout.
    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    /// Returns the renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns the notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Returns the notifier mutably, e.g. to acknowledge a pending notice.
    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}
