//! eframe application hosting the game controller.

use super::notice::{GameOverNotice, NoticeChoice};
use super::painter::{self, FrameBuffer};
use crate::config::GameConfig;
use crate::games::tictactoe::GameController;
use egui::{Color32, Pos2};
use tracing::{debug, info, instrument};

/// Controller wired to the window's renderer and notifier.
pub type WindowController = GameController<FrameBuffer, GameOverNotice>;

/// Native window for one game.
pub struct TicTacToeApp {
    controller: WindowController,
}

impl TicTacToeApp {
    /// Creates the app and renders the opening frame.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        let mut controller = GameController::new(
            config.geometry(),
            *config.first_player(),
            FrameBuffer::default(),
            GameOverNotice::default(),
        );
        controller.present();
        Self { controller }
    }

    /// Returns the controller.
    pub fn controller(&self) -> &WindowController {
        &self.controller
    }

    /// Feeds this frame's primary-button presses to the controller, one at a time.
    fn handle_presses(&mut self, presses: &[Pos2], origin: Pos2) {
        for &pos in presses {
            if self.controller.notifier().is_pending() {
                debug!("Modal open, click dropped");
                break;
            }
            let local = pos - origin;
            if local.x < 0.0 || local.y < 0.0 {
                continue;
            }
            // Invalid clicks are silently ignored.
            let _ = self
                .controller
                .handle_pointer_down(local.x as u32, local.y as u32);
        }
    }

    /// Dismisses the game-over notice. Returns true if the window should close.
    fn apply_choice(&mut self, choice: NoticeChoice) -> bool {
        self.controller.notifier_mut().acknowledge();
        match choice {
            NoticeChoice::Quit => true,
            NoticeChoice::NewGame => {
                self.controller.reset();
                false
            }
        }
    }
}

impl std::fmt::Debug for TicTacToeApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicTacToeApp")
            .field("phase", &self.controller.phase())
            .finish()
    }
}

/// Primary-button presses delivered since the last frame.
fn primary_presses(ctx: &egui::Context) -> Vec<Pos2> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed: true,
                    ..
                } => Some(*pos),
                _ => None,
            })
            .collect()
    })
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let presses = primary_presses(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| {
                let origin = ui.max_rect().min;
                self.handle_presses(&presses, origin);

                let geometry = self.controller.geometry();
                if let Some(snapshot) = self.controller.renderer().latest() {
                    painter::paint(ui.painter(), geometry, origin, snapshot);
                }
            });

        if let Some(choice) = self.controller.notifier().show(ctx) {
            if self.apply_choice(choice) {
                info!("Closing window");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            } else {
                ctx.request_repaint();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameStatus, Phase, Player, Square};

    #[test]
    fn test_opening_frame_rendered() {
        let app = TicTacToeApp::new(GameConfig::default());
        let snapshot = app.controller().renderer().latest().unwrap();
        assert_eq!(snapshot.current, Player::O);
        assert!(!snapshot.board.is_full());
    }

    #[test]
    fn test_presses_are_offset_by_panel_origin() {
        let mut app = TicTacToeApp::new(GameConfig::default());
        app.handle_presses(&[Pos2::new(250.0, 450.0)], Pos2::new(50.0, 50.0));
        assert_eq!(app.controller().board().square(2, 1), Some(Square::Occupied(Player::O)));
    }

    #[test]
    fn test_presses_left_of_panel_dropped() {
        let mut app = TicTacToeApp::new(GameConfig::default());
        app.handle_presses(&[Pos2::new(10.0, 10.0)], Pos2::new(50.0, 50.0));
        assert_eq!(app.controller().current_player(), Player::O);
    }

    #[test]
    fn test_presses_dropped_while_notice_open() {
        let mut app = TicTacToeApp::new(GameConfig::default());
        // O takes the left column, X the middle one.
        let presses = [
            Pos2::new(10.0, 10.0),
            Pos2::new(210.0, 10.0),
            Pos2::new(10.0, 210.0),
            Pos2::new(210.0, 210.0),
            Pos2::new(10.0, 410.0),
            Pos2::new(410.0, 410.0),
        ];
        app.handle_presses(&presses, Pos2::ZERO);

        assert_eq!(
            app.controller().phase(),
            Phase::GameOver(GameStatus::Won(Player::O))
        );
        assert_eq!(app.controller().notifier().pending(), Some("Player O wins!"));
        assert_eq!(app.controller().board().square(2, 2), Some(Square::Empty));
    }

    fn win_for_o(app: &mut TicTacToeApp) {
        let presses = [
            Pos2::new(10.0, 10.0),
            Pos2::new(210.0, 10.0),
            Pos2::new(10.0, 210.0),
            Pos2::new(210.0, 210.0),
            Pos2::new(10.0, 410.0),
        ];
        app.handle_presses(&presses, Pos2::ZERO);
    }

    #[test]
    fn test_new_game_choice_resets_and_accepts_clicks() {
        let mut app = TicTacToeApp::new(GameConfig::default());
        win_for_o(&mut app);
        assert!(app.controller().phase().is_over());

        let close = app.apply_choice(NoticeChoice::NewGame);

        assert!(!close);
        assert!(!app.controller().notifier().is_pending());
        assert_eq!(app.controller().phase(), Phase::AwaitingInput);
        assert_eq!(app.controller().current_player(), Player::O);
        let snapshot = app.controller().renderer().latest().unwrap();
        assert_eq!(snapshot.board, *app.controller().board());

        app.handle_presses(&[Pos2::new(450.0, 450.0)], Pos2::ZERO);
        assert_eq!(app.controller().board().square(2, 2), Some(Square::Occupied(Player::O)));
        assert_eq!(app.controller().current_player(), Player::X);
    }

    #[test]
    fn test_quit_choice_closes_window() {
        let mut app = TicTacToeApp::new(GameConfig::default());
        win_for_o(&mut app);

        assert!(app.apply_choice(NoticeChoice::Quit));
        assert!(!app.controller().notifier().is_pending());
        assert!(app.controller().phase().is_over());
    }
}
