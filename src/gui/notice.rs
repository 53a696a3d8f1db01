//! Modal end-of-game notice.

use crate::games::tictactoe::Notifier;
use tracing::info;

/// What the player chose when dismissing the notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeChoice {
    /// Close the window.
    Quit,
    /// Clear the board and play again.
    NewGame,
}

/// Holds the game-over message until the player acknowledges it.
///
/// While a message is pending the window ignores clicks on the board.
#[derive(Debug, Default)]
pub struct GameOverNotice {
    message: Option<String>,
}

impl GameOverNotice {
    /// Message awaiting acknowledgment.
    pub fn pending(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns true while the modal is up.
    pub fn is_pending(&self) -> bool {
        self.message.is_some()
    }

    /// Dismisses the pending message.
    pub fn acknowledge(&mut self) -> Option<String> {
        self.message.take()
    }

    /// Draws the modal and returns the player's choice once made.
    pub fn show(&self, ctx: &egui::Context) -> Option<NoticeChoice> {
        let message = self.message.as_deref()?;
        let mut choice = None;
        egui::Window::new("Game over")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(message);
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if ui.button("OK").clicked() {
                            choice = Some(NoticeChoice::Quit);
                        }
                        if ui.button("New game").clicked() {
                            choice = Some(NoticeChoice::NewGame);
                        }
                    });
                });
            });
        choice
    }
}

impl Notifier for GameOverNotice {
    fn notify(&mut self, message: &str) {
        info!(notice = message, "Showing game over notice");
        self.message = Some(message.to_string());
    }
}
