//! Native window frontend built on eframe/egui.
//!
//! eframe runs in reactive mode: `update` only runs when input arrives,
//! so the game sleeps between clicks instead of polling.

mod app;
mod error;
mod notice;
mod painter;

pub use app::{TicTacToeApp, WindowController};
pub use error::PlatformError;
pub use notice::{GameOverNotice, NoticeChoice};
pub use painter::{FrameBuffer, Snapshot, board_shapes, status_text};

use crate::config::GameConfig;
use tracing::{info, instrument};

const TITLE: &str = "Tic-Tac-Toe";

/// Opens the window and plays until it is closed.
///
/// # Errors
///
/// Returns [`PlatformError`] if the window or its graphics context cannot
/// be created.
#[instrument]
pub fn run(config: GameConfig) -> Result<(), PlatformError> {
    let size = *config.window_size() as f32;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size([size, size])
            .with_resizable(false),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    info!("Opening game window");
    eframe::run_native(
        TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(TicTacToeApp::new(config)))),
    )?;
    info!("Game window closed");
    Ok(())
}
