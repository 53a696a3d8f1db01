//! Frame snapshots and how they are drawn.

use crate::games::tictactoe::{Board, BoardGeometry, Player, Position, Renderer, Square};
use egui::{Align2, Color32, FontId, Pos2, Shape, Stroke, Vec2};

const GRID_INSET: f32 = 20.0;
const GRID_WIDTH: f32 = 4.0;
const MARK_WIDTH: f32 = 8.0;
const STATUS_FONT_SIZE: f32 = 24.0;

/// Everything needed to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// Board contents.
    pub board: Board,
    /// Player shown in the turn indicator.
    pub current: Player,
}

/// Back buffer for the window.
///
/// The controller writes whole frames here; the next repaint shows the
/// latest one in a single pass, so half-drawn frames are never visible.
#[derive(Debug, Default)]
pub struct FrameBuffer {
    latest: Option<Snapshot>,
    rendered: u64,
}

impl FrameBuffer {
    /// Latest complete frame, if any has been rendered.
    pub fn latest(&self) -> Option<&Snapshot> {
        self.latest.as_ref()
    }

    /// Number of frames rendered so far.
    pub fn rendered(&self) -> u64 {
        self.rendered
    }
}

impl Renderer for FrameBuffer {
    fn render(&mut self, board: &Board, current: Player) {
        self.latest = Some(Snapshot {
            board: *board,
            current,
        });
        self.rendered += 1;
    }
}

/// Grid lines and marks for `snapshot`, offset by `origin`.
pub fn board_shapes(geometry: BoardGeometry, origin: Pos2, snapshot: &Snapshot) -> Vec<Shape> {
    let size = geometry.window_size() as f32;
    let cell = geometry.cell_size() as f32;
    let grid = Stroke::new(GRID_WIDTH, Color32::WHITE);
    let mut shapes = Vec::new();

    for i in 1..3 {
        let at = i as f32 * cell;
        shapes.push(Shape::line_segment(
            [origin + Vec2::new(at, GRID_INSET), origin + Vec2::new(at, size - GRID_INSET)],
            grid,
        ));
        shapes.push(Shape::line_segment(
            [origin + Vec2::new(GRID_INSET, at), origin + Vec2::new(size - GRID_INSET, at)],
            grid,
        ));
    }

    for pos in Position::ALL {
        let (x, y) = geometry.cell_center(pos);
        let center = origin + Vec2::new(x as f32, y as f32);
        match snapshot.board.get(pos) {
            Square::Empty => {}
            Square::Occupied(Player::O) => {
                shapes.push(Shape::circle_stroke(
                    center,
                    cell / 3.0,
                    Stroke::new(MARK_WIDTH, Color32::LIGHT_BLUE),
                ));
            }
            Square::Occupied(Player::X) => {
                let off = cell / 4.0;
                let stroke = Stroke::new(MARK_WIDTH, Color32::LIGHT_RED);
                shapes.push(Shape::line_segment(
                    [center + Vec2::new(-off, -off), center + Vec2::new(off, off)],
                    stroke,
                ));
                shapes.push(Shape::line_segment(
                    [center + Vec2::new(off, -off), center + Vec2::new(-off, off)],
                    stroke,
                ));
            }
        }
    }

    shapes
}

/// Text of the turn indicator.
pub fn status_text(current: Player) -> String {
    format!("Current turn: {}", current)
}

/// Paints a full frame. The panel fill has already cleared the background.
pub fn paint(painter: &egui::Painter, geometry: BoardGeometry, origin: Pos2, snapshot: &Snapshot) {
    painter.extend(board_shapes(geometry, origin, snapshot));
    painter.text(
        origin + Vec2::new(10.0, 10.0),
        Align2::LEFT_TOP,
        status_text(snapshot.current),
        FontId::proportional(STATUS_FONT_SIZE),
        Color32::YELLOW,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(marks: &[(usize, usize, Player)]) -> Snapshot {
        let mut board = Board::new();
        for &(row, col, player) in marks {
            board.place(row, col, player).unwrap();
        }
        Snapshot {
            board,
            current: Player::O,
        }
    }

    #[test]
    fn test_empty_board_draws_grid_only() {
        let shapes = board_shapes(BoardGeometry::new(600), Pos2::ZERO, &snapshot(&[]));
        assert_eq!(shapes.len(), 4);
    }

    #[test]
    fn test_marks_add_shapes() {
        let shapes = board_shapes(
            BoardGeometry::new(600),
            Pos2::ZERO,
            &snapshot(&[(0, 0, Player::O), (1, 1, Player::X)]),
        );
        // 4 grid lines + 1 circle + 2 strokes for the cross
        assert_eq!(shapes.len(), 7);
    }

    #[test]
    fn test_frame_buffer_keeps_latest() {
        let mut buffer = FrameBuffer::default();
        assert!(buffer.latest().is_none());

        let mut board = Board::new();
        buffer.render(&board, Player::O);
        board.place(2, 2, Player::O).unwrap();
        buffer.render(&board, Player::X);

        assert_eq!(buffer.rendered(), 2);
        let latest = buffer.latest().unwrap();
        assert_eq!(latest.board, board);
        assert_eq!(latest.current, Player::X);
    }

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(Player::X), "Current turn: X");
    }
}
