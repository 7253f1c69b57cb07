//! Draw pass: grid cells, active piece and next-piece preview.
//!
//! Layout matches the classic demo: 30px cell pitch with a 1px gutter,
//! the playfield offset 11px from the top-left, and the preview in the
//! side panel.

use tui_arcade_types::{Rect, Rgb, Surface};

use crate::game::{ActivePiece, TetrisGame};
use crate::grid::{NUM_COLS, NUM_ROWS};
use crate::pieces::{PieceKind, ALL_KINDS};

/// Cell pitch in world pixels; cells are drawn one pixel smaller to
/// leave a gutter.
pub const CELL_SIZE: i32 = 30;

/// Playfield offset from the world origin.
pub const FIELD_MARGIN: i32 = 11;

pub const BACKGROUND: Rgb = Rgb::new(44, 44, 127);
pub const EMPTY_CELL: Rgb = Rgb::new(26, 31, 40);

fn color_for_id(id: u8) -> Rgb {
    ALL_KINDS
        .iter()
        .find(|kind| kind.id() == id)
        .map(|kind| kind.color())
        .unwrap_or(EMPTY_CELL)
}

fn cell_rect(row: i32, col: i32) -> Rect {
    Rect::new(
        (col * CELL_SIZE + FIELD_MARGIN) as f32,
        (row * CELL_SIZE + FIELD_MARGIN) as f32,
        (CELL_SIZE - 1) as f32,
        (CELL_SIZE - 1) as f32,
    )
}

/// Issue draw requests for one frame. Never mutates the game.
pub fn draw(game: &TetrisGame, surface: &mut impl Surface) {
    // Every grid cell, empty ones included (they form the playfield).
    for row in 0..NUM_ROWS {
        for col in 0..NUM_COLS {
            let id = game.grid.cell(row, col).unwrap_or(0);
            surface.rect(cell_rect(row, col), color_for_id(id));
        }
    }

    let color = game.active.kind.color();
    for (row, col) in game.active.footprint() {
        surface.rect(cell_rect(row, col), color);
    }

    draw_preview(game.next, surface);
}

/// Next piece in the side panel; the wide and square kinds get nudged so
/// every preview looks centered.
fn draw_preview(kind: PieceKind, surface: &mut impl Surface) {
    let (off_x, off_y) = match kind.id() {
        3 => (255, 290),
        4 => (255, 280),
        _ => (270, 270),
    };

    let piece = ActivePiece::spawn(kind);
    let color = kind.color();
    for (row, col) in piece.footprint() {
        surface.rect(
            Rect::new(
                (col * CELL_SIZE + off_x) as f32,
                (row * CELL_SIZE + off_y) as f32,
                (CELL_SIZE - 1) as f32,
                (CELL_SIZE - 1) as f32,
            ),
            color,
        );
    }
}
