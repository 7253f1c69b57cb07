//! Draw pass: one rectangle per cell, water blue or sand.

use tui_arcade_types::{Rect, Rgb, Surface};

use crate::sim::{Cell, SandGrid, GRID_COLS, GRID_ROWS};

/// Cell pitch in world pixels; drawn one pixel smaller for a gutter.
pub const CELL_SIZE: i32 = 15;

/// Grid offset from the world origin.
pub const FIELD_MARGIN: i32 = 9;

pub const BACKGROUND: Rgb = Rgb::new(26, 31, 40);
pub const SAND_COLOR: Rgb = Rgb::new(194, 178, 128);
pub const WATER_COLOR: Rgb = Rgb::new(59, 85, 162);

/// Issue draw requests for one frame. Never mutates the grid.
pub fn draw(grid: &SandGrid, surface: &mut impl Surface) {
    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            let color = match grid.cell(row, col) {
                Cell::Sand => SAND_COLOR,
                Cell::Empty => WATER_COLOR,
            };
            surface.rect(
                Rect::new(
                    (col * CELL_SIZE + FIELD_MARGIN) as f32,
                    (row * CELL_SIZE + FIELD_MARGIN) as f32,
                    (CELL_SIZE - 1) as f32,
                    (CELL_SIZE - 1) as f32,
                ),
                color,
            );
        }
    }
}
