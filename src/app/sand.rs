//! Sand simulation runner.
//!
//! The only demo that uses the mouse: left press or drag pours sand at
//! the hovered cell. Mouse capture is enabled for the duration of the
//! run and always released again, even when the loop errors.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;

use tui_arcade_input::should_quit;
use tui_arcade_sand::view::{self, BACKGROUND, CELL_SIZE, FIELD_MARGIN};
use tui_arcade_sand::{SandGrid, STEP_MS};
use tui_arcade_term::{Camera, FrameBuffer, PixelCanvas, TerminalRenderer, Viewport};
use tui_arcade_types::{Rgb, Surface};

use super::current_viewport;

/// World extent the camera fits (the original demo's window).
const WORLD_SIZE: f32 = 600.0;

const HUD_COLOR: Rgb = Rgb::new(230, 230, 230);

pub fn run(term: &mut TerminalRenderer) -> Result<()> {
    execute!(io::stdout(), EnableMouseCapture)?;
    let result = run_loop(term);
    let _ = execute!(io::stdout(), DisableMouseCapture);
    result
}

fn run_loop(term: &mut TerminalRenderer) -> Result<()> {
    let mut grid = SandGrid::new(1);

    let viewport = current_viewport();
    let mut canvas = PixelCanvas::new(viewport);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    let step = Duration::from_millis(STEP_MS);
    let mut last_step = Instant::now();

    loop {
        // Render.
        let viewport = current_viewport();
        let camera = Camera::fit(WORLD_SIZE, WORLD_SIZE, viewport);
        canvas.begin(viewport, camera, BACKGROUND);
        view::draw(&grid, &mut canvas);
        canvas.text(2, 0, "LEFT CLICK POURS SAND - [C] CLEARS", HUD_COLOR);
        canvas.pack_into(&mut fb);
        term.draw_swap(&mut fb)?;

        // Input.
        let timeout = step
            .checked_sub(last_step.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C')) {
                        grid.clear();
                    }
                }
                Event::Mouse(mouse) => {
                    let pouring = matches!(
                        mouse.kind,
                        MouseEventKind::Down(MouseButton::Left)
                            | MouseEventKind::Drag(MouseButton::Left)
                    );
                    if pouring {
                        if let Some((row, col)) =
                            cell_under_cursor(camera, viewport, mouse.column, mouse.row)
                        {
                            grid.paint(row, col);
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Fixed-interval automaton step.
        if last_step.elapsed() >= step {
            last_step = Instant::now();
            grid.step();
        }
    }
}

/// Map a terminal mouse position back through the camera to a grid cell.
fn cell_under_cursor(
    camera: Camera,
    viewport: Viewport,
    mouse_col: u16,
    mouse_row: u16,
) -> Option<(i32, i32)> {
    if mouse_col >= viewport.width || mouse_row >= viewport.height {
        return None;
    }

    // One terminal row is two canvas pixels; aim at the row's center.
    let screen_x = mouse_col as f32;
    let screen_y = (mouse_row as f32) * 2.0 + 1.0;

    let world_x = (screen_x - camera.pan_x) / camera.zoom;
    let world_y = (screen_y - camera.pan_y) / camera.zoom;

    let col = ((world_x - FIELD_MARGIN as f32) / CELL_SIZE as f32).floor() as i32;
    let row = ((world_y - FIELD_MARGIN as f32) / CELL_SIZE as f32).floor() as i32;
    Some((row, col))
}
