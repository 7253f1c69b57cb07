//! Tetris runner.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_arcade_input::{block_action, should_quit};
use tui_arcade_term::{Camera, FrameBuffer, PixelCanvas, TerminalRenderer};
use tui_arcade_tetris::view::{self, BACKGROUND};
use tui_arcade_tetris::TetrisGame;
use tui_arcade_types::{BlockAction, Rgb, Surface, TICK_MS};

use super::current_viewport;

/// World extent the camera fits: playfield plus the side panel.
const WORLD_WIDTH: f32 = 500.0;
const WORLD_HEIGHT: f32 = 620.0;

const HUD_COLOR: Rgb = Rgb::new(230, 230, 230);

pub fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = TetrisGame::new(1);

    let viewport = current_viewport();
    let mut canvas = PixelCanvas::new(viewport);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    let tick = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let viewport = current_viewport();
        let camera = Camera::fit(WORLD_WIDTH, WORLD_HEIGHT, viewport);
        canvas.begin(viewport, camera, BACKGROUND);
        view::draw(&game, &mut canvas);
        canvas.text(2, 0, &format!("SCORE: {}", game.score), HUD_COLOR);
        if game.game_over {
            let msg = "GAME OVER - PRESS ANY KEY";
            let col = (viewport.width.saturating_sub(msg.len() as u16)) / 2;
            canvas.text(col, viewport.height / 2, msg, HUD_COLOR);
        }
        canvas.pack_into(&mut fb);
        term.draw_swap(&mut fb)?;

        // Input.
        let timeout = tick
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if game.game_over {
                        // Any key restarts a finished game.
                        game.apply_action(BlockAction::Restart);
                    } else if let Some(action) = block_action(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity advances on measured elapsed time.
        if last_tick.elapsed() >= tick {
            let elapsed_ms = last_tick.elapsed().as_millis() as u64;
            last_tick = Instant::now();
            game.tick(elapsed_ms);
        }
    }
}
