//! Platformer runner.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use tui_arcade_input::{should_quit, HeldKeys};
use tui_arcade_platformer::view::{self, BACKGROUND};
use tui_arcade_platformer::{World, MAP_PIXEL_HEIGHT, MAP_PIXEL_WIDTH};
use tui_arcade_term::{Camera, FrameBuffer, PixelCanvas, TerminalRenderer};
use tui_arcade_types::{InputState, Rgb, Surface, TICK_MS};

use super::current_viewport;

const HUD_COLOR: Rgb = Rgb::new(230, 230, 230);

pub fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut world = World::new();
    let mut held = HeldKeys::new();
    let mut input = InputState::default();

    let viewport = current_viewport();
    let mut canvas = PixelCanvas::new(viewport);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    let tick = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let viewport = current_viewport();
        let camera = Camera::fit(MAP_PIXEL_WIDTH as f32, MAP_PIXEL_HEIGHT as f32, viewport);
        canvas.begin(viewport, camera, BACKGROUND);
        view::draw(&world, &mut canvas);
        canvas.text(2, 0, &format!("SCORE: {}", world.score), HUD_COLOR);
        if world.won {
            let msg = "PRESS [ENTER] TO PLAY AGAIN";
            let col = (viewport.width.saturating_sub(msg.len() as u16)) / 2;
            canvas.text(col, viewport.height / 2, msg, HUD_COLOR);
        }
        canvas.pack_into(&mut fb);
        term.draw_swap(&mut fb)?;

        // Input, with a timeout that lands on the next tick.
        let timeout = tick
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if world.won && key.code == KeyCode::Enter {
                            world.reset();
                            held.reset(&mut input);
                        }
                        held.key_press(key.code, &mut input);
                    }
                    KeyEventKind::Release => held.key_release(key.code, &mut input),
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Update with the frame's measured delta time.
        if last_tick.elapsed() >= tick {
            let dt = last_tick.elapsed().as_secs_f32();
            last_tick = Instant::now();

            held.update(&mut input);
            world.update(&mut input, dt);
        }
    }
}
