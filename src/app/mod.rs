//! Demo runner loops.
//!
//! One function per demo, all with the same shape: an explicit frame
//! loop that draws, drains terminal events with a poll timeout until the
//! next tick, and then updates the simulation with the frame's measured
//! delta time. Drawing never mutates simulation state; quit is checked
//! once per frame.

pub mod platformer;
pub mod sand;
pub mod tetris;

use tui_arcade_term::Viewport;

/// Current terminal size, with a sane fallback when it cannot be read.
pub(crate) fn current_viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}
