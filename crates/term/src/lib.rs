//! Terminal rendering module.
//!
//! A small game-oriented rendering layer: demo views issue world-space
//! rectangle requests against a [`PixelCanvas`], which rasterizes them
//! through a camera transform into a half-block pixel buffer (every
//! terminal row carries two pixel rows via '▀'), packs that into a
//! [`FrameBuffer`] of styled character cells, and the
//! [`TerminalRenderer`] flushes only the cells that changed since the
//! previous frame.
//!
//! Goals:
//! - Keep the engine crates free of any terminal dependency
//! - Show sub-tile pixel motion, which per-cell drawing cannot
//! - Cheap frames: diff-based flushing, full redraw only on resize

pub mod canvas;
pub mod fb;
pub mod renderer;

pub use tui_arcade_types as types;

pub use canvas::{Camera, PixelCanvas, Viewport};
pub use fb::{Cell, FrameBuffer};
pub use renderer::TerminalRenderer;
