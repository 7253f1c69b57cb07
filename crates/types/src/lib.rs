//! Shared types module - vocabulary common to all three demos
//!
//! This crate defines the data structures that cross crate boundaries:
//! input state, action enums, draw requests, and the deterministic RNG.
//! All types are pure data with no external dependencies, so every engine
//! crate stays portable and testable in any context (terminal, headless,
//! benches).
//!
//! # Frame Timing
//!
//! The demos run a single cooperative loop: poll input, update state,
//! draw. Delta time is sampled once per frame and used for the whole
//! update pass. The loop targets a fixed cadence:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval (~60 FPS) for platformer and Tetris |
//!
//! The sand simulation steps on its own slower interval (see the sand
//! crate), but still polls input every `TICK_MS`.
//!
//! # Examples
//!
//! ```
//! use tui_arcade_types::{BlockAction, InputState};
//!
//! let mut input = InputState::default();
//! input.right = 1.0;
//! assert_eq!(input.horizontal(), 1.0);
//!
//! let action = BlockAction::MoveLeft;
//! assert_ne!(action, BlockAction::MoveRight);
//! ```

pub mod draw;
pub mod rng;

pub use draw::{DrawList, Rect, Rgb, Surface};
pub use rng::SimpleRng;

/// Frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u64 = 16;

/// Per-frame directional intent plus the jump edge.
///
/// The four axis signals are independent (not mutually exclusive) and
/// analog-shaped: keyboard input maps a held key to `1.0`. The input
/// collector owns this struct and rewrites the axes every frame.
///
/// `jump` is an edge, not a level: the collector sets it on a fresh press
/// and the platformer engine clears it when the jump is consumed on
/// landing, so a held key cannot re-trigger. Nobody else writes it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    pub right: f32,
    pub left: f32,
    pub up: f32,
    pub down: f32,
    pub jump: bool,
}

impl InputState {
    /// Net horizontal direction in [-1, 1] (right minus left).
    pub fn horizontal(&self) -> f32 {
        self.right - self.left
    }
}

/// Discrete actions for the Tetris demo.
///
/// One key press maps to one action; there is no auto-repeat handling in
/// this demo (the original applies one move per pressed key).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockAction {
    /// Move the active piece one column left
    MoveLeft,
    /// Move the active piece one column right
    MoveRight,
    /// Drop the piece one row down (awards one point)
    SoftDrop,
    /// Rotate the active piece to its next rotation state
    Rotate,
    /// Restart after game over
    Restart,
}
