//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any renderer. It maps
//! `crossterm` key events into demo inputs and deals with the one ugly
//! terminal reality: many terminals never emit key-release events, so
//! "held" has to be inferred from press/repeat timing ([`HeldKeys`]).

pub mod held;
pub mod keys;

pub use tui_arcade_types as types;

pub use held::HeldKeys;
pub use keys::{block_action, should_quit};
