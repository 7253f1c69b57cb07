//! tui-arcade (workspace facade crate).
//!
//! Re-exports the member crates under one `tui_arcade::{...}` namespace
//! and hosts the demo runner loops the binary dispatches into.

pub use tui_arcade_input as input;
pub use tui_arcade_platformer as platformer;
pub use tui_arcade_sand as sand;
pub use tui_arcade_term as term;
pub use tui_arcade_tetris as tetris;
pub use tui_arcade_types as types;

pub mod app;
