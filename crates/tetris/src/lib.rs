//! Tetris demo - line-clear grid engine and game state
//!
//! The grid engine is deliberately split into three independent
//! operations the game composes:
//!
//! - [`Grid::fits`] checks occupancy only (no bounds check),
//! - [`Grid::is_outside`] checks bounds only,
//! - [`Grid::lock`] writes a footprint and trusts the caller to have
//!   validated both.
//!
//! Row clearing is a single bottom-to-top pass with a compaction
//! counter: full rows are emptied, and every non-full row above them
//! drops by the number of clears beneath it.
//!
//! The crate is pure: the game takes discrete [`BlockAction`]s and
//! elapsed milliseconds, and the view emits rectangle draw requests.
//!
//! [`BlockAction`]: tui_arcade_types::BlockAction

pub mod bag;
pub mod game;
pub mod grid;
pub mod pieces;
pub mod view;

pub use bag::ShapeBag;
pub use game::{ActivePiece, TetrisGame, GRAVITY_MS};
pub use grid::{Grid, NUM_COLS, NUM_ROWS};
pub use pieces::PieceKind;
