//! Falling-sand demo - a small cellular automaton
//!
//! Every step, each sand grain tries (in order): straight down, a random
//! diagonal when both are free, the single free diagonal, rest. The
//! update is double-buffered, scanning each column bottom-up, and
//! anything outside the grid counts as occupied so grains pile up on the
//! floor and against the walls.
//!
//! Grains are painted in with a brush (mouse in the terminal app). The
//! simulation steps on a fixed 50ms interval, independent of the input
//! poll rate.

pub mod sim;
pub mod view;

pub use sim::{Cell, SandGrid, GRID_COLS, GRID_ROWS, STEP_MS};
