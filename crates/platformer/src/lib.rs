//! Platformer demo - tile collision engine and world
//!
//! A small single-screen platformer: one player entity, a fixed tile map
//! with border walls and floating platforms, and ten collectible coins.
//! The interesting part is the collision core, which moves the entity in
//! whole pixels while carrying sub-pixel remainders between frames:
//!
//! - **Tile lookup** fails open: any out-of-range world coordinate reads
//!   as [`Tile::Empty`], so probes never error.
//! - **Grounded detection** probes three points one pixel below the feet
//!   (center, left edge, right edge).
//! - **Per-axis collision** resolves horizontal motion before vertical,
//!   probing three points along the leading edge and snapping to the
//!   tile boundary on contact.
//! - **Sub-pixel accumulators** keep `|hsp|` and `|vsp|` below one pixel
//!   after every step, so motion is deterministic under variable frame
//!   time without ever drawing between pixels.
//!
//! This crate is pure: no I/O, no timing, no terminal. The update path
//! takes the frame's input state and delta time; the view emits rectangle
//! draw requests against a `Surface`.

pub mod entity;
pub mod map;
pub mod physics;
pub mod view;
pub mod world;

pub use entity::Entity;
pub use map::{Tile, TileMap, MAP_HEIGHT, MAP_PIXEL_HEIGHT, MAP_PIXEL_WIDTH, MAP_WIDTH, TILE_SIZE};
pub use world::{Coin, World, MAX_COINS};
