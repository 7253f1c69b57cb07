//! Tile map - fixed-size grid of collision tiles.
//!
//! The map is built once at level load and not mutated afterwards (no
//! destructible tiles). Lookups are by world pixel coordinate and fail
//! open: anything outside the map reads as [`Tile::Empty`], so collision
//! probes never need a separate validity check.

/// Tile edge length in world pixels.
pub const TILE_SIZE: i32 = 16;

/// Mask helper for snapping world coordinates to tile boundaries.
pub const TILE_ROUND: i32 = TILE_SIZE - 1;

/// Map width in tiles.
pub const MAP_WIDTH: i32 = 20;

/// Map height in tiles.
pub const MAP_HEIGHT: i32 = 12;

/// Map width in world pixels.
pub const MAP_PIXEL_WIDTH: i32 = MAP_WIDTH * TILE_SIZE;

/// Map height in world pixels.
pub const MAP_PIXEL_HEIGHT: i32 = MAP_HEIGHT * TILE_SIZE;

const MAP_SIZE: usize = (MAP_WIDTH * MAP_HEIGHT) as usize;

/// Collision code of a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tile {
    /// No collision.
    #[default]
    Empty,
    /// Solid block.
    Block,
}

impl Tile {
    pub fn is_solid(self) -> bool {
        matches!(self, Tile::Block)
    }
}

/// Fixed 20x12 grid of collision tiles, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    tiles: [Tile; MAP_SIZE],
}

impl TileMap {
    /// Create a map with no solid tiles.
    pub fn empty() -> Self {
        Self {
            tiles: [Tile::Empty; MAP_SIZE],
        }
    }

    /// Build the demo level: border walls plus a few floating platforms.
    pub fn demo_level() -> Self {
        let mut map = Self::empty();

        for ty in 0..MAP_HEIGHT {
            for tx in 0..MAP_WIDTH {
                if ty == 0 || tx == 0 || ty == MAP_HEIGHT - 1 || tx == MAP_WIDTH - 1 {
                    map.set_tile(tx, ty, Tile::Block);
                }
            }
        }

        for tx in 3..=5 {
            map.set_tile(tx, 8, Tile::Block);
        }
        for tx in 8..=10 {
            map.set_tile(tx, 6, Tile::Block);
        }
        for tx in 13..=15 {
            map.set_tile(tx, 7, Tile::Block);
        }
        map.set_tile(1, 10, Tile::Block);

        map
    }

    #[inline(always)]
    fn index(tx: i32, ty: i32) -> Option<usize> {
        if tx < 0 || tx >= MAP_WIDTH || ty < 0 || ty >= MAP_HEIGHT {
            return None;
        }
        Some((ty * MAP_WIDTH + tx) as usize)
    }

    /// Tile at grid coordinates; out-of-range reads are `Empty`.
    pub fn tile(&self, tx: i32, ty: i32) -> Tile {
        match Self::index(tx, ty) {
            Some(idx) => self.tiles[idx],
            None => Tile::Empty,
        }
    }

    /// Set a tile during level construction. Out-of-range writes are
    /// ignored.
    pub fn set_tile(&mut self, tx: i32, ty: i32, tile: Tile) {
        if let Some(idx) = Self::index(tx, ty) {
            self.tiles[idx] = tile;
        }
    }

    /// Tile at a world pixel coordinate; anything outside the map is
    /// `Empty`.
    pub fn tile_at_world(&self, x: i32, y: i32) -> Tile {
        if x < 0 || y < 0 {
            return Tile::Empty;
        }
        self.tile(x / TILE_SIZE, y / TILE_SIZE)
    }

    /// Pixel y an entity's feet can rest at for the tile under the given
    /// world coordinate: the row just above a solid tile's top edge, or
    /// the probe y unchanged when the tile is empty.
    pub fn surface_y(&self, x: i32, y: i32) -> i32 {
        match self.tile_at_world(x, y) {
            Tile::Empty => y,
            Tile::Block => (y & !TILE_ROUND) - 1,
        }
    }
}
