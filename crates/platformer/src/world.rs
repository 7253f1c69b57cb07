//! World state: map, player, coins, score.

use tui_arcade_types::{InputState, Rect};

use crate::entity::Entity;
use crate::map::{TileMap, TILE_SIZE};
use crate::physics;

/// Number of coins in the demo level.
pub const MAX_COINS: usize = 10;

/// Coin edge length in world pixels.
pub const COIN_SIZE: f32 = 4.0;

// Tile coordinates of the coin spots; each coin sits 6px into its tile.
const COIN_SPOTS: [(i32, i32); MAX_COINS] = [
    (1, 7),
    (3, 5),
    (4, 5),
    (5, 5),
    (8, 3),
    (9, 3),
    (10, 3),
    (13, 4),
    (14, 4),
    (15, 4),
];

/// A collectible coin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coin {
    pub x: f32,
    pub y: f32,
    pub visible: bool,
}

impl Coin {
    fn at_tile(tx: i32, ty: i32) -> Self {
        Self {
            x: (tx * TILE_SIZE + 6) as f32,
            y: (ty * TILE_SIZE + 6) as f32,
            visible: true,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, COIN_SIZE, COIN_SIZE)
    }
}

/// The complete platformer world.
///
/// Owned by the frame loop and passed by reference through update and
/// draw; there is no global state.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub map: TileMap,
    pub player: Entity,
    pub coins: [Coin; MAX_COINS],
    pub score: u32,
    pub won: bool,
}

impl World {
    pub fn new() -> Self {
        Self {
            map: TileMap::demo_level(),
            player: Entity::player(),
            coins: COIN_SPOTS.map(|(tx, ty)| Coin::at_tile(tx, ty)),
            score: 0,
            won: false,
        }
    }

    /// Put the world back to its initial state (after a win).
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Advance one frame: physics, then coin collection.
    pub fn update(&mut self, input: &mut InputState, dt: f32) {
        physics::step(&mut self.player, &self.map, input, dt);
        self.collect_coins();
    }

    fn collect_coins(&mut self) {
        let player_rect = self.player.bounds();

        for coin in &mut self.coins {
            if coin.visible && player_rect.intersects(&coin.bounds()) {
                coin.visible = false;
                self.score += 1;
            }
        }

        self.won = self.score as usize == MAX_COINS;
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_world_has_all_coins_and_no_score() {
        let world = World::new();
        assert_eq!(world.score, 0);
        assert!(!world.won);
        assert!(world.coins.iter().all(|c| c.visible));
    }

    #[test]
    fn overlapping_a_coin_collects_it_once() {
        let mut world = World::new();
        let coin = world.coins[0];

        // Park the player on top of the first coin.
        world.player.x = coin.x + 2.0;
        world.player.y = coin.y + 2.0;
        world.collect_coins();

        assert_eq!(world.score, 1);
        assert!(!world.coins[0].visible);

        world.collect_coins();
        assert_eq!(world.score, 1);
    }

    #[test]
    fn collecting_every_coin_wins() {
        let mut world = World::new();
        for i in 0..MAX_COINS {
            let coin = world.coins[i];
            world.player.x = coin.x + 2.0;
            world.player.y = coin.y + 2.0;
            world.collect_coins();
        }

        assert_eq!(world.score, MAX_COINS as u32);
        assert!(world.won);
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let mut world = World::new();
        world.player.x = 30.0;
        world.coins[3].visible = false;
        world.score = 4;
        world.won = true;

        world.reset();
        assert_eq!(world, World::new());
    }
}
