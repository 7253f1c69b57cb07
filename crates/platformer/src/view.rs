//! Draw pass: emits rectangle requests for the map, coins and player.

use tui_arcade_types::{Rect, Rgb, Surface};

use crate::map::{MAP_HEIGHT, MAP_WIDTH, TILE_SIZE};
use crate::world::World;

pub const BACKGROUND: Rgb = Rgb::new(245, 245, 245);
pub const TILE_COLOR: Rgb = Rgb::new(130, 130, 130);
pub const COIN_COLOR: Rgb = Rgb::new(255, 203, 0);
pub const PLAYER_COLOR: Rgb = Rgb::new(230, 41, 55);

/// Issue draw requests for one frame. Never mutates the world.
pub fn draw(world: &World, surface: &mut impl Surface) {
    for ty in 0..MAP_HEIGHT {
        for tx in 0..MAP_WIDTH {
            if world.map.tile(tx, ty).is_solid() {
                surface.rect(
                    Rect::new(
                        (tx * TILE_SIZE) as f32,
                        (ty * TILE_SIZE) as f32,
                        TILE_SIZE as f32,
                        TILE_SIZE as f32,
                    ),
                    TILE_COLOR,
                );
            }
        }
    }

    for coin in world.coins.iter().filter(|c| c.visible) {
        surface.rect(coin.bounds(), COIN_COLOR);
    }

    surface.rect(world.player.bounds(), PLAYER_COLOR);
}
