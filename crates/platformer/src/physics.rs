//! Collision core: per-axis tile collision with sub-pixel motion.
//!
//! The update pipeline for one frame is fixed:
//!
//! 1. ground check (three probes one pixel below the feet)
//! 2. horizontal move calc (accelerate / decelerate toward intent)
//! 3. vertical move calc (jump state machine + gravity)
//! 4. horizontal collision, then vertical collision
//! 5. integrate whole-pixel displacement, carry sub-pixel remainders
//! 6. clamp to map bounds
//!
//! Collision snapping works on integer pixels: the candidate position is
//! masked down to the tile grid (`& !TILE_ROUND`) and offset so the
//! entity's leading edge abuts the solid tile.

use tui_arcade_types::InputState;

use crate::entity::Entity;
use crate::map::{TileMap, MAP_PIXEL_HEIGHT, MAP_PIXEL_WIDTH, TILE_ROUND, TILE_SIZE};

/// Advance an entity by one frame.
///
/// `input` is mutated in one place only: the jump edge is consumed when a
/// completed jump lands, so a held key cannot re-trigger.
pub fn step(entity: &mut Entity, map: &TileMap, input: &mut InputState, dt: f32) {
    ground_check(entity, map);
    horizontal_move(entity, input.horizontal(), dt);
    vertical_move(entity, input, dt);
    collide_horizontal(entity, map, dt);
    collide_vertical(entity, map, dt);

    let (xsp, hsp) = split_pixels(entity.vx, dt, entity.hsp);
    entity.hsp = hsp;
    let (ysp, vsp) = split_pixels(entity.vy, dt, entity.vsp);
    entity.vsp = vsp;

    entity.x += xsp as f32;
    entity.y += ysp as f32;

    entity.x = entity.x.clamp(0.0, MAP_PIXEL_WIDTH as f32);
    entity.y = entity.y.clamp(0.0, MAP_PIXEL_HEIGHT as f32);
}

/// Split one axis of motion into whole pixels plus the carried remainder.
///
/// Truncation is toward zero so the remainder keeps the sign of travel;
/// its magnitude is always below one pixel.
fn split_pixels(vel: f32, dt: f32, carry: f32) -> (i32, f32) {
    let total = vel * dt + carry;
    let pixels = total.trunc() as i32;
    (pixels, total - pixels as f32)
}

/// Probe three points one pixel below the feet: center, left edge, right
/// edge. The first hit wins; all three are equivalent in effect.
fn ground_check(entity: &mut Entity, map: &TileMap) {
    let x = entity.x as i32;
    let y = entity.y as i32 + 1;

    entity.grounded = resting_on(map, x, y)
        || resting_on(map, x - entity.width / 2, y)
        || resting_on(map, x + entity.width / 2 - 1, y);
}

/// Whether a probe point is at or below the surface of a solid tile.
fn resting_on(map: &TileMap, x: i32, y: i32) -> bool {
    map.tile_at_world(x, y).is_solid() && y >= map.surface_y(x, y)
}

/// Accelerate toward the directional intent, or decelerate to a stop.
///
/// Deceleration snaps to exactly zero when one step would overshoot, so
/// velocity never oscillates around standstill.
fn horizontal_move(entity: &mut Entity, direction: f32, dt: f32) {
    const DEAD_ZONE: f32 = 0.0;

    if direction.abs() > DEAD_ZONE {
        entity.vx += direction * entity.accel * dt;
        entity.vx = entity.vx.clamp(-entity.max_speed, entity.max_speed);
    } else if entity.vx.abs() < entity.decel * dt {
        entity.vx = 0.0;
    } else if entity.vx > 0.0 {
        entity.vx -= entity.decel * dt;
    } else {
        entity.vx += entity.decel * dt;
    }
}

fn jump(entity: &mut Entity) {
    entity.vy = entity.jump_impulse;
    entity.jumping = true;
    entity.grounded = false;
}

/// Jump state machine plus gravity.
///
/// Grounded with `jumping` still set means a jump just completed: clear
/// the flag and consume the input edge in lockstep. Airborne with the key
/// released clamps upward velocity to the release magnitude (variable
/// jump height). Fall speed is capped at the jump impulse magnitude.
fn vertical_move(entity: &mut Entity, input: &mut InputState, dt: f32) {
    if entity.grounded {
        if entity.jumping {
            entity.jumping = false;
            input.jump = false;
        } else if input.jump {
            jump(entity);
        }
    } else if entity.jumping && !input.jump {
        entity.jumping = false;
        if entity.vy < entity.jump_release {
            entity.vy = entity.jump_release;
        }
    }

    entity.vy += entity.gravity * dt;
    if entity.vy > -entity.jump_impulse {
        entity.vy = -entity.jump_impulse;
    }
}

/// Resolve horizontal motion against the tile grid.
///
/// Probes the leading vertical edge at bottom, middle and top, offset by
/// the frame's whole-pixel displacement. On contact the entity snaps to
/// the tile boundary and the axis is zeroed.
fn collide_horizontal(entity: &mut Entity, map: &TileMap, dt: f32) {
    let (xsp, _) = split_pixels(entity.vx, dt, entity.hsp);

    entity.hit_wall = false;

    let side = if xsp > 0 {
        entity.width / 2 - 1
    } else if xsp < 0 {
        -entity.width / 2
    } else {
        return;
    };

    let x = entity.x as i32;
    let y = entity.y as i32;
    let mid = -entity.height / 2;
    let top = -entity.height + 1;

    let lead = x + side + xsp;
    let hit = map.tile_at_world(lead, y).is_solid()
        || map.tile_at_world(lead, y + mid).is_solid()
        || map.tile_at_world(lead, y + top).is_solid();

    if hit {
        let snapped = if xsp > 0 {
            (lead & !TILE_ROUND) - 1 - side
        } else {
            (lead & !TILE_ROUND) + TILE_SIZE - side
        };

        entity.x = snapped as f32;
        entity.vx = 0.0;
        entity.hsp = 0.0;
        entity.hit_wall = true;
    }
}

/// Resolve vertical motion against the tile grid.
///
/// Probes the leading horizontal edge at left, center and right. Downward
/// contact sets `hit_floor`, upward contact `hit_ceiling`.
fn collide_vertical(entity: &mut Entity, map: &TileMap, dt: f32) {
    let (ysp, _) = split_pixels(entity.vy, dt, entity.vsp);

    entity.hit_ceiling = false;
    entity.hit_floor = false;

    let side = if ysp > 0 {
        0
    } else if ysp < 0 {
        -entity.height + 1
    } else {
        return;
    };

    let x = entity.x as i32;
    let y = entity.y as i32;
    let left = -entity.width / 2;
    let right = entity.width / 2 - 1;

    let lead = y + side + ysp;
    let hit = map.tile_at_world(x, lead).is_solid()
        || map.tile_at_world(x + left, lead).is_solid()
        || map.tile_at_world(x + right, lead).is_solid();

    if hit {
        let snapped = if ysp > 0 {
            entity.hit_floor = true;
            (lead & !TILE_ROUND) - 1 - side
        } else {
            entity.hit_ceiling = true;
            (lead & !TILE_ROUND) + TILE_SIZE - side
        };

        entity.y = snapped as f32;
        entity.vy = 0.0;
        entity.vsp = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Tile;
    use tui_arcade_types::InputState;

    fn floor_map() -> TileMap {
        // Solid floor along the bottom row only.
        let mut map = TileMap::empty();
        for tx in 0..crate::map::MAP_WIDTH {
            map.set_tile(tx, 11, Tile::Block);
        }
        map
    }

    fn standing_player(map: &TileMap) -> Entity {
        let mut player = Entity::player();
        player.x = 160.0;
        player.y = 175.0;
        ground_check(&mut player, map);
        assert!(player.grounded);
        player
    }

    #[test]
    fn split_pixels_truncates_toward_zero_and_carries_remainder() {
        let (px, rem) = split_pixels(90.0, 1.0 / 60.0, 0.0);
        assert_eq!(px, 1);
        assert!((rem - 0.5).abs() < 1e-4);

        let (px, rem) = split_pixels(-90.0, 1.0 / 60.0, 0.0);
        assert_eq!(px, -1);
        assert!((rem + 0.5).abs() < 1e-4);
    }

    #[test]
    fn split_pixels_remainder_stays_below_one_after_direction_flip() {
        // A reversal right after a large positive carry must not leak a
        // remainder of one pixel or more.
        let (_, carry) = split_pixels(55.0, 1.0 / 60.0, 0.0);
        let (px, rem) = split_pixels(-30.0, 1.0 / 60.0, carry);
        assert!(rem.abs() < 1.0, "remainder {rem} out of range");
        assert_eq!(px, 0);
    }

    #[test]
    fn grounded_exactly_at_tile_boundary() {
        let map = floor_map();
        let mut player = Entity::player();

        // Floor top edge is y = 176; feet at 175 rest on it.
        player.y = 175.0;
        ground_check(&mut player, &map);
        assert!(player.grounded);

        // More than one pixel up: the probe misses the tile.
        player.y = 173.0;
        ground_check(&mut player, &map);
        assert!(!player.grounded);
    }

    #[test]
    fn grounded_by_edge_probe_over_a_ledge() {
        let mut map = TileMap::empty();
        map.set_tile(5, 11, Tile::Block);
        let mut player = Entity::player();

        // Center at x=99 hangs past the tile (80..=95); only the left
        // edge probe at x - 4 still lands on it.
        player.x = 99.0;
        player.y = 175.0;
        ground_check(&mut player, &map);
        assert!(player.grounded);

        player.x = 105.0;
        ground_check(&mut player, &map);
        assert!(!player.grounded);
    }

    #[test]
    fn jump_sets_impulse_and_clears_grounded_in_one_update() {
        let map = floor_map();
        let mut player = standing_player(&map);
        let mut input = InputState {
            jump: true,
            ..InputState::default()
        };

        let dt = 1.0 / 60.0;
        vertical_move(&mut player, &mut input, dt);

        assert!(player.jumping);
        assert!(!player.grounded);
        // Gravity already integrated on the same update.
        assert_eq!(player.vy, player.jump_impulse + player.gravity * dt);
        assert!(player.vy < 0.0);
    }

    #[test]
    fn landing_consumes_the_jump_edge() {
        let map = floor_map();
        let mut player = standing_player(&map);
        player.jumping = true;
        let mut input = InputState {
            jump: true,
            ..InputState::default()
        };

        vertical_move(&mut player, &mut input, 1.0 / 60.0);

        assert!(!player.jumping);
        assert!(!input.jump, "held jump key must not re-trigger");
    }

    #[test]
    fn early_release_clamps_upward_velocity() {
        let mut player = Entity::player();
        player.grounded = false;
        player.jumping = true;
        player.vy = player.jump_impulse;
        let mut input = InputState::default();

        let dt = 1.0 / 60.0;
        vertical_move(&mut player, &mut input, dt);

        assert!(!player.jumping);
        assert_eq!(player.vy, player.jump_release + player.gravity * dt);
    }

    #[test]
    fn fall_speed_is_capped_at_jump_impulse_magnitude() {
        let map = TileMap::empty();
        let mut player = Entity::player();
        player.x = 100.0;
        player.y = 20.0;
        let mut input = InputState::default();

        for _ in 0..240 {
            step(&mut player, &map, &mut input, 1.0 / 60.0);
        }
        assert!(player.vy <= -player.jump_impulse);
    }

    #[test]
    fn decelerates_to_exact_zero() {
        let map = floor_map();
        let mut player = standing_player(&map);
        player.vx = 3.0;
        let mut input = InputState::default();

        for _ in 0..10 {
            step(&mut player, &map, &mut input, 1.0 / 60.0);
        }
        assert_eq!(player.vx, 0.0);
    }

    #[test]
    fn wall_stop_snaps_to_tile_edge() {
        let mut map = floor_map();
        // Wall column at tx=12: pixels 192..=207.
        for ty in 0..crate::map::MAP_HEIGHT {
            map.set_tile(12, ty, Tile::Block);
        }

        let mut player = standing_player(&map);
        player.x = 180.0;
        let mut input = InputState {
            right: 1.0,
            ..InputState::default()
        };

        let mut hit = false;
        for _ in 0..240 {
            step(&mut player, &map, &mut input, 1.0 / 60.0);
            if player.hit_wall {
                hit = true;
                assert_eq!(player.vx, 0.0);
                assert_eq!(player.hsp, 0.0);
                // Left edge of the wall minus half the entity width.
                assert_eq!(player.x, 192.0 - 4.0);
                break;
            }
        }
        assert!(hit, "player never reached the wall");
    }

    #[test]
    fn ceiling_stop_zeroes_upward_motion() {
        let mut map = floor_map();
        for tx in 0..crate::map::MAP_WIDTH {
            map.set_tile(tx, 9, Tile::Block);
        }

        let mut player = standing_player(&map);
        let mut input = InputState {
            jump: true,
            ..InputState::default()
        };

        let mut hit = false;
        for _ in 0..30 {
            step(&mut player, &map, &mut input, 1.0 / 60.0);
            if player.hit_ceiling {
                hit = true;
                assert_eq!(player.vy, 0.0);
                assert_eq!(player.vsp, 0.0);
                break;
            }
        }
        assert!(hit, "player never reached the ceiling");
        // Feet end up one tile below the ceiling row, head abutting it.
        assert_eq!(player.y, (10 * TILE_SIZE + player.height - 1) as f32);
    }

    #[test]
    fn accumulators_stay_sub_pixel_over_long_runs() {
        let map = TileMap::demo_level();
        let mut player = Entity::player();
        let mut input = InputState::default();

        // Vary dt and intent to shake out drift.
        let dts = [1.0 / 60.0, 1.0 / 144.0, 1.0 / 30.0, 1.0 / 90.0];
        for frame in 0..2000 {
            input.right = if frame % 7 < 4 { 1.0 } else { 0.0 };
            input.left = if frame % 11 < 3 { 1.0 } else { 0.0 };
            if frame % 50 == 0 {
                input.jump = true;
            }
            step(&mut player, &map, &mut input, dts[frame % dts.len()]);

            assert!(player.hsp.abs() < 1.0, "hsp {} at frame {}", player.hsp, frame);
            assert!(player.vsp.abs() < 1.0, "vsp {} at frame {}", player.vsp, frame);
        }
    }

    #[test]
    fn position_stays_inside_map_bounds() {
        let map = TileMap::empty();
        let mut player = Entity::player();
        let mut input = InputState {
            left: 1.0,
            ..InputState::default()
        };

        for _ in 0..600 {
            step(&mut player, &map, &mut input, 1.0 / 60.0);
            assert!(player.x >= 0.0 && player.x <= MAP_PIXEL_WIDTH as f32);
            assert!(player.y >= 0.0 && player.y <= MAP_PIXEL_HEIGHT as f32);
        }
    }
}
