//! Moving entity: an axis-aligned box with per-axis sub-pixel motion.

use tui_arcade_types::Rect;

use crate::map::{MAP_PIXEL_HEIGHT, MAP_PIXEL_WIDTH, TILE_SIZE};

/// Player max run speed in px/sec (tuned at 60 FPS, converted to seconds).
pub const PLAYER_MAX_SPEED: f32 = 1.5625 * 60.0;

/// Player ground/air acceleration in px/sec^2.
pub const PLAYER_ACCEL: f32 = 0.118164 * 60.0 * 60.0;

/// Player deceleration toward standstill in px/sec^2.
pub const PLAYER_DECEL: f32 = 0.113281 * 60.0 * 60.0;

/// Gravity in px/sec^2.
pub const PLAYER_GRAVITY: f32 = 0.363281 * 60.0 * 60.0;

/// Jump impulse in px/sec; negative is up.
pub const PLAYER_JUMP_IMPULSE: f32 = -6.5625 * 60.0;

/// Upward velocity is clamped to this when the jump key is released
/// early (variable jump height).
pub const PLAYER_JUMP_RELEASE: f32 = PLAYER_JUMP_IMPULSE * 0.2;

/// A moving axis-aligned box.
///
/// `x` is the horizontal center and `y` the feet row, both in world
/// pixels: the drawn box spans `x - width/2 .. x + width/2` horizontally
/// and `y - height + 1 ..= y` vertically. `hsp`/`vsp` carry the sub-pixel
/// remainder of motion not yet applied as whole pixels; both stay below
/// one pixel in magnitude between frames.
///
/// The hit flags (`hit_floor`, `hit_ceiling`, `hit_wall`) are transient
/// per-frame outputs of collision resolution, never carried across
/// frames.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub width: i32,
    pub height: i32,

    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub hsp: f32,
    pub vsp: f32,

    pub max_speed: f32,
    pub accel: f32,
    pub decel: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub jump_release: f32,

    pub grounded: bool,
    pub jumping: bool,
    pub hit_floor: bool,
    pub hit_ceiling: bool,
    pub hit_wall: bool,
}

impl Entity {
    /// The player at its spawn position with demo tuning.
    pub fn player() -> Self {
        Self {
            width: 8,
            height: 16,

            x: (MAP_PIXEL_WIDTH as f32) * 0.5,
            y: (MAP_PIXEL_HEIGHT - TILE_SIZE - 1) as f32,
            vx: 0.0,
            vy: 0.0,
            hsp: 0.0,
            vsp: 0.0,

            max_speed: PLAYER_MAX_SPEED,
            accel: PLAYER_ACCEL,
            decel: PLAYER_DECEL,
            gravity: PLAYER_GRAVITY,
            jump_impulse: PLAYER_JUMP_IMPULSE,
            jump_release: PLAYER_JUMP_RELEASE,

            grounded: false,
            jumping: false,
            hit_floor: false,
            hit_ceiling: false,
            hit_wall: false,
        }
    }

    /// Bounding box in world pixels.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.x - (self.width as f32) * 0.5,
            self.y - (self.height as f32) + 1.0,
            self.width as f32,
            self.height as f32,
        )
    }
}
