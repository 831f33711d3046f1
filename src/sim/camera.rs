//! Horizontal scrolling camera

use glam::Vec2;

use crate::consts::{LEVEL_WIDTH, PARALLAX_FACTOR, VIEWPORT_WIDTH};

/// Scroll offset for a player centred at `player_center_x`, clamped to the
/// level, with the current shake added after clamping
pub fn camera_offset(player_center_x: f32, shake: Vec2) -> Vec2 {
    let x = (player_center_x - VIEWPORT_WIDTH / 2.0).clamp(0.0, LEVEL_WIDTH - VIEWPORT_WIDTH);
    Vec2::new(x, 0.0) + shake
}

/// Background layer offset
#[inline]
pub fn parallax_offset(camera: Vec2) -> Vec2 {
    Vec2::new(camera.x * PARALLAX_FACTOR, camera.y)
}
