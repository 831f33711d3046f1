//! Colors for game elements
//!
//! Solid placeholder colours; a presentation layer may swap in sprites but
//! the game stays fully playable with these alone.

/// Convert 8-bit RGB plus an alpha in [0, 255] to linear floats
pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> [f32; 4] {
    [
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        a as f32 / 255.0,
    ]
}

/// Replace the alpha channel
pub fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], (alpha / 255.0).clamp(0.0, 1.0)]
}

pub const BACKGROUND: [f32; 4] = rgba8(20, 20, 30, 255);
pub const HILLS: [f32; 4] = rgba8(35, 35, 55, 255);
pub const SCREEN: [f32; 4] = rgba8(0, 0, 0, 255);
pub const PLATFORM: [f32; 4] = rgba8(120, 80, 40, 255);
pub const ENEMY: [f32; 4] = rgba8(255, 0, 0, 255);
pub const COLLECTIBLE: [f32; 4] = rgba8(255, 215, 0, 255);
pub const GATE: [f32; 4] = rgba8(0, 255, 0, 255);

pub const PLAYER: [f32; 4] = rgba8(50, 180, 255, 255);
pub const PLAYER_ATTACK: [f32; 4] = rgba8(255, 255, 120, 255);
pub const PLAYER_FLICKER: [f32; 4] = rgba8(255, 255, 255, 255);
pub const PLAYER_DEAD: [f32; 4] = rgba8(90, 90, 90, 255);

pub const PARTICLE: [f32; 4] = rgba8(255, 200, 80, 255);
pub const RED_FLASH: [f32; 4] = rgba8(255, 0, 0, 0);
pub const FADE_BLACK: [f32; 4] = rgba8(0, 0, 0, 0);
pub const FADE_WHITE: [f32; 4] = rgba8(255, 255, 255, 0);

pub const PIP_HEALTH: [f32; 4] = rgba8(220, 40, 60, 255);
pub const PIP_COLLECTIBLE: [f32; 4] = rgba8(255, 215, 0, 255);
pub const PIP_DIM: [f32; 4] = rgba8(70, 70, 80, 255);

pub const TITLE: [f32; 4] = rgba8(255, 255, 255, 255);
pub const GAME_OVER_TITLE: [f32; 4] = rgba8(255, 0, 0, 255);
pub const VICTORY_TITLE: [f32; 4] = rgba8(0, 255, 0, 255);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba8() {
        assert_eq!(rgba8(255, 0, 255, 0), [1.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_with_alpha_clamps() {
        assert_eq!(with_alpha(RED_FLASH, 510.0)[3], 1.0);
        assert_eq!(with_alpha(RED_FLASH, 0.0)[3], 0.0);
    }
}
