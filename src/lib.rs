//! Knights and Dungeons - a side-scrolling action platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, enemies, collisions, effects, session flow)
//! - `renderer`: Frame description for an external presentation layer
//! - `settings`: Read-only player preferences
//! - `autopilot`: Scripted input source for demo runs and tests

pub mod autopilot;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use autopilot::Autopilot;
pub use settings::{EnemyRemoval, QualityPreset, Settings};

/// Game configuration constants
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Viewport dimensions
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 480.0;

    /// World dimensions
    pub const LEVEL_WIDTH: f32 = 3000.0;
    pub const LEVEL_HEIGHT: f32 = 480.0;

    /// Player body
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    pub const PLAYER_SPAWN_Y: f32 = 300.0;
    pub const PLAYER_MAX_HEALTH: i32 = 3;

    /// Horizontal run speed (px/tick, no acceleration)
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Initial jump velocity (negative is up)
    pub const JUMP_POWER: f32 = -15.0;
    /// Gravity while alive (px/tick²)
    pub const GRAVITY: f32 = 0.7;
    /// Gravity during the death sequence
    pub const DEATH_GRAVITY: f32 = 1.0;

    pub const INVINCIBLE_TICKS: u32 = 90;
    pub const KNOCKBACK_TICKS: u32 = 18;
    pub const KNOCKBACK_SPEED: f32 = 10.0;
    pub const DEATH_TICKS: u32 = 60;

    /// Attack window: 200ms at 60 Hz
    pub const ATTACK_COOLDOWN_TICKS: u64 = 12;
    pub const ATTACK_HITBOX_WIDTH: f32 = 50.0;
    pub const ATTACK_HITBOX_HEIGHT: f32 = 40.0;

    /// Invincibility flicker half-period in milliseconds
    pub const FLICKER_PERIOD_MS: u64 = 120;

    /// Enemy body
    pub const ENEMY_SIZE: f32 = 40.0;
    pub const ENEMY_SINK_SPEED: f32 = 2.0;

    pub const COLLECTIBLE_SIZE: f32 = 20.0;

    /// Screen shake
    pub const SHAKE_TICKS: u32 = 14;
    pub const SHAKE_INTENSITY: f32 = 8.0;

    /// Full-screen red flash
    pub const RED_FLASH_ALPHA: f32 = 140.0;
    pub const RED_FLASH_DECAY: f32 = 6.0;

    /// Particles
    pub const PARTICLE_BURST: usize = 12;
    pub const PARTICLE_GRAVITY: f32 = 0.15;
    pub const PARTICLE_DRAG: f32 = 0.99;
    /// Lifetime at which a particle renders fully opaque
    pub const PARTICLE_FADE_LIFE: f32 = 40.0;

    /// Fade transitions (alpha change per tick)
    pub const FADE_IN_STEP: f32 = 15.0;
    pub const FADE_TO_WHITE_STEP: f32 = 8.5;

    /// Background parallax factor
    pub const PARALLAX_FACTOR: f32 = 0.5;
}

/// Convert a tick count to elapsed milliseconds at the fixed tick rate
#[inline]
pub fn ticks_to_ms(ticks: u64) -> u64 {
    ticks * 1000 / consts::TICK_RATE as u64
}
