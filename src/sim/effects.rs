//! Transient visual effects: screen shake, hit particles, red flash, fades
//!
//! None of this feeds back into gameplay. It lives in the simulation so that
//! it decays on the same fixed tick as everything else and stays replayable
//! under a seeded RNG.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A single hit particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining lifetime in ticks
    pub life: i32,
    /// Square size in pixels
    pub size: i32,
}

impl Particle {
    /// Advance one tick
    pub fn advance(&mut self) {
        self.pos += self.vel;
        self.vel.y += PARTICLE_GRAVITY;
        self.vel.x *= PARTICLE_DRAG;
        self.life -= 1;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Render alpha in [0, 255], proportional to remaining life
    pub fn alpha(&self) -> u8 {
        (self.life as f32 / PARTICLE_FADE_LIFE * 255.0).clamp(0.0, 255.0) as u8
    }
}

/// Randomization ranges for a particle burst
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstSpec {
    pub vx: (f32, f32),
    pub vy: (f32, f32),
    pub life: (i32, i32),
    pub size: (i32, i32),
}

impl BurstSpec {
    /// Burst emitted when an attack connects with an enemy
    pub const HIT: BurstSpec = BurstSpec {
        vx: (-4.0, 4.0),
        vy: (-6.0, -1.0),
        life: (20, 40),
        size: (2, 5),
    };

    /// Burst emitted by an enemy entering its sink animation
    pub const ENEMY_DEATH: BurstSpec = BurstSpec {
        vx: (-4.0, 4.0),
        vy: (-4.0, -1.0),
        life: (20, 35),
        size: (2, 5),
    };
}

/// Which way a fade is heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FadeKind {
    /// Black overlay clearing to reveal the level
    FromBlack,
    /// White overlay building up before the victory screen
    ToWhite,
}

/// A time-based full-screen fade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fade {
    pub kind: FadeKind,
    /// Overlay alpha in [0, 255]
    pub alpha: f32,
}

impl Fade {
    pub fn from_black() -> Self {
        Self {
            kind: FadeKind::FromBlack,
            alpha: 255.0,
        }
    }

    pub fn to_white() -> Self {
        Self {
            kind: FadeKind::ToWhite,
            alpha: 0.0,
        }
    }

    /// Step the fade; returns true once it has completed
    pub fn advance(&mut self) -> bool {
        match self.kind {
            FadeKind::FromBlack => {
                self.alpha = (self.alpha - FADE_IN_STEP).max(0.0);
                self.alpha <= 0.0
            }
            FadeKind::ToWhite => {
                self.alpha = (self.alpha + FADE_TO_WHITE_STEP).min(255.0);
                self.alpha >= 255.0
            }
        }
    }
}

/// Effect toggles derived from settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectsConfig {
    pub screen_shake: bool,
    pub red_flash: bool,
    pub particles: bool,
    pub max_particles: usize,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            screen_shake: true,
            red_flash: true,
            particles: true,
            max_particles: 500,
        }
    }
}

/// Session-wide effect state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Effects {
    pub config: EffectsConfig,
    /// Ticks of shake left
    pub shake_ticks: u32,
    /// Offset drawn for the current tick
    pub shake_offset: Vec2,
    /// Red overlay alpha in [0, RED_FLASH_ALPHA]
    pub red_flash: f32,
    pub particles: Vec<Particle>,
    pub fade: Option<Fade>,
}

impl Effects {
    pub fn new(config: EffectsConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Shake and flash after the player takes a hit
    pub fn on_player_hit(&mut self) {
        self.shake_ticks = SHAKE_TICKS;
        self.red_flash = RED_FLASH_ALPHA;
    }

    /// Spawn a burst of `PARTICLE_BURST` particles centred on `center`
    pub fn burst<R: Rng + ?Sized>(&mut self, rng: &mut R, center: Vec2, shape: BurstSpec) {
        // Draw even with particles off; the shake sequence must not depend on the toggle
        let mut spawned = Vec::with_capacity(PARTICLE_BURST);
        for _ in 0..PARTICLE_BURST {
            spawned.push(Particle {
                pos: center,
                vel: Vec2::new(
                    rng.random_range(shape.vx.0..=shape.vx.1),
                    rng.random_range(shape.vy.0..=shape.vy.1),
                ),
                life: rng.random_range(shape.life.0..=shape.life.1),
                size: rng.random_range(shape.size.0..=shape.size.1),
            });
        }
        if !self.config.particles {
            return;
        }
        self.particles.extend(spawned);
        if self.particles.len() > self.config.max_particles {
            let excess = self.particles.len() - self.config.max_particles;
            self.particles.drain(..excess);
        }
    }

    /// Once-per-tick decay of shake, flash, and particles
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.shake_ticks > 0 {
            let dx = rng.random_range(-SHAKE_INTENSITY..=SHAKE_INTENSITY);
            let dy = rng.random_range(-SHAKE_INTENSITY / 2.0..=SHAKE_INTENSITY / 2.0);
            self.shake_offset = if self.config.screen_shake {
                Vec2::new(dx.round(), dy.round())
            } else {
                Vec2::ZERO
            };
            self.shake_ticks -= 1;
        } else {
            self.shake_offset = Vec2::ZERO;
        }

        self.red_flash = (self.red_flash - RED_FLASH_DECAY).max(0.0);

        for particle in self.particles.iter_mut() {
            particle.advance();
        }
        self.particles.retain(Particle::is_alive);
    }

    /// Alpha of the red overlay to draw this tick
    pub fn visible_red_flash(&self) -> f32 {
        if self.config.red_flash {
            self.red_flash
        } else {
            0.0
        }
    }

    /// Drop every transient effect (fades included)
    pub fn clear(&mut self) {
        self.shake_ticks = 0;
        self.shake_offset = Vec2::ZERO;
        self.red_flash = 0.0;
        self.particles.clear();
        self.fade = None;
    }
}
