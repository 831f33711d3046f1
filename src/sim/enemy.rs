//! Patrolling enemies

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::effects::{BurstSpec, Effects};
use crate::consts::*;

/// A patrolling enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub rect: Aabb,
    /// Left patrol bound
    pub start_x: f32,
    pub patrol_width: f32,
    pub speed: f32,
    /// +1 right, -1 left
    pub direction: f32,
    /// Ticks of sink animation left
    pub death_anim_ticks: u32,
    /// Set by `flash_and_kill`; the enemy no longer fights
    pub dying: bool,
}

impl Enemy {
    pub fn new(id: u32, x: f32, y: f32, patrol_width: f32, speed: f32) -> Self {
        Self {
            id,
            rect: Aabb::new(x, y, ENEMY_SIZE, ENEMY_SIZE),
            start_x: x,
            patrol_width,
            speed,
            direction: 1.0,
            death_anim_ticks: 0,
            dying: false,
        }
    }

    /// Advance patrol or sink animation by one tick
    pub fn update(&mut self) {
        if self.death_anim_ticks > 0 {
            self.death_anim_ticks -= 1;
            self.rect.pos.y += ENEMY_SINK_SPEED;
            return;
        }
        if self.dying {
            return;
        }

        // Overshoot is allowed; only the direction flips
        self.rect.pos.x += self.speed * self.direction;
        let x = self.rect.pos.x;
        if x > self.start_x + self.patrol_width || x < self.start_x {
            self.direction = -self.direction;
        }
    }

    /// Emit a death burst and start a single-tick sink animation
    pub fn flash_and_kill<R: Rng + ?Sized>(&mut self, rng: &mut R, effects: &mut Effects) {
        if self.dying {
            return;
        }
        effects.burst(rng, self.rect.center(), BurstSpec::ENEMY_DEATH);
        self.dying = true;
        self.death_anim_ticks = 1;
    }

    /// Can still hurt the player or be hit
    pub fn is_active(&self) -> bool {
        !self.dying
    }

    /// Sink animation has played out; ready for removal
    pub fn is_finished(&self) -> bool {
        self.dying && self.death_anim_ticks == 0
    }
}
