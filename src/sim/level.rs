//! Fixed level layout
//!
//! The level is compiled in. Constructors hand out fresh entities so a reset
//! can rebuild enemies and collectibles from scratch.

use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::enemy::Enemy;
use crate::consts::*;

/// Static platform geometry: (x, y, w, h)
pub const PLATFORMS: [(f32, f32, f32, f32); 10] = [
    (0.0, 440.0, 3000.0, 40.0),
    (200.0, 350.0, 120.0, 20.0),
    (450.0, 300.0, 150.0, 20.0),
    (800.0, 250.0, 120.0, 20.0),
    (1100.0, 200.0, 150.0, 20.0),
    (1400.0, 330.0, 120.0, 20.0),
    (1700.0, 280.0, 120.0, 20.0),
    (2000.0, 220.0, 180.0, 20.0),
    (2300.0, 350.0, 120.0, 20.0),
    (2600.0, 300.0, 150.0, 20.0),
];

/// Enemy spawns: (x, y, patrol width, speed)
pub const ENEMIES: [(f32, f32, f32, f32); 5] = [
    (600.0, 400.0, 200.0, 2.0),
    (1000.0, 400.0, 150.0, 2.0),
    (1500.0, 300.0, 150.0, 2.0),
    (2100.0, 400.0, 120.0, 2.0),
    (2400.0, 320.0, 100.0, 2.0),
];

/// Collectibles float just above a platform: (x, y)
pub const COLLECTIBLES: [(f32, f32); 5] = [
    (250.0, 320.0),
    (515.0, 270.0),
    (850.0, 220.0),
    (1165.0, 170.0),
    (2080.0, 190.0),
];

/// Victory gate bounds: (x, y, w, h)
pub const GATE: (f32, f32, f32, f32) = (LEVEL_WIDTH - 100.0, 400.0, 40.0, 40.0);

/// An immovable platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Aabb,
}

impl Platform {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Aabb::new(x, y, w, h),
        }
    }
}

/// A pickup counted toward the win condition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub id: u32,
    pub rect: Aabb,
}

/// The level exit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VictoryGate {
    pub rect: Aabb,
}

pub fn platforms() -> Vec<Platform> {
    PLATFORMS
        .iter()
        .map(|&(x, y, w, h)| Platform::new(x, y, w, h))
        .collect()
}

/// Fresh enemies, ids drawn from `next_id` in spawn order
pub fn enemies(mut next_id: impl FnMut() -> u32) -> Vec<Enemy> {
    ENEMIES
        .iter()
        .map(|&(x, y, width, speed)| Enemy::new(next_id(), x, y, width, speed))
        .collect()
}

/// Fresh collectibles, ids drawn from `next_id` in spawn order
pub fn collectibles(mut next_id: impl FnMut() -> u32) -> Vec<Collectible> {
    COLLECTIBLES
        .iter()
        .map(|&(x, y)| Collectible {
            id: next_id(),
            rect: Aabb::new(x, y, COLLECTIBLE_SIZE, COLLECTIBLE_SIZE),
        })
        .collect()
}

pub fn victory_gate() -> VictoryGate {
    let (x, y, w, h) = GATE;
    VictoryGate {
        rect: Aabb::new(x, y, w, h),
    }
}
