//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, every timer counts ticks
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod aabb;
pub mod camera;
pub mod clock;
pub mod collision;
pub mod effects;
pub mod enemy;
pub mod level;
pub mod player;
pub mod state;
pub mod tick;

pub use aabb::{Aabb, Body};
pub use camera::{camera_offset, parallax_offset};
pub use clock::FixedStep;
pub use collision::resolve_collisions;
pub use effects::{BurstSpec, Effects, EffectsConfig, Fade, FadeKind, Particle};
pub use enemy::Enemy;
pub use level::{Collectible, Platform, VictoryGate};
pub use player::{Player, PlayerLook};
pub use state::{GameEvent, GameState, SessionPhase, SessionStats};
pub use tick::{TickInput, tick};
