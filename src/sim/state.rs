//! Game state and session types
//!
//! Everything the tick mutates lives in `GameState`: entities, the effect
//! state, the collected count, and the seeded RNG.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::camera_offset;
use super::effects::Effects;
use super::enemy::Enemy;
use super::level::{self, Collectible, Platform, VictoryGate};
use super::player::Player;
use crate::settings::{EnemyRemoval, Settings};

/// Top-level session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Title screen, waiting for confirm
    MainMenu,
    /// Active gameplay
    Playing,
    /// Player is dead and the death animation is running
    Dying,
    /// Game-over screen, waiting for retry or quit
    GameOver,
    /// Fade to white after reaching the gate
    FadingToVictory,
    /// Victory screen, waiting for retry or quit
    Victory,
    /// Quit requested; nothing else happens
    Terminated,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// One or more collectibles picked up this tick
    Collected { count: u32, total: u32 },
    EnemyDefeated { id: u32 },
    PlayerHit { health: i32 },
    PlayerDied,
    GameOver,
    Victory,
    Reset,
    Quit,
}

/// Running tallies across resets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub attempts: u32,
    pub deaths: u32,
    pub victories: u32,
    pub enemies_defeated: u32,
    pub items_collected: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Effect randomness (particles, shake)
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: SessionPhase,
    pub player: Player,
    pub platforms: Vec<Platform>,
    /// Active enemies (sorted by id)
    pub enemies: Vec<Enemy>,
    /// Collectibles not yet picked up
    pub collectibles: Vec<Collectible>,
    pub total_collectibles: u32,
    pub collected_count: u32,
    pub gate: VictoryGate,
    pub effects: Effects,
    /// Camera offset for the current tick (shake included)
    pub camera: Vec2,
    pub enemy_removal: EnemyRemoval,
    pub stats: SessionStats,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a session sitting at the main menu
    pub fn new(seed: u64, settings: &Settings) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            phase: SessionPhase::MainMenu,
            player: Player::default(),
            platforms: level::platforms(),
            enemies: Vec::new(),
            collectibles: Vec::new(),
            total_collectibles: 0,
            collected_count: 0,
            gate: level::victory_gate(),
            effects: Effects::new(settings.effects_config()),
            camera: Vec2::ZERO,
            enemy_removal: settings.enemy_removal,
            stats: SessionStats::default(),
            next_id: 1,
        };
        state.spawn_level_entities();
        state.stats.attempts = 1;
        state
    }

    /// Allocate a new entity ID
    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn spawn_level_entities(&mut self) {
        let enemies = level::enemies(|| self.next_entity_id());
        let collectibles = level::collectibles(|| self.next_entity_id());
        self.total_collectibles = collectibles.len() as u32;
        self.enemies = enemies;
        self.collectibles = collectibles;
    }

    /// Put the level back to its starting state for another attempt
    pub fn reset(&mut self) {
        self.player.reset();
        self.spawn_level_entities();
        self.collected_count = 0;
        self.effects.clear();
        self.camera = camera_offset(self.player.rect().center_x(), Vec2::ZERO);
        self.stats.attempts += 1;
        log::info!("Level reset (attempt {})", self.stats.attempts);
    }

    /// All collectibles picked up
    pub fn all_collected(&self) -> bool {
        self.collected_count == self.total_collectibles
    }

    /// Ensure entities are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.enemies.sort_by_key(|e| e.id);
        self.collectibles.sort_by_key(|c| c.id);
    }
}
