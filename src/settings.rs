//! Game settings and preferences
//!
//! Read from a JSON file at startup. Nothing is ever written back.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::EffectsConfig;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Maximum particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 100,
            QualityPreset::Medium => 500,
            QualityPreset::High => 2000,
        }
    }
}

/// What happens to an enemy struck by an attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnemyRemoval {
    /// Removed on the tick the hit lands, with a hit burst
    #[default]
    Immediate,
    /// Death burst, one tick of sinking, then removed
    Sink,
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    // === Visual Effects ===
    /// Screen shake when the player is hit
    pub screen_shake: bool,
    /// Red full-screen flash when the player is hit
    pub red_flash: bool,
    /// Hit particles
    pub particles: bool,

    // === Accessibility ===
    /// Reduced motion (no shake, no flash)
    pub reduced_motion: bool,

    // === Gameplay ===
    pub enemy_removal: EnemyRemoval,
    /// Effect RNG seed; `None` picks one from the clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            screen_shake: true,
            red_flash: true,
            particles: true,
            reduced_motion: false,
            enemy_removal: EnemyRemoval::Immediate,
            seed: None,
        }
    }
}

impl Settings {
    /// Apply a quality preset (updates quality-dependent settings)
    pub fn apply_preset(&mut self, preset: QualityPreset) {
        self.quality = preset;

        // Low preset drops the full-screen flash for performance
        if preset == QualityPreset::Low {
            self.red_flash = false;
        }
    }

    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Effective red flash (respects reduced_motion)
    pub fn effective_red_flash(&self) -> bool {
        self.red_flash && !self.reduced_motion
    }

    /// Effective particle count cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_particles()
        }
    }

    /// Effect toggles handed to the simulation
    pub fn effects_config(&self) -> EffectsConfig {
        EffectsConfig {
            screen_shake: self.effective_screen_shake(),
            red_flash: self.effective_red_flash(),
            particles: self.particles,
            max_particles: self.max_particles(),
        }
    }

    /// Parse settings from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
