//! Frame description for the presentation layer
//!
//! The simulation never draws. Each frame it is turned into a flat list of
//! coloured rectangles in compositing order, plus HUD pips and screen text,
//! which any backend can blit as-is.

use glam::Vec2;
use serde::Serialize;

use super::palette;
use crate::consts::*;
use crate::sim::{Aabb, FadeKind, GameState, PlayerLook, SessionPhase, parallax_offset};

/// Compositing layers, back to front
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Layer {
    Background,
    Platform,
    Enemy,
    Collectible,
    Gate,
    Player,
    Particle,
    RedFlash,
    Fade,
}

/// A filled rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawCmd {
    pub layer: Layer,
    pub pos: Vec2,
    pub size: Vec2,
    pub color: [f32; 4],
}

impl DrawCmd {
    fn world(layer: Layer, rect: &Aabb, camera: Vec2, color: [f32; 4]) -> Self {
        Self {
            layer,
            pos: rect.screen_pos(camera),
            size: rect.size,
            color,
        }
    }

    fn full_screen(layer: Layer, color: [f32; 4]) -> Self {
        Self {
            layer,
            pos: Vec2::ZERO,
            size: Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
            color,
        }
    }
}

/// Pip rows drawn over the play field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    /// One entry per health point; true = filled
    pub health: Vec<bool>,
    /// One entry per collectible in the level; true = collected
    pub collectibles: Vec<bool>,
}

impl Hud {
    fn new(state: &GameState) -> Self {
        let health = (0..PLAYER_MAX_HEALTH).map(|i| i < state.player.health).collect();
        let collectibles = (0..state.total_collectibles)
            .map(|i| i < state.collected_count)
            .collect();
        Self {
            health,
            collectibles,
        }
    }

    /// Colour for each health pip
    pub fn health_colors(&self) -> impl Iterator<Item = [f32; 4]> + '_ {
        self.health
            .iter()
            .map(|&on| if on { palette::PIP_HEALTH } else { palette::PIP_DIM })
    }

    /// Colour for each collectible pip
    pub fn collectible_colors(&self) -> impl Iterator<Item = [f32; 4]> + '_ {
        self.collectibles
            .iter()
            .map(|&on| if on { palette::PIP_COLLECTIBLE } else { palette::PIP_DIM })
    }
}

/// Centred text for the menu and end screens
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenText {
    pub title: &'static str,
    pub title_color: [f32; 4],
    pub prompts: Vec<&'static str>,
}

/// Everything needed to present one tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub commands: Vec<DrawCmd>,
    pub hud: Option<Hud>,
    pub screen: Option<ScreenText>,
}

/// Describe the current state as a frame
pub fn build_frame(state: &GameState) -> Frame {
    match state.phase {
        SessionPhase::MainMenu => screen_frame(ScreenText {
            title: "Knights and Dungeons",
            title_color: palette::TITLE,
            prompts: vec!["Press ENTER to Start"],
        }),
        SessionPhase::GameOver => screen_frame(ScreenText {
            title: "GAME OVER",
            title_color: palette::GAME_OVER_TITLE,
            prompts: vec!["Press R to Retry", "Press Q to Exit"],
        }),
        SessionPhase::Victory => screen_frame(ScreenText {
            title: "Victory!",
            title_color: palette::VICTORY_TITLE,
            prompts: vec!["Press R to Restart", "Press Q to Exit"],
        }),
        SessionPhase::Terminated => Frame {
            commands: Vec::new(),
            hud: None,
            screen: None,
        },
        SessionPhase::Playing | SessionPhase::Dying | SessionPhase::FadingToVictory => Frame {
            commands: world_commands(state),
            hud: Some(Hud::new(state)),
            screen: None,
        },
    }
}

fn screen_frame(text: ScreenText) -> Frame {
    Frame {
        commands: vec![DrawCmd::full_screen(Layer::Background, palette::SCREEN)],
        hud: None,
        screen: Some(text),
    }
}

fn world_commands(state: &GameState) -> Vec<DrawCmd> {
    let camera = state.camera;
    let mut commands = Vec::with_capacity(
        32 + state.platforms.len() + state.enemies.len() + state.effects.particles.len(),
    );

    commands.push(DrawCmd::full_screen(Layer::Background, palette::BACKGROUND));
    let parallax = parallax_offset(camera);
    let hill_count = (LEVEL_WIDTH * PARALLAX_FACTOR / HILL_SPACING) as usize + 2;
    for i in 0..hill_count {
        let x = i as f32 * HILL_SPACING;
        let hill = Aabb::new(x, HILL_TOP, HILL_WIDTH, LEVEL_HEIGHT - HILL_TOP);
        commands.push(DrawCmd::world(Layer::Background, &hill, parallax, palette::HILLS));
    }

    for platform in &state.platforms {
        commands.push(DrawCmd::world(Layer::Platform, &platform.rect, camera, palette::PLATFORM));
    }
    for enemy in &state.enemies {
        commands.push(DrawCmd::world(Layer::Enemy, &enemy.rect, camera, palette::ENEMY));
    }
    for collectible in &state.collectibles {
        commands.push(DrawCmd::world(
            Layer::Collectible,
            &collectible.rect,
            camera,
            palette::COLLECTIBLE,
        ));
    }
    commands.push(DrawCmd::world(Layer::Gate, &state.gate.rect, camera, palette::GATE));

    let player_color = match state.player.look(state.time_ticks) {
        PlayerLook::Normal => palette::PLAYER,
        PlayerLook::Attacking => palette::PLAYER_ATTACK,
        PlayerLook::Flicker => palette::PLAYER_FLICKER,
        PlayerLook::Dead => palette::PLAYER_DEAD,
    };
    commands.push(DrawCmd::world(Layer::Player, state.player.rect(), camera, player_color));

    for particle in &state.effects.particles {
        let size = particle.size as f32;
        commands.push(DrawCmd {
            layer: Layer::Particle,
            pos: particle.pos - camera,
            size: Vec2::splat(size),
            color: palette::with_alpha(palette::PARTICLE, particle.alpha() as f32),
        });
    }

    let flash = state.effects.visible_red_flash();
    if flash > 0.0 {
        commands.push(DrawCmd::full_screen(
            Layer::RedFlash,
            palette::with_alpha(palette::RED_FLASH, flash),
        ));
    }

    if let Some(fade) = state.effects.fade {
        let base = match fade.kind {
            FadeKind::FromBlack => palette::FADE_BLACK,
            FadeKind::ToWhite => palette::FADE_WHITE,
        };
        commands.push(DrawCmd::full_screen(Layer::Fade, palette::with_alpha(base, fade.alpha)));
    }

    commands
}

const HILL_SPACING: f32 = 300.0;
const HILL_WIDTH: f32 = 180.0;
const HILL_TOP: f32 = 320.0;
