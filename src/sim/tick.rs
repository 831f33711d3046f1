//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session deterministically. One call is
//! one tick: sample input, update the player, update enemies, resolve
//! collisions, decay effects, place the camera, then act on terminal events.

use serde::{Deserialize, Serialize};

use super::camera::camera_offset;
use super::collision::resolve_collisions;
use super::effects::{Fade, FadeKind};
use super::state::{GameEvent, GameState, SessionPhase};

/// Held key states for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub attack: bool,
    /// Start from the main menu
    pub confirm: bool,
    /// Restart from game-over or victory
    pub retry: bool,
    /// Quit from anywhere
    pub quit: bool,
}

/// Advance the session by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == SessionPhase::Terminated {
        return events;
    }

    if input.quit {
        log::info!("Quit requested during {:?}", state.phase);
        state.phase = SessionPhase::Terminated;
        events.push(GameEvent::Quit);
        return events;
    }

    state.time_ticks += 1;

    match state.phase {
        SessionPhase::MainMenu => {
            if input.confirm {
                log::info!("Starting game (seed {})", state.seed);
                state.phase = SessionPhase::Playing;
                state.effects.fade = Some(Fade::from_black());
                state.camera =
                    camera_offset(state.player.rect().center_x(), state.effects.shake_offset);
            }
        }

        SessionPhase::Playing | SessionPhase::Dying => {
            step_world(state, input, &mut events);
        }

        SessionPhase::FadingToVictory => {
            // The world is frozen; particles keep drifting under the fade
            state.effects.advance(&mut state.rng);
            let done = state.effects.fade.as_mut().is_none_or(|fade| fade.advance());
            if done {
                state.effects.fade = None;
                state.phase = SessionPhase::Victory;
                log::info!("Victory screen");
            }
        }

        SessionPhase::GameOver | SessionPhase::Victory => {
            if input.retry {
                state.reset();
                state.phase = SessionPhase::Playing;
                events.push(GameEvent::Reset);
            }
        }

        SessionPhase::Terminated => {}
    }

    state.normalize_order();
    events
}

fn step_world(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    let now = state.time_ticks;

    if let Some(fade) = state.effects.fade.as_mut() {
        if fade.kind == FadeKind::FromBlack && fade.advance() {
            state.effects.fade = None;
        }
    }

    let death_finished = state.player.update(input, &state.platforms, now);

    for enemy in state.enemies.iter_mut() {
        enemy.update();
    }
    state.enemies.retain(|e| !e.is_finished());

    if state.phase == SessionPhase::Playing {
        events.extend(resolve_collisions(state));
        if state.player.dead {
            state.phase = SessionPhase::Dying;
            events.push(GameEvent::PlayerDied);
        }
    }

    state.effects.advance(&mut state.rng);
    state.camera = camera_offset(state.player.rect().center_x(), state.effects.shake_offset);

    if death_finished {
        log::info!("Game over after {} ticks", now);
        state.phase = SessionPhase::GameOver;
        state.stats.deaths += 1;
        events.push(GameEvent::GameOver);
    } else if events.contains(&GameEvent::Victory) {
        state.phase = SessionPhase::FadingToVictory;
        state.effects.fade = Some(Fade::to_white());
        state.stats.victories += 1;
    }
}
