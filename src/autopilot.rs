//! Scripted input source
//!
//! Plays the level without a human: confirm on the menu, run right, hop
//! toward pickups and over patrols, swing at anything in reach. Decisions
//! depend only on the state it is shown, so a seeded run replays exactly.

use crate::consts::*;
use crate::sim::{Aabb, GameState, SessionPhase, TickInput};

/// How far ahead (px) a collectible or enemy triggers a jump
const JUMP_LOOKAHEAD: f32 = 140.0;
/// Collectibles this far above the player's feet are worth a jump
const MIN_JUMP_RISE: f32 = 30.0;
/// Second jump once the first one has slowed to this vertical speed
const DOUBLE_JUMP_VY: f32 = -3.0;

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Press retry on the game-over and victory screens
    pub retry: bool,
    last: TickInput,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Autopilot {
    pub fn new(retry: bool) -> Self {
        Self {
            retry,
            last: TickInput::default(),
        }
    }

    /// Input for the next tick of `state`
    pub fn next_input(&mut self, state: &GameState) -> TickInput {
        let mut input = TickInput::default();

        match state.phase {
            SessionPhase::MainMenu => input.confirm = true,
            SessionPhase::GameOver | SessionPhase::Victory => input.retry = self.retry,
            SessionPhase::Playing => self.play(state, &mut input),
            SessionPhase::Dying | SessionPhase::FadingToVictory | SessionPhase::Terminated => {}
        }

        self.last = input;
        input
    }

    fn play(&self, state: &GameState, input: &mut TickInput) {
        let player = &state.player;
        let rect = player.rect();
        input.right = true;

        // Keys are edge-triggered, so a held key has to be released for a tick
        if !self.last.attack && !player.is_attacking && enemy_in_reach(state) {
            input.attack = true;
        }

        if !self.last.jump {
            if player.on_ground {
                input.jump = wants_jump(state, rect);
            } else if player.jump_count == 1
                && player.velocity_y() > DOUBLE_JUMP_VY
                && player.velocity_y() < 0.0
            {
                input.jump = pickup_above(state, rect);
            }
        }
    }
}

/// An active enemy overlaps the right-facing attack hitbox
fn enemy_in_reach(state: &GameState) -> bool {
    let rect = state.player.rect();
    let reach = Aabb::new(
        rect.right(),
        rect.center().y - ATTACK_HITBOX_HEIGHT / 2.0,
        ATTACK_HITBOX_WIDTH,
        ATTACK_HITBOX_HEIGHT,
    );
    state
        .enemies
        .iter()
        .any(|e| e.is_active() && e.rect.overlaps(&reach))
}

fn ahead(rect: &Aabb, other: &Aabb) -> bool {
    let dx = other.left() - rect.right();
    (0.0..JUMP_LOOKAHEAD).contains(&dx)
}

fn pickup_above(state: &GameState, rect: &Aabb) -> bool {
    state.collectibles.iter().any(|c| {
        let dx = (c.rect.center_x() - rect.center_x()).abs();
        dx < JUMP_LOOKAHEAD && c.rect.bottom() < rect.bottom() - MIN_JUMP_RISE
    })
}

fn wants_jump(state: &GameState, rect: &Aabb) -> bool {
    let pickup = state.collectibles.iter().any(|c| {
        ahead(rect, &c.rect) && c.rect.bottom() < rect.bottom() - MIN_JUMP_RISE
    });
    // Hop patrols we cannot already hit
    let enemy = !enemy_in_reach(state)
        && state
            .enemies
            .iter()
            .any(|e| e.is_active() && ahead(rect, &e.rect) && e.rect.left() - rect.right() < 60.0);
    let ledge = state.platforms.iter().any(|p| {
        ahead(rect, &p.rect) && p.rect.top() < rect.bottom() && p.rect.top() > rect.bottom() - 120.0
    });
    pickup || enemy || ledge
}
