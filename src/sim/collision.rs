//! Collision and event resolution
//!
//! Runs once per tick after the player and enemies have moved. Order matters:
//! pickups, then attacks, then contact damage, then the win check.

use super::effects::BurstSpec;
use super::state::{GameEvent, GameState};
use crate::settings::EnemyRemoval;

/// Resolve all cross-entity collisions for this tick
pub fn resolve_collisions(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();

    collect_pickups(state, &mut events);
    resolve_attack(state, &mut events);
    resolve_contact_damage(state, &mut events);

    // A lethal hit on the gate is still a death
    if !state.player.dead
        && state.player.rect().overlaps(&state.gate.rect)
        && state.all_collected()
    {
        log::info!("Victory gate reached at tick {}", state.time_ticks);
        events.push(GameEvent::Victory);
    }

    events
}

/// Remove every collectible touching the player and count them together
fn collect_pickups(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let player = *state.player.rect();
    let before = state.collectibles.len();
    state.collectibles.retain(|c| !c.rect.overlaps(&player));
    let picked = (before - state.collectibles.len()) as u32;

    if picked > 0 {
        state.collected_count += picked;
        state.stats.items_collected += picked;
        log::debug!(
            "Collected {} ({}/{})",
            picked,
            state.collected_count,
            state.total_collectibles
        );
        events.push(GameEvent::Collected {
            count: state.collected_count,
            total: state.total_collectibles,
        });
    }
}

/// Attack hitbox against every active enemy
fn resolve_attack(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if !state.player.is_attacking {
        return;
    }
    let hitbox = state.player.attack_hitbox();
    let mut defeated = Vec::new();

    match state.enemy_removal {
        EnemyRemoval::Immediate => {
            let rng = &mut state.rng;
            let effects = &mut state.effects;
            state.enemies.retain(|enemy| {
                if enemy.is_active() && hitbox.overlaps(&enemy.rect) {
                    effects.burst(&mut *rng, enemy.rect.center(), BurstSpec::HIT);
                    defeated.push(enemy.id);
                    false
                } else {
                    true
                }
            });
        }
        EnemyRemoval::Sink => {
            for enemy in state.enemies.iter_mut() {
                if enemy.is_active() && hitbox.overlaps(&enemy.rect) {
                    enemy.flash_and_kill(&mut state.rng, &mut state.effects);
                    defeated.push(enemy.id);
                }
            }
        }
    }

    for id in defeated {
        log::debug!("Enemy {} defeated", id);
        state.stats.enemies_defeated += 1;
        events.push(GameEvent::EnemyDefeated { id });
    }
}

/// Touching an enemy hurts unless invincible or mid-attack
fn resolve_contact_damage(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for enemy in &state.enemies {
        if !enemy.is_active() || !enemy.rect.overlaps(state.player.rect()) {
            continue;
        }
        if state.player.invincible || state.player.is_attacking {
            continue;
        }
        if state
            .player
            .take_damage(enemy.rect.center_x(), &mut state.effects)
        {
            events.push(GameEvent::PlayerHit {
                health: state.player.health,
            });
        }
    }
}
