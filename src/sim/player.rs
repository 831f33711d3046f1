//! Player controller
//!
//! The central state machine: running, single/double jump, gravity, landing
//! on platforms, the attack window, invincibility with knockback, and the
//! death sequence. All timers count ticks.

use serde::{Deserialize, Serialize};

use super::aabb::{Aabb, Body};
use super::effects::Effects;
use super::level::Platform;
use super::tick::TickInput;
use crate::consts::*;
use crate::ticks_to_ms;

/// How the player should be drawn this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerLook {
    Normal,
    Attacking,
    /// Invincibility flicker in its "on" half
    Flicker,
    Dead,
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub on_ground: bool,
    /// 0 = grounded jump available, 1 = airborne after a jump, 2 = double jump spent
    pub jump_count: u8,
    pub health: i32,

    pub is_attacking: bool,
    pub attack_start_tick: u64,
    /// Attack hitbox goes on the left edge (left key held when last read)
    pub attack_faces_left: bool,

    pub invincible: bool,
    pub invincible_ticks: u32,
    pub knockback_ticks: u32,
    /// -1 pushes left, +1 pushes right
    pub knockback_dir: f32,

    pub dead: bool,
    pub death_ticks: u32,

    /// Previous tick's key states for edge detection
    jump_was_pressed: bool,
    attack_was_pressed: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y)
    }
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            body: Body::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT),
            on_ground: false,
            jump_count: 0,
            health: PLAYER_MAX_HEALTH,
            is_attacking: false,
            attack_start_tick: 0,
            attack_faces_left: false,
            invincible: false,
            invincible_ticks: 0,
            knockback_ticks: 0,
            knockback_dir: 1.0,
            dead: false,
            death_ticks: 0,
            jump_was_pressed: false,
            attack_was_pressed: false,
        }
    }

    #[inline]
    pub fn rect(&self) -> &Aabb {
        &self.body.rect
    }

    #[inline]
    pub fn velocity_y(&self) -> f32 {
        self.body.vel.y
    }

    /// Restore the spawn state in place
    pub fn reset(&mut self) {
        *self = Self::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y);
    }

    /// Read one tick of input: movement, jump edge, attack edge
    pub fn handle_input(&mut self, input: &TickInput, now: u64) {
        if self.dead {
            return;
        }

        if self.knockback_ticks > 0 {
            self.body.rect.pos.x += KNOCKBACK_SPEED * self.knockback_dir;
        } else {
            if input.left {
                self.body.rect.pos.x -= PLAYER_SPEED;
            }
            if input.right {
                self.body.rect.pos.x += PLAYER_SPEED;
            }
        }
        self.attack_faces_left = input.left;

        if input.jump && !self.jump_was_pressed {
            if self.on_ground {
                self.body.vel.y = JUMP_POWER;
                self.on_ground = false;
                self.jump_count = 1;
            } else if self.jump_count == 1 {
                self.body.vel.y = JUMP_POWER;
                self.jump_count = 2;
            }
        }
        self.jump_was_pressed = input.jump;

        if input.attack && !self.attack_was_pressed && !self.is_attacking {
            self.is_attacking = true;
            self.attack_start_tick = now;
        }
        self.attack_was_pressed = input.attack;
    }

    /// Constant gravity, no terminal velocity
    pub fn apply_gravity(&mut self) {
        self.body.fall(GRAVITY);
    }

    /// Advance one tick. Returns true on the tick the death sequence ends.
    pub fn update(&mut self, input: &TickInput, platforms: &[Platform], now: u64) -> bool {
        if self.invincible {
            self.invincible_ticks = self.invincible_ticks.saturating_sub(1);
            if self.invincible_ticks == 0 {
                self.invincible = false;
            }
        }
        if self.knockback_ticks > 0 {
            self.knockback_ticks -= 1;
        }

        if self.dead {
            self.body.fall(DEATH_GRAVITY);
            if self.death_ticks > 0 {
                self.death_ticks -= 1;
                if self.death_ticks == 0 {
                    log::info!("Death sequence finished");
                    return true;
                }
            }
            return false;
        }

        self.handle_input(input, now);
        self.apply_gravity();
        self.land_on(platforms);
        self.body.rect.clamp_x(0.0, LEVEL_WIDTH);

        let attack_elapsed = now.saturating_sub(self.attack_start_tick);
        if self.is_attacking && attack_elapsed > ATTACK_COOLDOWN_TICKS {
            self.is_attacking = false;
        }
        false
    }

    /// Snap onto any platform we are falling into
    fn land_on(&mut self, platforms: &[Platform]) {
        self.on_ground = false;
        for platform in platforms {
            if self.body.rect.overlaps(&platform.rect) && self.body.vel.y > 0.0 {
                self.body.rect.set_bottom(platform.rect.top());
                self.body.vel.y = 0.0;
                self.on_ground = true;
                self.jump_count = 0;
            }
        }
    }

    /// Take one point of damage from a source at `source_x`.
    ///
    /// No-op while invincible or dead. Returns true if the hit landed.
    pub fn take_damage(&mut self, source_x: f32, effects: &mut Effects) -> bool {
        if self.invincible || self.dead {
            return false;
        }

        self.health -= 1;
        self.invincible = true;
        self.invincible_ticks = INVINCIBLE_TICKS;
        self.knockback_dir = if source_x > self.body.rect.center_x() {
            -1.0
        } else {
            1.0
        };
        self.knockback_ticks = KNOCKBACK_TICKS;
        effects.on_player_hit();

        if self.health <= 0 {
            self.dead = true;
            self.death_ticks = DEATH_TICKS;
            log::info!("Player died at x={:.0}", self.body.rect.left());
        } else {
            log::debug!("Player hit, health {}", self.health);
        }
        true
    }

    /// Attack hitbox beside the player, vertically centred
    pub fn attack_hitbox(&self) -> Aabb {
        let rect = &self.body.rect;
        let x = if self.attack_faces_left {
            rect.left() - ATTACK_HITBOX_WIDTH
        } else {
            rect.right()
        };
        let y = rect.center().y - ATTACK_HITBOX_HEIGHT / 2.0;
        Aabb::new(x, y, ATTACK_HITBOX_WIDTH, ATTACK_HITBOX_HEIGHT)
    }

    /// Visual state at tick `now`
    pub fn look(&self, now: u64) -> PlayerLook {
        if self.dead {
            PlayerLook::Dead
        } else if self.is_attacking {
            PlayerLook::Attacking
        } else if self.invincible && (ticks_to_ms(now) / FLICKER_PERIOD_MS) % 2 == 1 {
            PlayerLook::Flicker
        } else {
            PlayerLook::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level;
    use proptest::prelude::*;

    fn grounded_player() -> (Player, Vec<Platform>) {
        let platforms = level::platforms();
        let mut player = Player::default();
        let idle = TickInput::default();
        for now in 0..60 {
            player.update(&idle, &platforms, now);
        }
        assert!(player.on_ground);
        (player, platforms)
    }

    fn jump() -> TickInput {
        TickInput {
            jump: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_settles_on_ground() {
        let (player, _) = grounded_player();
        assert_eq!(player.rect().bottom(), 440.0);
        assert_eq!(player.velocity_y(), 0.0);
        assert_eq!(player.jump_count, 0);
    }

    #[test]
    fn test_jump_and_double_jump() {
        let (mut player, _) = grounded_player();

        player.handle_input(&jump(), 0);
        assert_eq!(player.velocity_y(), JUMP_POWER);
        assert!(!player.on_ground);
        assert_eq!(player.jump_count, 1);

        // Release, then press again mid-air
        player.apply_gravity();
        player.handle_input(&TickInput::default(), 1);
        player.handle_input(&jump(), 2);
        assert_eq!(player.velocity_y(), JUMP_POWER);
        assert_eq!(player.jump_count, 2);

        // Third press has no effect
        player.apply_gravity();
        let vy = player.velocity_y();
        player.handle_input(&TickInput::default(), 3);
        player.handle_input(&jump(), 4);
        assert_eq!(player.velocity_y(), vy);
        assert_eq!(player.jump_count, 2);
    }

    #[test]
    fn test_jump_is_edge_triggered() {
        let (mut player, platforms) = grounded_player();
        player.update(&jump(), &platforms, 100);
        assert_eq!(player.jump_count, 1);

        // Holding jump never fires the double jump
        for now in 101..110 {
            player.update(&jump(), &platforms, now);
        }
        assert_eq!(player.jump_count, 1);
    }

    #[test]
    fn test_landing_resets_jump_count() {
        let (mut player, platforms) = grounded_player();
        let mut now = 100;
        player.update(&jump(), &platforms, now);
        loop {
            now += 1;
            player.update(&TickInput::default(), &platforms, now);
            if player.on_ground {
                break;
            }
            assert!(now < 200, "never landed");
        }
        assert_eq!(player.jump_count, 0);
        assert_eq!(player.velocity_y(), 0.0);
        assert_eq!(player.rect().bottom(), 440.0);
    }

    #[test]
    fn test_falling_off_edge_has_no_ground_jump() {
        let platforms = vec![Platform::new(0.0, 440.0, 3000.0, 40.0)];
        let mut player = Player::new(500.0, 100.0);
        player.update(&TickInput::default(), &platforms, 0);
        assert!(!player.on_ground);
        player.update(&jump(), &platforms, 1);
        assert_eq!(player.jump_count, 0);
        assert!(player.velocity_y() > 0.0);
    }

    #[test]
    fn test_horizontal_movement_and_clamp() {
        let (mut player, platforms) = grounded_player();
        let x = player.rect().left();
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        player.update(&right, &platforms, 100);
        assert_eq!(player.rect().left(), x + PLAYER_SPEED);

        let left = TickInput {
            left: true,
            ..Default::default()
        };
        for now in 101..200 {
            player.update(&left, &platforms, now);
        }
        assert_eq!(player.rect().left(), 0.0);
    }

    #[test]
    fn test_take_damage_sets_invincibility() {
        let mut effects = Effects::default();
        let mut player = Player::default();
        assert!(player.take_damage(0.0, &mut effects));
        assert_eq!(player.health, 2);
        assert!(player.invincible);
        assert_eq!(player.invincible_ticks, INVINCIBLE_TICKS);
        assert_eq!(player.knockback_ticks, KNOCKBACK_TICKS);
        assert_eq!(effects.shake_ticks, SHAKE_TICKS);
        assert_eq!(effects.red_flash, RED_FLASH_ALPHA);

        // Further hits while invincible are ignored
        assert!(!player.take_damage(0.0, &mut effects));
        assert_eq!(player.health, 2);
    }

    #[test]
    fn test_invincibility_window() {
        let mut effects = Effects::default();
        let (mut player, platforms) = grounded_player();
        player.take_damage(0.0, &mut effects);
        let idle = TickInput::default();
        for now in 0..(INVINCIBLE_TICKS as u64 - 1) {
            player.update(&idle, &platforms, now);
            assert!(player.invincible);
            assert!(!player.take_damage(0.0, &mut effects));
        }
        player.update(&idle, &platforms, 200);
        assert!(!player.invincible);
        assert!(player.take_damage(0.0, &mut effects));
        assert_eq!(player.health, 1);
    }

    #[test]
    fn test_knockback_direction() {
        let mut effects = Effects::default();
        let mut player = Player::new(100.0, 300.0);
        // Centre is 120; source to the right pushes left
        player.take_damage(130.0, &mut effects);
        assert_eq!(player.knockback_dir, -1.0);

        let mut player = Player::new(100.0, 300.0);
        player.take_damage(120.0, &mut effects);
        assert_eq!(player.knockback_dir, 1.0);
    }

    #[test]
    fn test_knockback_overrides_input() {
        let mut effects = Effects::default();
        let (mut player, platforms) = grounded_player();
        player.body.rect.pos.x = 500.0;
        player.take_damage(600.0, &mut effects);
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        player.update(&right, &platforms, 100);
        assert_eq!(player.rect().left(), 500.0 - KNOCKBACK_SPEED);

        // Knockback runs for KNOCKBACK_TICKS - 1 updates, then input resumes
        for now in 101..(99 + KNOCKBACK_TICKS as u64) {
            player.update(&right, &platforms, now);
        }
        let x = player.rect().left();
        assert_eq!(x, 500.0 - KNOCKBACK_SPEED * (KNOCKBACK_TICKS - 1) as f32);
        player.update(&right, &platforms, 200);
        assert_eq!(player.rect().left(), x + PLAYER_SPEED);
    }

    #[test]
    fn test_death_sequence_raises_game_over_once() {
        let mut effects = Effects::default();
        let (mut player, platforms) = grounded_player();
        player.health = 1;
        assert!(player.take_damage(0.0, &mut effects));
        assert_eq!(player.health, 0);
        assert!(player.dead);
        assert_eq!(player.death_ticks, DEATH_TICKS);

        let idle = TickInput::default();
        let mut game_overs = 0;
        for now in 0..(DEATH_TICKS as u64) {
            if player.update(&idle, &platforms, now) {
                game_overs += 1;
                assert_eq!(now, DEATH_TICKS as u64 - 1);
            }
        }
        assert_eq!(game_overs, 1);
        for now in 100..200 {
            assert!(!player.update(&idle, &platforms, now));
        }
    }

    #[test]
    fn test_dead_player_ignores_damage_and_input() {
        let mut effects = Effects::default();
        let mut player = Player::default();
        player.health = 1;
        player.take_damage(0.0, &mut effects);
        player.invincible = false;
        assert!(!player.take_damage(0.0, &mut effects));
        assert_eq!(player.health, 0);

        let x = player.rect().left();
        let input = TickInput {
            right: true,
            jump: true,
            attack: true,
            ..Default::default()
        };
        player.handle_input(&input, 0);
        assert_eq!(player.rect().left(), x);
        assert!(!player.is_attacking);
    }

    #[test]
    fn test_attack_window_expires() {
        let (mut player, platforms) = grounded_player();
        let attack = TickInput {
            attack: true,
            ..Default::default()
        };
        player.update(&attack, &platforms, 100);
        assert!(player.is_attacking);
        assert_eq!(player.attack_start_tick, 100);

        // Held attack does not restart the window
        for now in 101..=(100 + ATTACK_COOLDOWN_TICKS) {
            player.update(&attack, &platforms, now);
            assert!(player.is_attacking);
            assert_eq!(player.attack_start_tick, 100);
        }
        player.update(&attack, &platforms, 101 + ATTACK_COOLDOWN_TICKS);
        assert!(!player.is_attacking);

        // Still held: no new attack until released
        player.update(&attack, &platforms, 102 + ATTACK_COOLDOWN_TICKS);
        assert!(!player.is_attacking);
        player.update(&TickInput::default(), &platforms, 103 + ATTACK_COOLDOWN_TICKS);
        player.update(&attack, &platforms, 104 + ATTACK_COOLDOWN_TICKS);
        assert!(player.is_attacking);
    }

    #[test]
    fn test_attack_hitbox_side() {
        let mut player = Player::new(100.0, 300.0);
        let hitbox = player.attack_hitbox();
        assert_eq!(hitbox, Aabb::new(140.0, 310.0, 50.0, 40.0));

        player.attack_faces_left = true;
        let hitbox = player.attack_hitbox();
        assert_eq!(hitbox, Aabb::new(50.0, 310.0, 50.0, 40.0));
    }

    #[test]
    fn test_look_priority() {
        let mut effects = Effects::default();
        let mut player = Player::default();
        assert_eq!(player.look(0), PlayerLook::Normal);

        player.take_damage(0.0, &mut effects);
        // 0ms is in the "off" half, 120ms (tick 8) in the "on" half
        assert_eq!(player.look(0), PlayerLook::Normal);
        assert_eq!(player.look(8), PlayerLook::Flicker);
        assert_eq!(player.look(15), PlayerLook::Normal);

        player.is_attacking = true;
        assert_eq!(player.look(8), PlayerLook::Attacking);

        player.dead = true;
        assert_eq!(player.look(8), PlayerLook::Dead);
    }

    #[test]
    fn test_reset_restores_spawn() {
        let mut effects = Effects::default();
        let mut player = Player::new(900.0, 50.0);
        player.health = 1;
        player.take_damage(0.0, &mut effects);
        player.reset();
        assert_eq!(player, Player::default());
        assert_eq!(player.health, PLAYER_MAX_HEALTH);
        assert!(!player.dead);
        assert!(!player.invincible);
        assert_eq!(player.knockback_ticks, 0);
        assert_eq!(player.rect().pos.x, PLAYER_SPAWN_X);
        assert_eq!(player.rect().pos.y, PLAYER_SPAWN_Y);
    }

    proptest! {
        #[test]
        fn health_stays_in_range(
            actions in proptest::collection::vec(
                (any::<bool>(), 0.0f32..3000.0, any::<u8>()),
                1..300,
            )
        ) {
            let platforms = level::platforms();
            let mut effects = Effects::default();
            let mut player = Player::default();
            for (now, (hit, source_x, keys)) in actions.into_iter().enumerate() {
                let before = player.health;
                let was_protected = player.invincible || player.dead;
                if hit {
                    let landed = player.take_damage(source_x, &mut effects);
                    prop_assert_eq!(landed, !was_protected);
                }
                let input = TickInput {
                    left: keys & 1 != 0,
                    right: keys & 2 != 0,
                    jump: keys & 4 != 0,
                    attack: keys & 8 != 0,
                    ..Default::default()
                };
                player.update(&input, &platforms, now as u64);
                prop_assert!((0..=PLAYER_MAX_HEALTH).contains(&player.health));
                prop_assert!(player.health <= before);
                if was_protected {
                    prop_assert_eq!(player.health, before);
                }
            }
        }

        #[test]
        fn jump_count_never_exceeds_two(
            presses in proptest::collection::vec(any::<bool>(), 1..400)
        ) {
            let platforms = level::platforms();
            let mut player = Player::default();
            for (now, jump) in presses.into_iter().enumerate() {
                let input = TickInput { jump, ..Default::default() };
                player.update(&input, &platforms, now as u64);
                prop_assert!(player.jump_count <= 2);
                if player.on_ground {
                    prop_assert_eq!(player.jump_count, 0);
                    prop_assert_eq!(player.velocity_y(), 0.0);
                }
            }
        }
    }
}
