//! Timed procedural spawning of enemies and power-ups
//!
//! Both timers count frames and reset only when something spawns. Enemies
//! wait out a warm-up and then arrive faster as the score climbs; power-ups
//! arrive on a fixed beat.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, EnemyKind, GameState, PowerUp, PowerUpKind};
use crate::consts::*;

/// Frames between enemy spawns for a given score
///
/// Integer division steps the rate down by one frame every 50 points until it
/// bottoms out at `ENEMY_SPAWN_MIN`.
pub fn enemy_spawn_interval(score: u32) -> u32 {
    ENEMY_SPAWN_BASE
        .saturating_sub(score / ENEMY_SPAWN_SCORE_STEP)
        .max(ENEMY_SPAWN_MIN)
}

/// Advance both spawn timers and spawn whatever is due
pub fn run(state: &mut GameState) {
    if state.game_start_ticks > ENEMY_WARMUP_TICKS {
        state.enemy_spawn_ticks += 1;
        if state.enemy_spawn_ticks > enemy_spawn_interval(state.score) {
            spawn_enemy(state);
            state.enemy_spawn_ticks = 0;
        }
    }

    state.powerup_spawn_ticks += 1;
    if state.powerup_spawn_ticks > POWERUP_SPAWN_TICKS {
        spawn_powerup(state);
        state.powerup_spawn_ticks = 0;
    }
}

/// Drop a random enemy 100-300 units above the viewport
pub fn spawn_enemy(state: &mut GameState) {
    let rng = &mut state.rng;
    let kind = if rng.random_bool(0.5) {
        EnemyKind::Crow
    } else {
        EnemyKind::Khukuri { rotation: 0.0 }
    };
    let x = rng.random_range(SPAWN_X_MIN..=SPAWN_X_MAX) as f32;
    let y = state.camera_offset - rng.random_range(100..=300_i32) as f32;
    let enemy = Enemy::random(kind, Vec2::new(x, y), rng);
    log::debug!("Spawned {:?} at ({}, {})", enemy.kind, x, y);
    state.enemies.push(enemy);
}

/// Place a random power-up 50-200 units above the viewport
pub fn spawn_powerup(state: &mut GameState) {
    let rng = &mut state.rng;
    let kind = if rng.random_bool(0.5) {
        PowerUpKind::Chiyaa
    } else {
        PowerUpKind::PrayerWheel
    };
    let x = rng.random_range(SPAWN_X_MIN..=SPAWN_X_MAX) as f32;
    let y = state.camera_offset - rng.random_range(50..=200_i32) as f32;
    log::debug!("Spawned {:?} power-up at ({}, {})", kind, x, y);
    state.powerups.push(PowerUp::new(kind, Vec2::new(x, y)));
}
