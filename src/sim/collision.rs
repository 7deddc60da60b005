//! Collision detection and entity lifecycle
//!
//! Updates falling entities, drops the ones that scrolled out of play, and
//! resolves player contact with enemies (fatal unless invincible) and
//! power-ups (collected and applied).

use super::camera;
use super::state::{Enemy, GamePhase, GameState, Player, PowerUp, PowerUpKind};

/// What the collision pass found this frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionResult {
    /// Player touched an enemy while vulnerable
    pub player_hit: bool,
    /// Power-ups collected, in collection order
    pub collected: Vec<PowerUpKind>,
}

/// Update every enemy and power-up, then drop those below the prune line
pub fn update_and_prune(state: &mut GameState) {
    let limit = camera::prune_line(state.camera_offset);

    for enemy in &mut state.enemies {
        enemy.update();
    }
    state.enemies.retain(|e| e.pos.y <= limit);

    for powerup in &mut state.powerups {
        powerup.update();
    }
    state.powerups.retain(|p| p.pos.y <= limit);
}

/// Whether any enemy overlaps a vulnerable player
pub fn player_hits_enemy(player: &Player, enemies: &[Enemy]) -> bool {
    if player.is_invincible() {
        return false;
    }
    let player_rect = player.rect();
    enemies.iter().any(|e| player_rect.intersects(&e.rect()))
}

/// Remove every power-up overlapping the player and apply its effect
pub fn collect_powerups(player: &mut Player, powerups: &mut Vec<PowerUp>) -> Vec<PowerUpKind> {
    let player_rect = player.rect();
    let mut collected = Vec::new();

    powerups.retain(|p| {
        if player_rect.intersects(&p.rect()) {
            collected.push(p.kind);
            false
        } else {
            true
        }
    });

    for kind in &collected {
        match kind {
            PowerUpKind::Chiyaa => player.activate_speed_boost(),
            PowerUpKind::PrayerWheel => player.activate_invincibility(),
        }
    }
    collected
}

/// Run the collision pass; an enemy hit ends the run and skips power-ups
pub fn resolve(state: &mut GameState) -> CollisionResult {
    if player_hits_enemy(&state.player, &state.enemies) {
        state.phase = GamePhase::GameOver;
        log::info!("Game over: score {} (high {})", state.score, state.high_score);
        return CollisionResult {
            player_hit: true,
            collected: Vec::new(),
        };
    }

    let collected = collect_powerups(&mut state.player, &mut state.powerups);
    for kind in &collected {
        log::debug!("Collected {:?}", kind);
    }
    CollisionResult {
        player_hit: false,
        collected,
    }
}
