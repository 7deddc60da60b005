//! Read-only view of the simulation for renderers
//!
//! World entities are never copied or moved for drawing. A renderer asks for a
//! [`RenderSnapshot`] once per frame and gets screen-space transforms for
//! everything on screen plus the HUD numbers.

use glam::Vec2;
use serde::Serialize;

use crate::consts::{DRAW_MARGIN, VIEWPORT_HEIGHT};
use crate::sim::{Enemy, EnemyKind, GamePhase, GameState, Player, PowerUp, PowerUpKind};

/// Map a world position into the viewport
#[inline]
pub fn to_screen_space(world: Vec2, camera_offset: f32) -> Vec2 {
    Vec2::new(world.x, world.y - camera_offset)
}

/// Whether a world y is close enough to the viewport to be drawn
#[inline]
pub fn is_on_screen(world_y: f32, camera_offset: f32) -> bool {
    let y = world_y - camera_offset;
    -DRAW_MARGIN < y && y < VIEWPORT_HEIGHT + DRAW_MARGIN
}

/// Where and how to draw one sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayTransform {
    /// Top-left corner in screen space
    pub pos: Vec2,
    pub size: Vec2,
    /// Degrees
    pub rotation: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SpriteKind {
    Player,
    Crow,
    Khukuri,
    /// Bob phase in radians, for renderers that animate more than the offset
    Chiyaa { bob_phase: f32 },
    PrayerWheel { bob_phase: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub transform: DisplayTransform,
    /// Player only: draw the invincibility blink frame
    pub flash: bool,
}

impl Sprite {
    fn player(player: &Player, camera_offset: f32) -> Self {
        Self {
            kind: SpriteKind::Player,
            transform: DisplayTransform {
                pos: to_screen_space(player.pos, camera_offset),
                size: player.size,
                rotation: 0.0,
            },
            flash: player.is_flashing(),
        }
    }

    fn enemy(enemy: &Enemy, camera_offset: f32) -> Self {
        let kind = match enemy.kind {
            EnemyKind::Crow => SpriteKind::Crow,
            EnemyKind::Khukuri { .. } => SpriteKind::Khukuri,
        };
        Self {
            kind,
            transform: DisplayTransform {
                pos: to_screen_space(enemy.pos, camera_offset),
                size: enemy.size(),
                rotation: enemy.rotation(),
            },
            flash: false,
        }
    }

    fn powerup(powerup: &PowerUp, camera_offset: f32) -> Self {
        let kind = match powerup.kind {
            PowerUpKind::Chiyaa => SpriteKind::Chiyaa {
                bob_phase: powerup.bob_phase,
            },
            PowerUpKind::PrayerWheel => SpriteKind::PrayerWheel {
                bob_phase: powerup.bob_phase,
            },
        };
        let bobbed = Vec2::new(powerup.pos.x, powerup.effective_y());
        Self {
            kind,
            transform: DisplayTransform {
                pos: to_screen_space(bobbed, camera_offset),
                size: powerup.size,
                rotation: 0.0,
            },
            flash: false,
        }
    }
}

/// HUD values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub score: u32,
    pub high_score: u32,
    /// Seconds left on the speed boost, if active
    pub boost_secs: Option<u32>,
    /// Seconds left on invincibility, if active
    pub invincible_secs: Option<u32>,
    pub game_over: bool,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    pub camera_offset: f32,
    pub player: Sprite,
    /// Enemies near the viewport, in spawn order
    pub enemies: Vec<Sprite>,
    /// Power-ups near the viewport, in spawn order
    pub powerups: Vec<Sprite>,
    pub hud: Hud,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let camera = state.camera_offset;
        let player = &state.player;

        let enemies = state
            .enemies
            .iter()
            .filter(|e| is_on_screen(e.pos.y, camera))
            .map(|e| Sprite::enemy(e, camera))
            .collect();
        let powerups = state
            .powerups
            .iter()
            .filter(|p| is_on_screen(p.pos.y, camera))
            .map(|p| Sprite::powerup(p, camera))
            .collect();

        Self {
            camera_offset: camera,
            player: Sprite::player(player, camera),
            enemies,
            powerups,
            hud: Hud {
                score: state.score,
                high_score: state.high_score,
                boost_secs: player
                    .speed_boost
                    .active
                    .then(|| player.speed_boost.seconds_left()),
                invincible_secs: player
                    .invincibility
                    .active
                    .then(|| player.invincibility.seconds_left()),
                game_over: state.phase == GamePhase::GameOver,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TickInput, tick};

    #[test]
    fn test_to_screen_space_subtracts_camera() {
        let screen = to_screen_space(Vec2::new(120.0, -400.0), -900.0);
        assert_eq!(screen, Vec2::new(120.0, 500.0));
    }

    #[test]
    fn test_on_screen_margins() {
        assert!(is_on_screen(0.0, 0.0));
        assert!(is_on_screen(-49.0, 0.0));
        assert!(!is_on_screen(-50.0, 0.0));
        assert!(is_on_screen(749.0, 0.0));
        assert!(!is_on_screen(750.0, 0.0));
    }

    #[test]
    fn test_snapshot_leaves_world_untouched() {
        let mut state = GameState::new(8);
        tick(&mut state, &TickInput::default());
        let world_pos = state.player.pos;

        let snapshot = RenderSnapshot::capture(&state);
        assert_eq!(state.player.pos, world_pos);
        assert_eq!(
            snapshot.player.transform.pos,
            Vec2::new(world_pos.x, world_pos.y - state.camera_offset)
        );
        // Camera keeps the player 200 units above the bottom edge
        assert_eq!(snapshot.player.transform.pos.y, 500.0);
    }

    #[test]
    fn test_snapshot_culls_and_decorates() {
        let mut state = GameState::new(8);
        state.camera_offset = 0.0;
        let kind = EnemyKind::Khukuri { rotation: 35.0 };
        state.enemies.push(Enemy::new(kind, Vec2::new(150.0, 300.0), 1.0, 1.0, 1.0));
        state.enemies.push(Enemy::new(EnemyKind::Crow, Vec2::new(150.0, -300.0), 1.0, 1.0, 1.0));
        let mut powerup = PowerUp::new(PowerUpKind::PrayerWheel, Vec2::new(200.0, 100.0));
        powerup.bob_phase = std::f32::consts::FRAC_PI_2;
        state.powerups.push(powerup);
        state.player.activate_speed_boost();

        let snapshot = RenderSnapshot::capture(&state);
        assert_eq!(snapshot.enemies.len(), 1);
        assert_eq!(snapshot.enemies[0].kind, SpriteKind::Khukuri);
        assert_eq!(snapshot.enemies[0].transform.rotation, 35.0);
        assert_eq!(snapshot.powerups.len(), 1);
        assert_eq!(
            snapshot.powerups[0].kind,
            SpriteKind::PrayerWheel {
                bob_phase: std::f32::consts::FRAC_PI_2
            }
        );
        assert!((snapshot.powerups[0].transform.pos.y - 103.0).abs() < 1e-4);
        assert_eq!(snapshot.hud.boost_secs, Some(6));
        assert_eq!(snapshot.hud.invincible_secs, None);
        assert!(!snapshot.hud.game_over);
    }

    #[test]
    fn test_player_flashes_while_invincible() {
        let mut state = GameState::new(8);
        state.player.activate_invincibility();
        // 180 % 10 == 0 -> blink frame
        assert!(RenderSnapshot::capture(&state).player.flash);
        state.player.invincibility.ticks = 175;
        assert!(!RenderSnapshot::capture(&state).player.flash);
    }

    #[test]
    fn test_pruned_entities_leave_the_snapshot() {
        let mut state = GameState::new(8);
        tick(&mut state, &TickInput::default());
        let below = crate::sim::camera::prune_line(state.camera_offset) + 20.0;
        state.powerups.push(PowerUp::new(PowerUpKind::Chiyaa, Vec2::new(200.0, below)));
        state.enemies.push(Enemy::new(EnemyKind::Crow, Vec2::new(200.0, below), 0.0, 1.0, 1.0));

        tick(&mut state, &TickInput::default());
        assert!(state.powerups.is_empty());
        assert!(state.enemies.is_empty());
        for _ in 0..30 {
            let snapshot = RenderSnapshot::capture(&state);
            assert!(snapshot.powerups.is_empty());
            assert!(snapshot.enemies.is_empty());
            tick(&mut state, &TickInput::default());
        }
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut state = GameState::new(8);
        state.powerups.push(PowerUp::new(PowerUpKind::Chiyaa, Vec2::new(200.0, 300.0)));
        let json = serde_json::to_string(&RenderSnapshot::capture(&state)).expect("serialize");
        assert!(json.contains("\"high_score\":0"));
        assert!(json.contains("\"bob_phase\":0.0"));
    }
}
