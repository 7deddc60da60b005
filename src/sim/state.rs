//! Game state and core simulation types
//!
//! Everything a frame mutates lives in [`GameState`]; entities only change
//! through their own `update` methods.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// Run ended, waiting for restart
    GameOver,
}

/// A countdown status effect (speed boost, invincibility)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedEffect {
    pub active: bool,
    /// Frames left before the effect wears off
    pub ticks: u32,
}

impl TimedEffect {
    /// Re-arm at full duration, discarding whatever was left
    pub fn refresh(&mut self, ticks: u32) {
        self.active = true;
        self.ticks = ticks;
    }

    /// Count down one frame
    pub fn decay(&mut self) {
        if self.active {
            self.ticks = self.ticks.saturating_sub(1);
            if self.ticks == 0 {
                self.active = false;
            }
        }
    }

    /// Whole seconds left for the HUD countdown (rounded up)
    pub fn seconds_left(&self) -> u32 {
        self.ticks / FPS + 1
    }
}

/// An in-flight wall-to-wall jump
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpArc {
    /// Frames elapsed since take-off
    pub progress: u32,
    pub start: Vec2,
    pub target_x: f32,
}

/// The climber
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner in world space
    pub pos: Vec2,
    pub size: Vec2,
    pub on_left_wall: bool,
    /// Present while mid-air
    pub jump: Option<JumpArc>,
    pub jump_duration: u32,
    pub jump_height: f32,
    pub climb_speed: f32,
    pub speed_boost: TimedEffect,
    pub invincibility: TimedEffect,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Vec2::new(PLAYER_START_X, PLAYER_START_Y))
    }
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            on_left_wall: true,
            jump: None,
            jump_duration: JUMP_DURATION,
            jump_height: JUMP_HEIGHT,
            climb_speed: CLIMB_SPEED,
            speed_boost: TimedEffect::default(),
            invincibility: TimedEffect::default(),
        }
    }

    #[inline]
    pub fn is_jumping(&self) -> bool {
        self.jump.is_some()
    }

    #[inline]
    pub fn is_invincible(&self) -> bool {
        self.invincibility.active
    }

    /// Climb rate this frame (boost doubles it)
    pub fn effective_climb_speed(&self) -> f32 {
        if self.speed_boost.active {
            self.climb_speed * 2.0
        } else {
            self.climb_speed
        }
    }

    /// Advance one frame: effects, then either climb or follow the jump arc
    pub fn update(&mut self) {
        self.speed_boost.decay();
        self.invincibility.decay();

        let Some(mut arc) = self.jump else {
            self.pos.y -= self.effective_climb_speed();
            return;
        };

        arc.progress += 1;
        let t = arc.progress as f32 / self.jump_duration as f32;

        if t >= 1.0 {
            // Land exactly on the target, at take-off height
            self.pos = Vec2::new(arc.target_x, arc.start.y);
            self.on_left_wall = !self.on_left_wall;
            self.jump = None;
        } else {
            self.pos.x = arc.start.x + (arc.target_x - arc.start.x) * t;
            self.pos.y = arc.start.y - self.jump_height * 4.0 * t * (1.0 - t);
            self.jump = Some(arc);
        }
    }

    /// Leap to the opposite wall; ignored while already mid-air
    pub fn jump(&mut self) {
        if self.is_jumping() {
            return;
        }
        let target_x = if self.on_left_wall {
            PLAYFIELD_WIDTH - WALL_INNER_OFFSET - self.size.x
        } else {
            WALL_INNER_OFFSET
        };
        self.jump = Some(JumpArc {
            progress: 0,
            start: self.pos,
            target_x,
        });
    }

    pub fn activate_speed_boost(&mut self) {
        self.speed_boost.refresh(SPEED_BOOST_TICKS);
    }

    pub fn activate_invincibility(&mut self) {
        self.invincibility.refresh(INVINCIBILITY_TICKS);
    }

    /// Blink on and off every five frames while invincible
    pub fn is_flashing(&self) -> bool {
        self.invincibility.active && self.invincibility.ticks % 10 < 5
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }
}

/// Falling obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EnemyKind {
    Crow,
    /// Spinning knife; rotation in degrees is display-only
    Khukuri { rotation: f32 },
}

impl EnemyKind {
    pub fn size(&self) -> Vec2 {
        let (w, h) = match self {
            EnemyKind::Crow => CROW_SIZE,
            EnemyKind::Khukuri { .. } => KHUKURI_SIZE,
        };
        Vec2::new(w, h)
    }
}

/// A falling obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub pos: Vec2,
    /// Horizontal speed magnitude
    pub speed: f32,
    /// -1.0 (left) or 1.0 (right)
    pub direction: f32,
    pub fall_speed: f32,
}

impl Enemy {
    pub fn new(kind: EnemyKind, pos: Vec2, speed: f32, direction: f32, fall_speed: f32) -> Self {
        Self {
            kind,
            pos,
            speed,
            direction,
            fall_speed,
        }
    }

    /// Enemy with speed, heading and fall rate drawn from `rng`
    pub fn random<R: Rng>(kind: EnemyKind, pos: Vec2, rng: &mut R) -> Self {
        let speed = rng.random_range(1.0..=3.0);
        let direction = if rng.random_bool(0.5) { -1.0 } else { 1.0 };
        let fall_speed = rng.random_range(0.5..=1.5);
        Self::new(kind, pos, speed, direction, fall_speed)
    }

    pub fn size(&self) -> Vec2 {
        self.kind.size()
    }

    /// Rotation in degrees (zero for crows)
    pub fn rotation(&self) -> f32 {
        match self.kind {
            EnemyKind::Crow => 0.0,
            EnemyKind::Khukuri { rotation } => rotation,
        }
    }

    pub fn update(&mut self) {
        self.pos.x += self.speed * self.direction;
        self.pos.y += self.fall_speed;

        // Bounce: reverse once past either wall, the overshoot corrects next frame
        let right_limit = PLAYFIELD_WIDTH - WALL_INNER_OFFSET - self.size().x;
        if self.pos.x <= WALL_INNER_OFFSET || self.pos.x >= right_limit {
            self.direction = -self.direction;
        }

        if let EnemyKind::Khukuri { rotation } = &mut self.kind {
            *rotation += KHUKURI_SPIN_DEG;
        }
    }

    pub fn rect(&self) -> Rect {
        let size = self.size();
        Rect::new(self.pos.x, self.pos.y, size.x, size.y)
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Cup of tea: doubles climb speed
    Chiyaa,
    /// Prayer wheel: ignore enemies for a while
    PrayerWheel,
}

/// A collectible bobbing in place
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    /// Resting position; the drawn/hit position bobs around it
    pub pos: Vec2,
    pub size: Vec2,
    pub bob_phase: f32,
}

impl PowerUp {
    pub fn new(kind: PowerUpKind, pos: Vec2) -> Self {
        Self {
            kind,
            pos,
            size: Vec2::splat(POWERUP_SIZE),
            bob_phase: 0.0,
        }
    }

    pub fn update(&mut self) {
        self.bob_phase += BOB_STEP;
    }

    /// Resting y plus the bob offset
    pub fn effective_y(&self) -> f32 {
        self.pos.y + self.bob_phase.sin() * BOB_AMPLITUDE
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.effective_y(), self.size.x, self.size.y)
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u32,
    /// Best score this process has seen; survives restarts
    pub high_score: u32,
    /// Frames since the current run started
    pub game_start_ticks: u32,
    /// Frames since the last enemy spawn
    pub enemy_spawn_ticks: u32,
    /// Frames since the last power-up spawn
    pub powerup_spawn_ticks: u32,
    /// World y of the top edge of the viewport
    pub camera_offset: f32,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub powerups: Vec<PowerUp>,
    /// Number of runs started, including the first
    pub runs: u32,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Running,
            score: 0,
            high_score: 0,
            game_start_ticks: 0,
            enemy_spawn_ticks: 0,
            powerup_spawn_ticks: 0,
            camera_offset: 0.0,
            player: Player::default(),
            enemies: Vec::new(),
            powerups: Vec::new(),
            runs: 1,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Start a fresh run; only the high score and the RNG stream carry over
    pub fn restart(&mut self) {
        self.phase = GamePhase::Running;
        self.score = 0;
        self.game_start_ticks = 0;
        self.enemy_spawn_ticks = 0;
        self.powerup_spawn_ticks = 0;
        self.camera_offset = 0.0;
        self.player = Player::default();
        self.enemies.clear();
        self.powerups.clear();
        self.runs += 1;
        log::info!("Run {} started (high score {})", self.runs, self.high_score);
    }
}
