//! Mandir Jumper - a wall-jumping temple climber
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player motion, spawning, collisions, game state)
//! - `view`: Screen-space projection and read-only render snapshots
//! - `highscores`: Session statistics for the headless runner
//! - `settings`: Headless runner configuration

pub mod highscores;
pub mod settings;
pub mod sim;
pub mod view;

pub use highscores::{RunHistory, SessionSummary};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Frames per second every timer threshold is expressed against
    pub const FPS: u32 = 60;

    /// Playfield dimensions (world units, y grows downward)
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const VIEWPORT_HEIGHT: f32 = 700.0;

    /// Distance from the screen edge to the inner face of each wall
    pub const WALL_INNER_OFFSET: f32 = 80.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    pub const PLAYER_START_X: f32 = WALL_INNER_OFFSET;
    pub const PLAYER_START_Y: f32 = VIEWPORT_HEIGHT - 100.0;
    pub const CLIMB_SPEED: f32 = 2.0;
    pub const JUMP_DURATION: u32 = 20;
    pub const JUMP_HEIGHT: f32 = 60.0;

    /// Power-up effect durations (frames)
    pub const SPEED_BOOST_TICKS: u32 = 300;
    pub const INVINCIBILITY_TICKS: u32 = 180;

    /// Enemy sizes
    pub const CROW_SIZE: (f32, f32) = (25.0, 20.0);
    pub const KHUKURI_SIZE: (f32, f32) = (30.0, 30.0);
    /// Khukuri spin per frame (degrees, cosmetic)
    pub const KHUKURI_SPIN_DEG: f32 = 5.0;

    /// Power-up size and bob
    pub const POWERUP_SIZE: f32 = 20.0;
    pub const BOB_STEP: f32 = 0.2;
    pub const BOB_AMPLITUDE: f32 = 3.0;

    /// Score: one point every 6 frames after a one second warm-up
    pub const SCORE_WARMUP_TICKS: u32 = 60;
    pub const SCORE_INTERVAL_TICKS: u32 = 6;

    /// Spawning
    pub const ENEMY_WARMUP_TICKS: u32 = 120;
    pub const ENEMY_SPAWN_BASE: u32 = 90;
    pub const ENEMY_SPAWN_MIN: u32 = 30;
    pub const ENEMY_SPAWN_SCORE_STEP: u32 = 50;
    pub const POWERUP_SPAWN_TICKS: u32 = 600;
    pub const SPAWN_X_MIN: i32 = 100;
    pub const SPAWN_X_MAX: i32 = PLAYFIELD_WIDTH as i32 - 120;

    /// Camera keeps the player this far above the viewport bottom
    pub const CAMERA_LEAD: f32 = 200.0;
    /// Entities this far below the viewport bottom are dropped
    pub const PRUNE_MARGIN: f32 = 100.0;
    /// Entities within this margin of the viewport are drawn
    pub const DRAW_MARGIN: f32 = 50.0;
}
