//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed-length frame per tick
//! - Seeded RNG only
//! - Stable iteration order (insertion order of entities)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod camera;
pub mod collision;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::CollisionResult;
pub use rect::Rect;
pub use state::{
    Enemy, EnemyKind, GamePhase, GameState, JumpArc, Player, PowerUp, PowerUpKind, TimedEffect,
};
pub use tick::{TickInput, tick};
