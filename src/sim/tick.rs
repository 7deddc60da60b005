//! Per-frame simulation step
//!
//! Core game loop that advances the session by exactly one frame.

use super::state::GameState;
use super::{autopilot, camera, collision, spawn};
use crate::consts::*;

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Leap to the other wall (space/click)
    pub jump: bool,
    /// Start a new run after game over
    pub restart: bool,
    /// Demo mode - the autopilot presses the buttons
    pub autopilot: bool,
}

/// Advance the game state by one frame
///
/// Order within a frame: player, camera, score, spawner, entities, collisions.
/// A fatal collision ends the frame on the spot.
pub fn tick(state: &mut GameState, input: &TickInput) {
    let mut input = input.clone();
    if input.autopilot {
        autopilot::steer(state, &mut input);
    }

    if state.is_game_over() {
        if input.restart {
            state.restart();
        }
        return;
    }

    if input.jump {
        state.player.jump();
    }

    state.game_start_ticks += 1;

    state.player.update();
    state.camera_offset = camera::follow(state.player.pos.y);

    award_score(state);
    spawn::run(state);
    collision::update_and_prune(state);
    collision::resolve(state);
}

/// One point every `SCORE_INTERVAL_TICKS` once the warm-up is over
fn award_score(state: &mut GameState) {
    let ticks = state.game_start_ticks;
    if ticks > SCORE_WARMUP_TICKS && (ticks - SCORE_WARMUP_TICKS) % SCORE_INTERVAL_TICKS == 0 {
        state.score += 1;
        state.high_score = state.high_score.max(state.score);
    }
}
