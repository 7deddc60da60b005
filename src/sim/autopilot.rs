//! Demo-mode pilot
//!
//! Fills in a [`TickInput`] the way a cautious player would: hop to the other
//! wall when something is falling onto the current one, grab power-ups that
//! are hanging over the other wall, and restart straight away after a loss.

use super::rect::Rect;
use super::state::{GameState, Player};
use super::tick::TickInput;
use crate::consts::*;

/// How far above the player's head the pilot watches for trouble
pub const LOOKAHEAD: f32 = 150.0;
/// Horizontal slack around a wall column
pub const COLUMN_MARGIN: f32 = 20.0;

/// The strip of world a player standing at `x` would occupy in the near future
fn column(player: &Player, x: f32) -> Rect {
    Rect::new(
        x - COLUMN_MARGIN,
        player.pos.y - LOOKAHEAD,
        player.size.x + COLUMN_MARGIN * 2.0,
        player.size.y + LOOKAHEAD,
    )
}

fn landing_x(player: &Player) -> f32 {
    if player.on_left_wall {
        PLAYFIELD_WIDTH - WALL_INNER_OFFSET - player.size.x
    } else {
        WALL_INNER_OFFSET
    }
}

fn threats_in(state: &GameState, strip: &Rect) -> usize {
    state
        .enemies
        .iter()
        .filter(|e| strip.intersects(&e.rect()))
        .count()
}

/// Decide this frame's buttons
pub fn steer(state: &GameState, input: &mut TickInput) {
    if state.is_game_over() {
        input.restart = true;
        return;
    }

    let player = &state.player;
    if player.is_jumping() {
        return;
    }

    let here = column(player, player.pos.x);
    let there = column(player, landing_x(player));
    let danger_here = threats_in(state, &here);
    let danger_there = threats_in(state, &there);

    if danger_here > 0 && danger_there <= danger_here {
        input.jump = true;
        return;
    }

    // Safe where we are: go for a power-up on the far wall if that side is clear
    if danger_there == 0 && state.powerups.iter().any(|p| there.intersects(&p.rect())) {
        input.jump = true;
    }
}
