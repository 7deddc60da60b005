//! Scrolling camera
//!
//! The camera is a single world-space y offset: the world y shown at the top
//! edge of the viewport. It follows the player upward as they climb.

use crate::consts::{CAMERA_LEAD, PRUNE_MARGIN, VIEWPORT_HEIGHT};

/// Camera offset that keeps the player `CAMERA_LEAD` above the viewport bottom
#[inline]
pub fn follow(player_y: f32) -> f32 {
    player_y - VIEWPORT_HEIGHT + CAMERA_LEAD
}

/// World y past which entities have scrolled out of play
#[inline]
pub fn prune_line(camera_offset: f32) -> f32 {
    camera_offset + VIEWPORT_HEIGHT + PRUNE_MARGIN
}
