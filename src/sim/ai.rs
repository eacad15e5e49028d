//! AI opponent
//!
//! A proportional controller with a dead-zone: the paddle steps toward the
//! ball's height at a fixed speed and holds still when already close.

use super::state::Paddle;
use crate::consts::AI_DEAD_ZONE;

/// Step the paddle toward `target_y`, then clamp its top edge to `[0, max_y]`
pub fn track_ball(paddle: &mut Paddle, target_y: f32, speed: f32, max_y: f32) {
    let center = paddle.center_y();
    if center < target_y - AI_DEAD_ZONE {
        paddle.y += speed;
    } else if center > target_y + AI_DEAD_ZONE {
        paddle.y -= speed;
    }
    paddle.y = paddle.y.min(max_y).max(0.0);
}
