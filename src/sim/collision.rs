//! Collision detection and response
//!
//! Everything is axis-aligned: the ball is tested by its bounding edges
//! against the top/bottom walls and the inner face of each paddle.

use super::state::{Ball, Paddle};
use crate::consts::{PADDLE_BOUNCE, PADDLE_SPIN};

/// Which wall the ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Top,
    Bottom,
}

/// Reflect the ball off the top or bottom wall.
///
/// The ball is pushed back inside the field and its vertical velocity is
/// inverted. At most one wall is handled per call.
pub fn bounce_off_walls(ball: &mut Ball, field_height: f32) -> Option<Wall> {
    if ball.top() < 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = -ball.vel.y;
        Some(Wall::Top)
    } else if ball.bottom() > field_height {
        ball.pos.y = field_height - ball.radius;
        ball.vel.y = -ball.vel.y;
        Some(Wall::Bottom)
    } else {
        None
    }
}

/// Check the ball against the left (player) paddle and bounce it.
///
/// Hits whenever the ball's left edge is past the paddle face and its center
/// is within the paddle span, regardless of travel direction. The ball is
/// snapped onto the face so it cannot stick inside the paddle.
pub fn hit_left_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    if ball.left() < paddle.right() && paddle.covers(ball.pos.y) {
        ball.pos.x = paddle.right() + ball.radius;
        deflect(ball, paddle);
        true
    } else {
        false
    }
}

/// Mirror of [`hit_left_paddle`] for the right (AI) paddle
pub fn hit_right_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    if ball.right() > paddle.left() && paddle.covers(ball.pos.y) {
        ball.pos.x = paddle.left() - ball.radius;
        deflect(ball, paddle);
        true
    } else {
        false
    }
}

/// Reflect-and-amplify horizontally, then replace the vertical velocity with
/// spin proportional to the offset from the paddle center.
fn deflect(ball: &mut Ball, paddle: &Paddle) {
    ball.vel.x *= PADDLE_BOUNCE;
    ball.vel.y = (ball.pos.y - paddle.center_y()) * PADDLE_SPIN;
}
