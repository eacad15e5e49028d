//! Fixed step simulation tick
//!
//! One call advances the world by one logical step. There is no notion of
//! elapsed time here; the host decides how often to call it.

use rand::Rng;

use super::ai::track_ball;
use super::collision::{bounce_off_walls, hit_left_paddle, hit_right_paddle};
use super::state::{Side, WorldState};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Player paddle top edge, already mapped from the pointer and clamped
    pub player_y: Option<f32>,
}

/// What happened during a tick (for hosts and logging; never fed back)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub wall_bounce: bool,
    pub player_hit: bool,
    pub ai_hit: bool,
    /// Side that won a point this tick
    pub scored: Option<Side>,
}

/// Advance the world by one tick.
///
/// Order is fixed: move, walls, paddles, scoring, AI. Paddle hits must be
/// resolved before scoring so a ball saved on the same tick it crosses the
/// paddle face is not counted as a point.
pub fn tick<R: Rng>(state: &mut WorldState, input: &TickInput, rng: &mut R) -> TickEvents {
    let mut events = TickEvents::default();

    if let Some(y) = input.player_y {
        state.player.y = y;
    }

    state.time_ticks += 1;

    let ball = &mut state.ball;
    ball.pos += ball.vel;

    events.wall_bounce = bounce_off_walls(ball, state.config.field_height).is_some();
    events.player_hit = hit_left_paddle(ball, &state.player);
    events.ai_hit = hit_right_paddle(ball, &state.ai);

    if state.ball.left() < 0.0 {
        state.ai_score += 1;
        log::debug!(
            "AI scores at tick {} ({}-{})",
            state.time_ticks,
            state.player_score,
            state.ai_score
        );
        state.reset_ball(1.0, rng);
        events.scored = Some(Side::Ai);
    }
    if state.ball.right() > state.config.field_width {
        state.player_score += 1;
        log::debug!(
            "Player scores at tick {} ({}-{})",
            state.time_ticks,
            state.player_score,
            state.ai_score
        );
        state.reset_ball(-1.0, rng);
        events.scored = Some(Side::Player);
    }

    let max_y = state.config.max_paddle_y();
    let ai_speed = state.config.ai_speed();
    track_ball(&mut state.ai, state.ball.pos.y, ai_speed, max_y);

    events
}
