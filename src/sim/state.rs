//! World state and core simulation types
//!
//! One `WorldState` per session. The tick mutates it in place; the renderer
//! only reads it.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Which side of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Left paddle, pointer controlled
    Player,
    /// Right paddle, AI controlled
    Ai,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(radius: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    /// Current speed (magnitude of the velocity)
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// A vertical paddle. `x` is fixed by the config; only `y` moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Whether `y` lies strictly inside the paddle's vertical span
    #[inline]
    pub fn covers(&self, y: f32) -> bool {
        y > self.y && y < self.y + self.height
    }
}

/// Complete world snapshot (serializable for debugging and replays)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    /// Geometry this world was built with
    pub config: Config,
    /// Left paddle
    pub player: Paddle,
    /// Right paddle
    pub ai: Paddle,
    pub ball: Ball,
    pub player_score: u32,
    pub ai_score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl WorldState {
    /// Start a session: paddles centered, ball served from the center, 0-0
    pub fn new<R: Rng>(config: Config, rng: &mut R) -> Self {
        let paddle_y = config.centered_paddle_y();
        let mut state = Self {
            config,
            player: Paddle::new(
                config.player_paddle_x(),
                paddle_y,
                config.paddle_width,
                config.paddle_height,
            ),
            ai: Paddle::new(
                config.ai_paddle_x(),
                paddle_y,
                config.paddle_width,
                config.paddle_height,
            ),
            ball: Ball::new(config.ball_radius),
            player_score: 0,
            ai_score: 0,
            time_ticks: 0,
        };

        state.reset_ball(1.0, rng);

        state
    }

    /// Re-serve the ball from the field center.
    ///
    /// `direction` is `1.0` after the AI scores and `-1.0` after the player
    /// scores. It is multiplied by a random sign, so either side may receive
    /// the serve. The vertical component is uniform in `[-speed, speed)`.
    pub fn reset_ball<R: Rng>(&mut self, direction: f32, rng: &mut R) {
        let speed = self.config.ball_speed;
        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };

        self.ball.pos = self.config.center();
        self.ball.vel = Vec2::new(
            speed * direction * sign,
            speed * rng.random_range(-1.0f32..1.0),
        );
    }

    /// Score for one side
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player_score,
            Side::Ai => self.ai_score,
        }
    }
}
