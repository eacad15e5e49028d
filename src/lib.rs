//! Canvas Pong - single-screen Pong against an AI paddle
//!
//! Core modules:
//! - `sim`: Deterministic simulation (world state, tick, collisions, AI)
//! - `config`: Playfield geometry
//! - `platform`: Pointer mapping and the tick driver
//! - `renderer`: Draw-call layer over an abstract canvas

pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{Config, ConfigError};
pub use platform::{Session, TickDriver, pointer_to_paddle_y};
pub use sim::{TickEvents, TickInput, WorldState, tick};

/// Game configuration constants
pub mod consts {
    /// Default playfield dimensions (used when no host canvas is available)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 14.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between the side wall and the paddle
    pub const PADDLE_MARGIN: f32 = 20.0;
    pub const PADDLE_SPEED: f32 = 8.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 12.0;
    /// Serve speed along each axis
    pub const BALL_SPEED: f32 = 6.0;

    /// Horizontal velocity multiplier on a paddle hit (reflect + 10%, uncapped)
    pub const PADDLE_BOUNCE: f32 = -1.1;
    /// Vertical velocity per unit of offset from the paddle center
    pub const PADDLE_SPIN: f32 = 0.25;

    /// AI paddle moves at this fraction of PADDLE_SPEED
    pub const AI_SPEED_FACTOR: f32 = 0.7;
    /// AI holds still while its center is within this distance of the ball
    pub const AI_DEAD_ZONE: f32 = 10.0;
}
