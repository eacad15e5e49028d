//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Fixed step only (one call to `tick` is one step)
//! - Randomness comes from the caller's RNG
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod state;
pub mod tick;

pub use ai::track_ball;
pub use collision::{Wall, bounce_off_walls, hit_left_paddle, hit_right_paddle};
pub use state::{Ball, Paddle, Side, WorldState};
pub use tick::{TickEvents, TickInput, tick};
