//! Platform abstraction layer
//!
//! The simulation never touches input devices or frame scheduling. Hosts
//! feed pointer positions in and pull ticks out through these types:
//! - `pointer_to_paddle_y`: pointer coordinate to a legal paddle position
//! - `TickDriver`: one `advance()` per frame
//! - `Session`: owns the world and its seeded RNG

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::Config;
use crate::sim::{TickEvents, TickInput, WorldState, tick};

/// Map a pointer y-coordinate (field units) to the player paddle's top edge.
///
/// The paddle is centered on the pointer and clamped into the field.
pub fn pointer_to_paddle_y(pointer_y: f32, config: &Config) -> f32 {
    config.clamp_paddle_y(pointer_y - config.paddle_height / 2.0)
}

/// Something that can step the world once per frame
pub trait TickDriver {
    /// Run exactly one tick and return the updated world for rendering
    fn advance(&mut self) -> &WorldState;
}

/// A running game: world state, RNG and the latest pointer input
#[derive(Debug, Clone)]
pub struct Session {
    state: WorldState,
    rng: Pcg32,
    seed: u64,
    input: TickInput,
    last_events: TickEvents,
}

impl Session {
    /// Start a new session with the given seed
    pub fn new(config: Config, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = WorldState::new(config, &mut rng);
        log::info!(
            "Session started on {}x{} field with seed {}",
            config.field_width,
            config.field_height,
            seed
        );
        Self {
            state,
            rng,
            seed,
            input: TickInput::default(),
            last_events: TickEvents::default(),
        }
    }

    /// Record the pointer position. Takes effect on the next tick and stays
    /// in effect until the pointer moves again.
    pub fn set_pointer_y(&mut self, pointer_y: f32) {
        self.input.player_y = Some(pointer_to_paddle_y(pointer_y, &self.state.config));
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Events from the most recent tick
    pub fn last_events(&self) -> TickEvents {
        self.last_events
    }
}

impl TickDriver for Session {
    fn advance(&mut self) -> &WorldState {
        self.last_events = tick(&mut self.state, &self.input, &mut self.rng);
        if let Some(side) = self.last_events.scored {
            log::info!(
                "{:?} scored: {} - {}",
                side,
                self.state.player_score,
                self.state.ai_score
            );
        }
        &self.state
    }
}
