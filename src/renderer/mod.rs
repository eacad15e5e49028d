//! Rendering module
//!
//! A thin draw-call layer. `render` reads the world and issues rectangles,
//! circles and text onto any [`Canvas`]; it never mutates game state.

pub mod commands;

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;

pub use commands::{DrawCommand, DrawList};

use crate::sim::WorldState;

/// CSS color string
pub type Color = &'static str;

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = "#222";
    pub const CENTER_LINE: Color = "#444";
    pub const PLAYER_PADDLE: Color = "#2ecc40";
    pub const AI_PADDLE: Color = "#ff4136";
    pub const BALL: Color = "#fafafa";
    pub const TEXT: Color = "#fafafa";
}

/// Dashed center guide
const DASH_WIDTH: f32 = 4.0;
const DASH_LENGTH: f32 = 24.0;
const DASH_SPACING: f32 = 36.0;

/// Score text
const SCORE_SIZE: f32 = 40.0;
const SCORE_Y: f32 = 60.0;

/// Drawing primitives supplied by the host
pub trait Canvas {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    /// Filled circle centered on `(x, y)`
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color);
    /// Text horizontally centered on `x` with its baseline at `y`
    fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color);
}

/// Draw one frame, back to front
pub fn render<C: Canvas + ?Sized>(state: &WorldState, canvas: &mut C) {
    let config = &state.config;
    let (width, height) = (config.field_width, config.field_height);

    canvas.fill_rect(0.0, 0.0, width, height, colors::BACKGROUND);

    let dash_x = width / 2.0 - DASH_WIDTH / 2.0;
    let mut y = 0.0;
    while y < height {
        canvas.fill_rect(dash_x, y, DASH_WIDTH, DASH_LENGTH, colors::CENTER_LINE);
        y += DASH_SPACING;
    }

    for (paddle, color) in [
        (&state.player, colors::PLAYER_PADDLE),
        (&state.ai, colors::AI_PADDLE),
    ] {
        canvas.fill_rect(paddle.x, paddle.y, paddle.width, paddle.height, color);
    }

    let ball = &state.ball;
    canvas.fill_circle(ball.pos.x, ball.pos.y, ball.radius, colors::BALL);

    canvas.fill_text(
        &state.player_score.to_string(),
        width / 4.0,
        SCORE_Y,
        SCORE_SIZE,
        colors::TEXT,
    );
    canvas.fill_text(
        &state.ai_score.to_string(),
        width * 3.0 / 4.0,
        SCORE_Y,
        SCORE_SIZE,
        colors::TEXT,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn world() -> WorldState {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = WorldState::new(Config::with_field(800.0, 500.0), &mut rng);
        state.player.y = 120.0;
        state.ai.y = 310.0;
        state.ball.pos = Vec2::new(333.0, 111.0);
        state.player_score = 4;
        state.ai_score = 12;
        state
    }

    #[test]
    fn test_frame_layout() {
        let state = world();
        let mut list = DrawList::default();
        render(&state, &mut list);

        let cmds = &list.commands;
        assert_eq!(
            cmds[0],
            DrawCommand::Rect {
                x: 0.0,
                y: 0.0,
                w: 800.0,
                h: 500.0,
                color: colors::BACKGROUND,
            }
        );

        // 0, 36, ..., 468 -> 14 dashes
        let dashes: Vec<_> = cmds
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { color, .. } if *color == colors::CENTER_LINE))
            .collect();
        assert_eq!(dashes.len(), 14);
        assert_eq!(
            dashes[1],
            &DrawCommand::Rect {
                x: 398.0,
                y: 36.0,
                w: 4.0,
                h: 24.0,
                color: colors::CENTER_LINE,
            }
        );

        assert!(cmds.contains(&DrawCommand::Rect {
            x: 20.0,
            y: 120.0,
            w: 14.0,
            h: 100.0,
            color: colors::PLAYER_PADDLE,
        }));
        assert!(cmds.contains(&DrawCommand::Rect {
            x: 766.0,
            y: 310.0,
            w: 14.0,
            h: 100.0,
            color: colors::AI_PADDLE,
        }));
        assert!(cmds.contains(&DrawCommand::Circle {
            x: 333.0,
            y: 111.0,
            radius: 12.0,
            color: colors::BALL,
        }));
    }

    #[test]
    fn test_scores_drawn_last() {
        let state = world();
        let mut list = DrawList::default();
        render(&state, &mut list);

        let n = list.commands.len();
        assert_eq!(
            list.commands[n - 2],
            DrawCommand::Text {
                text: "4".to_string(),
                x: 200.0,
                y: 60.0,
                size: 40.0,
                color: colors::TEXT,
            }
        );
        assert_eq!(
            list.commands[n - 1],
            DrawCommand::Text {
                text: "12".to_string(),
                x: 600.0,
                y: 60.0,
                size: 40.0,
                color: colors::TEXT,
            }
        );
    }
}
