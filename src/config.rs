//! Playfield geometry
//!
//! Immutable for the lifetime of a session. Width and height normally come
//! from the host canvas; everything else keeps the classic defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a positive finite number, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },
    #[error("field height {field_height} must exceed paddle height {paddle_height}")]
    FieldTooShort { field_height: f32, paddle_height: f32 },
    #[error("field width {field_width} must exceed {required} to fit both paddles and the ball")]
    FieldTooNarrow { field_width: f32, required: f32 },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Field and entity dimensions shared by the simulation and the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between each side wall and its paddle
    pub paddle_margin: f32,
    /// Base paddle speed (the AI moves at a fraction of it)
    pub paddle_speed: f32,
    pub ball_radius: f32,
    /// Serve speed
    pub ball_speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            paddle_speed: PADDLE_SPEED,
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
        }
    }
}

impl Config {
    /// Default geometry on a field of the given size (the host canvas)
    pub fn with_field(width: f32, height: f32) -> Self {
        Self {
            field_width: width,
            field_height: height,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the geometry leaves room to play
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dimensions = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
        ];
        for (name, value) in dimensions {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }
        // Margin may be zero (paddles flush against the wall)
        if !self.paddle_margin.is_finite() || self.paddle_margin < 0.0 {
            return Err(ConfigError::InvalidDimension {
                name: "paddle_margin",
                value: self.paddle_margin,
            });
        }

        if self.field_height <= self.paddle_height {
            return Err(ConfigError::FieldTooShort {
                field_height: self.field_height,
                paddle_height: self.paddle_height,
            });
        }

        let required = 2.0 * (self.paddle_margin + self.paddle_width + self.ball_radius);
        if self.field_width <= required {
            return Err(ConfigError::FieldTooNarrow {
                field_width: self.field_width,
                required,
            });
        }

        Ok(())
    }

    /// Lowest legal paddle top edge
    #[inline]
    pub fn max_paddle_y(&self) -> f32 {
        self.field_height - self.paddle_height
    }

    /// Clamp a paddle top edge into `[0, field_height - paddle_height]`
    #[inline]
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.min(self.max_paddle_y()).max(0.0)
    }

    /// Paddle top edge that centers it vertically
    #[inline]
    pub fn centered_paddle_y(&self) -> f32 {
        self.max_paddle_y() / 2.0
    }

    /// Center of the playfield (serve point)
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    /// Left edge of the player (left) paddle
    #[inline]
    pub fn player_paddle_x(&self) -> f32 {
        self.paddle_margin
    }

    /// Left edge of the AI (right) paddle
    #[inline]
    pub fn ai_paddle_x(&self) -> f32 {
        self.field_width - self.paddle_margin - self.paddle_width
    }

    /// Per-tick AI paddle step
    #[inline]
    pub fn ai_speed(&self) -> f32 {
        self.paddle_speed * AI_SPEED_FACTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.paddle_width, 14.0);
        assert_eq!(config.paddle_height, 100.0);
        assert_eq!(config.paddle_margin, 20.0);
        assert_eq!(config.paddle_speed, 8.0);
        assert_eq!(config.ball_radius, 12.0);
        assert_eq!(config.ball_speed, 6.0);
    }

    #[test]
    fn test_with_field_keeps_defaults() {
        let config = Config::with_field(640.0, 480.0);
        assert_eq!(config.field_width, 640.0);
        assert_eq!(config.field_height, 480.0);
        assert_eq!(config.paddle_height, PADDLE_HEIGHT);
        assert_eq!(config.ai_paddle_x(), 640.0 - 20.0 - 14.0);
        assert_eq!(config.center(), Vec2::new(320.0, 240.0));
    }

    #[test]
    fn test_clamp_paddle_y() {
        let config = Config::with_field(800.0, 500.0);
        assert_eq!(config.clamp_paddle_y(-30.0), 0.0);
        assert_eq!(config.clamp_paddle_y(120.0), 120.0);
        assert_eq!(config.clamp_paddle_y(450.0), 400.0);
        assert_eq!(config.centered_paddle_y(), 200.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = Config::from_json(r#"{ "field_width": 640, "field_height": 360 }"#)
            .expect("valid config");
        assert_eq!(config.field_width, 640.0);
        assert_eq!(config.field_height, 360.0);
        assert_eq!(config.ball_radius, BALL_RADIUS);
    }

    #[test]
    fn test_rejects_bad_geometry() {
        let short = Config::with_field(800.0, 80.0);
        assert!(matches!(
            short.validate(),
            Err(ConfigError::FieldTooShort { .. })
        ));

        let narrow = Config::with_field(90.0, 500.0);
        assert!(matches!(
            narrow.validate(),
            Err(ConfigError::FieldTooNarrow { .. })
        ));

        let negative = Config {
            ball_radius: -1.0,
            ..Config::default()
        };
        assert!(matches!(
            negative.validate(),
            Err(ConfigError::InvalidDimension { name: "ball_radius", .. })
        ));

        let nan = Config::with_field(f32::NAN, 500.0);
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Config::from_json("{ field_width: "),
            Err(ConfigError::Json(_))
        ));
    }
}
