//! Paddle game tuning
//!
//! Defaults come from `crate::consts`. A host may override any subset of
//! fields with a JSON document; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Field dimensions and physics tuning for the paddle game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Top edge of the paddle
    pub paddle_y: f32,
    /// Pixels per frame while a direction is held
    pub paddle_speed: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub serve_speed_x_min: f32,
    pub serve_speed_x_max: f32,
    /// Vertical serve velocity (negative is up)
    pub serve_speed_y: f32,
    pub hit_speed_increment: f32,
    pub max_ball_speed: f32,
    /// Full deflection span across the paddle, as a fraction of π
    pub deflection_span: f32,
    /// Gap left between ball and paddle top after a hit
    pub hit_separation: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_y: PADDLE_Y,
            paddle_speed: PADDLE_SPEED,

            ball_radius: BALL_RADIUS,
            serve_speed_x_min: SERVE_SPEED_X_MIN,
            serve_speed_x_max: SERVE_SPEED_X_MAX,
            serve_speed_y: SERVE_SPEED_Y,
            hit_speed_increment: HIT_SPEED_INCREMENT,
            max_ball_speed: BALL_MAX_SPEED,
            deflection_span: DEFLECTION_SPAN,
            hit_separation: HIT_SEPARATION,
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Values are sanitized before being returned.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Parse settings if a document is given, falling back to defaults when it
    /// is absent or malformed
    pub fn load_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(settings)) => {
                log::info!("Loaded paddle settings");
                settings
            }
            Some(Err(e)) => {
                log::warn!("Invalid paddle settings ({e}), using defaults");
                Self::default()
            }
            None => {
                log::info!("Using default paddle settings");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Clamp values that would break the field invariants
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        // Overflowing JSON numbers arrive as inf
        for (name, value, default) in [
            ("field_width", &mut self.field_width, defaults.field_width),
            ("field_height", &mut self.field_height, defaults.field_height),
            ("paddle_width", &mut self.paddle_width, defaults.paddle_width),
            ("paddle_height", &mut self.paddle_height, defaults.paddle_height),
            ("paddle_y", &mut self.paddle_y, defaults.paddle_y),
            ("paddle_speed", &mut self.paddle_speed, defaults.paddle_speed),
            ("ball_radius", &mut self.ball_radius, defaults.ball_radius),
            ("serve_speed_x_min", &mut self.serve_speed_x_min, defaults.serve_speed_x_min),
            ("serve_speed_x_max", &mut self.serve_speed_x_max, defaults.serve_speed_x_max),
            ("serve_speed_y", &mut self.serve_speed_y, defaults.serve_speed_y),
            ("hit_speed_increment", &mut self.hit_speed_increment, defaults.hit_speed_increment),
            ("max_ball_speed", &mut self.max_ball_speed, defaults.max_ball_speed),
            ("deflection_span", &mut self.deflection_span, defaults.deflection_span),
            ("hit_separation", &mut self.hit_separation, defaults.hit_separation),
        ] {
            if !value.is_finite() {
                log::warn!("Non-finite {name}, using default {default}");
                *value = default;
            }
        }

        if !(self.field_width > 0.0) || !(self.field_height > 0.0) {
            log::warn!("Non-positive field size, using default field");
            self.field_width = defaults.field_width;
            self.field_height = defaults.field_height;
        }
        if !(self.paddle_width > 0.0) || self.paddle_width > self.field_width {
            log::warn!("Paddle width {} does not fit the field", self.paddle_width);
            self.paddle_width = defaults.paddle_width.min(self.field_width);
        }
        if !(self.paddle_height > 0.0) {
            self.paddle_height = defaults.paddle_height;
        }
        self.paddle_y = self.paddle_y.clamp(0.0, self.field_height);
        self.paddle_speed = self.paddle_speed.max(0.0);

        let max_radius = self.field_width.min(self.field_height) / 2.0;
        if !(self.ball_radius > 0.0) || self.ball_radius > max_radius {
            log::warn!("Ball radius {} does not fit the field", self.ball_radius);
            self.ball_radius = defaults.ball_radius.min(max_radius);
        }
        if self.serve_speed_x_min < 0.0 || !(self.serve_speed_x_max > self.serve_speed_x_min) {
            log::warn!(
                "Invalid serve range [{}, {}), using defaults",
                self.serve_speed_x_min,
                self.serve_speed_x_max
            );
            self.serve_speed_x_min = defaults.serve_speed_x_min;
            self.serve_speed_x_max = defaults.serve_speed_x_max;
        }
        self.hit_speed_increment = self.hit_speed_increment.max(0.0);
        if !(self.max_ball_speed > 0.0) {
            self.max_ball_speed = defaults.max_ball_speed;
        }
        self.deflection_span = self.deflection_span.clamp(0.0, 1.0);
        self.hit_separation = self.hit_separation.max(0.0);

        self
    }

    /// Leftmost paddle x that keeps it on the field
    pub fn paddle_max_x(&self) -> f32 {
        (self.field_width - self.paddle_width).max(0.0)
    }
}
