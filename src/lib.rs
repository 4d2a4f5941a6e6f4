//! Tiny Arcade - headless cores for two small browser games
//!
//! Core modules:
//! - `board`: Tic-tac-toe controller (moves, win/draw detection, status text)
//! - `sim`: Paddle-and-ball physics loop (frame update, collisions, serve)
//! - `platform`: Key code mapping from the host's input events
//! - `highscores`: In-memory session scoreboard
//! - `settings`: Data-driven tuning for the paddle field
//! - `web`: wasm-bindgen handles for a browser host (wasm32 only)
//!
//! Rendering, DOM wiring and HUD elements belong to the host. The cores only
//! expose read access to their state.

pub mod board;
pub mod highscores;
pub mod platform;
pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use board::{Cell, Outcome, Status, Symbol, TicTacToe};
pub use highscores::Scoreboard;
pub use platform::{Direction, KeyAction};
pub use settings::Settings;
pub use sim::{FrameEvent, PaddleGame};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 640.0;
    pub const FIELD_HEIGHT: f32 = 420.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 14.0;
    pub const PADDLE_Y: f32 = 330.0;
    /// Pixels per frame while a direction key is held
    pub const PADDLE_SPEED: f32 = 6.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Horizontal serve speed is drawn from [MIN, MAX) with a random sign
    pub const SERVE_SPEED_X_MIN: f32 = 2.6;
    pub const SERVE_SPEED_X_MAX: f32 = 3.8;
    /// Vertical serve speed (negative is up)
    pub const SERVE_SPEED_Y: f32 = -3.6;

    /// Speed added on every paddle hit
    pub const HIT_SPEED_INCREMENT: f32 = 0.15;
    /// Ball speed cap (pixels per frame)
    pub const BALL_MAX_SPEED: f32 = 7.0;
    /// Full deflection span across the paddle, as a fraction of π
    pub const DEFLECTION_SPAN: f32 = 0.7;
    /// Gap left between ball and paddle top after a hit
    pub const HIT_SEPARATION: f32 = 0.5;
}

/// Fractional position of `x` across a span starting at `left`, in [0, 1]
#[inline]
pub fn fraction_across(x: f32, left: f32, width: f32) -> f32 {
    if width <= 0.0 {
        return 0.5;
    }
    ((x - left) / width).clamp(0.0, 1.0)
}
