//! Paddle game simulation module
//!
//! All gameplay logic for the paddle game lives here. It must stay headless:
//! - One update per display frame, one unit of motion per frame
//! - Seeded RNG only (serve direction and speed)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{
    bounce_off_paddle, deflection_angle, is_paddle_hit, is_past_bottom, resolve_ceiling,
    resolve_side_walls,
};
pub use state::{Ball, Direction, InputState, Paddle, PaddleGame, Snapshot};
pub use tick::FrameEvent;
