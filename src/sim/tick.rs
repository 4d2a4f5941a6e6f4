//! Per-frame simulation update
//!
//! One call per display refresh. Motion is measured in pixels per frame, so
//! there is no timestep argument.

use serde::Serialize;

use super::collision::{
    bounce_off_paddle, is_paddle_hit, is_past_bottom, resolve_ceiling, resolve_side_walls,
};
use super::state::PaddleGame;

/// Something the host may want to react to (HUD refresh, effects)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum FrameEvent {
    /// Ball bounced off the left or right wall
    WallBounce,
    /// Ball bounced off the top wall
    CeilingBounce,
    /// Ball came off the paddle
    PaddleHit { score: u32, speed: f32 },
    /// Score passed the previous best
    NewBest(u32),
    /// Ball left through the bottom; the round is over
    Missed { score: u32 },
}

impl PaddleGame {
    /// Advance the simulation by one frame.
    ///
    /// Does nothing while the game is stopped after a miss.
    pub fn advance_frame(&mut self) -> Vec<FrameEvent> {
        let mut events = Vec::new();
        if !self.running {
            return events;
        }

        // Paddle: both keys held cancel out, then clamp to the field
        let dx = self.input.step(self.paddle.speed);
        self.paddle.shift(dx, self.settings.field_width);

        // Ball: one Euler step
        self.ball.pos += self.ball.vel;

        if resolve_side_walls(&mut self.ball, self.settings.field_width) {
            events.push(FrameEvent::WallBounce);
        }
        if resolve_ceiling(&mut self.ball) {
            events.push(FrameEvent::CeilingBounce);
        }

        if is_paddle_hit(&self.ball, &self.paddle) {
            let speed = bounce_off_paddle(
                &mut self.ball,
                &self.paddle,
                self.settings.deflection_span,
                self.settings.hit_speed_increment,
                self.settings.max_ball_speed,
                self.settings.hit_separation,
            );
            let new_best = self.scoreboard.record_hit();
            let score = self.scoreboard.score;
            events.push(FrameEvent::PaddleHit { score, speed });
            if new_best {
                log::debug!("New best: {score}");
                events.push(FrameEvent::NewBest(score));
            }
        }

        if is_past_bottom(&self.ball, self.settings.field_height) {
            self.running = false;
            let score = self.scoreboard.score;
            log::info!("Missed! score={score} best={}", self.scoreboard.best);
            events.push(FrameEvent::Missed { score });
        }

        events
    }
}
