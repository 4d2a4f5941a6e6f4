//! Paddle game state and core simulation types
//!
//! Everything the frame update reads or writes lives in `PaddleGame`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::highscores::Scoreboard;
use crate::settings::Settings;

/// Horizontal steering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// Which direction keys are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub move_left: bool,
    pub move_right: bool,
}

impl InputState {
    pub fn set(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Left => self.move_left = held,
            Direction::Right => self.move_right = held,
        }
    }

    /// Net horizontal step for one frame (left and right cancel out)
    pub fn step(&self, speed: f32) -> f32 {
        let mut dx = 0.0;
        if self.move_left {
            dx -= speed;
        }
        if self.move_right {
            dx += speed;
        }
        dx
    }
}

/// The player's paddle. `pos` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Pixels per frame while a direction is held
    pub speed: f32,
}

impl Paddle {
    /// A paddle centred horizontally on the field
    pub fn centered(settings: &Settings) -> Self {
        Self {
            pos: Vec2::new(settings.paddle_max_x() / 2.0, settings.paddle_y),
            width: settings.paddle_width,
            height: settings.paddle_height,
            speed: settings.paddle_speed,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }

    /// Move by `dx` and clamp into [0, field_width - width]
    pub fn shift(&mut self, dx: f32, field_width: f32) {
        let max_x = (field_width - self.width).max(0.0);
        self.pos.x = (self.pos.x + dx).clamp(0.0, max_x);
    }
}

/// The ball. `pos` is the centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
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

    /// Current speed (pixels per frame)
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// Read-only view handed to a render sink
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub field: Vec2,
    pub paddle: Paddle,
    pub ball: Ball,
    pub score: u32,
    pub best: u32,
    pub running: bool,
}

/// Complete paddle game state
#[derive(Debug, Clone)]
pub struct PaddleGame {
    /// Field and physics tuning (sanitized)
    pub(crate) settings: Settings,
    pub(crate) paddle: Paddle,
    pub(crate) ball: Ball,
    pub(crate) scoreboard: Scoreboard,
    /// False after a miss until the next serve or reset
    pub(crate) running: bool,
    pub(crate) input: InputState,
    rng: Pcg32,
}

impl PaddleGame {
    /// New game with default tuning, ball already served
    pub fn new(seed: u64) -> Self {
        Self::with_settings(Settings::default(), seed)
    }

    pub fn with_settings(settings: Settings, seed: u64) -> Self {
        let settings = settings.sanitized();
        let mut game = Self {
            paddle: Paddle::centered(&settings),
            ball: Ball::new(settings.ball_radius),
            scoreboard: Scoreboard::new(),
            running: true,
            input: InputState::default(),
            rng: Pcg32::seed_from_u64(seed),
            settings,
        };
        game.reset();
        game
    }

    /// Start over: zero score, centred paddle, fresh serve. Best is kept.
    pub fn reset(&mut self) {
        self.scoreboard.reset_score();
        self.running = true;
        self.paddle = Paddle::centered(&self.settings);
        self.place_ball_for_serve();
        log::info!("Paddle game reset (best {})", self.scoreboard.best);
    }

    /// Put the ball back in play after a miss. Ignored while running; the
    /// score carries over.
    pub fn serve(&mut self) -> bool {
        if self.running {
            log::debug!("Ignoring serve: ball already in play");
            return false;
        }
        self.place_ball_for_serve();
        self.running = true;
        log::info!("Serve (score {})", self.scoreboard.score);
        true
    }

    /// Centre the ball and give it a random horizontal direction and speed
    fn place_ball_for_serve(&mut self) {
        let s = &self.settings;
        let direction = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let speed_x = self
            .rng
            .random_range(s.serve_speed_x_min..s.serve_speed_x_max);

        self.ball = Ball {
            pos: Vec2::new(s.field_width / 2.0, s.field_height / 2.0),
            vel: Vec2::new(direction * speed_x, s.serve_speed_y),
            radius: s.ball_radius,
        };
    }

    /// Put the ball at an exact position and velocity (replays, tests).
    /// Does not change whether the game is running.
    pub fn place_ball(&mut self, pos: Vec2, vel: Vec2) {
        self.ball.pos = pos;
        self.ball.vel = vel;
    }

    pub fn key_down(&mut self, direction: Direction) {
        self.input.set(direction, true);
    }

    pub fn key_up(&mut self, direction: Direction) {
        self.input.set(direction, false);
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn input(&self) -> InputState {
        self.input
    }

    pub fn score(&self) -> u32 {
        self.scoreboard.score
    }

    pub fn best(&self) -> u32 {
        self.scoreboard.best
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            field: Vec2::new(self.settings.field_width, self.settings.field_height),
            paddle: self.paddle,
            ball: self.ball,
            score: self.scoreboard.score,
            best: self.scoreboard.best,
            running: self.running,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_new_game_is_served() {
        let game = PaddleGame::new(7);
        assert!(game.is_running());
        assert_eq!(game.score(), 0);
        assert_eq!(game.paddle().pos.x, (FIELD_WIDTH - PADDLE_WIDTH) / 2.0);
        assert_eq!(game.paddle().pos.y, PADDLE_Y);
        assert_eq!(game.ball().pos, Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0));
    }

    #[test]
    fn test_serve_velocity_range() {
        for seed in 0..64 {
            let game = PaddleGame::new(seed);
            let vel = game.ball().vel;
            assert!(vel.x.abs() >= SERVE_SPEED_X_MIN && vel.x.abs() < SERVE_SPEED_X_MAX);
            assert_eq!(vel.y, SERVE_SPEED_Y);
        }
    }

    #[test]
    fn test_serve_direction_varies() {
        let signs: Vec<bool> = (0..64)
            .map(|seed| PaddleGame::new(seed).ball().vel.x > 0.0)
            .collect();
        assert!(signs.iter().any(|&s| s));
        assert!(signs.iter().any(|&s| !s));
    }

    #[test]
    fn test_serve_ignored_while_running() {
        let mut game = PaddleGame::new(1);
        let ball = *game.ball();
        assert!(!game.serve());
        assert_eq!(*game.ball(), ball);
    }

    #[test]
    fn test_input_flags() {
        let mut game = PaddleGame::new(1);
        game.key_down(Direction::Left);
        game.key_down(Direction::Right);
        assert_eq!(game.input().step(PADDLE_SPEED), 0.0);
        game.key_up(Direction::Right);
        assert_eq!(game.input().step(PADDLE_SPEED), -PADDLE_SPEED);
        assert!(game.input().move_left);
        assert!(!game.input().move_right);
    }

    #[test]
    fn test_paddle_shift_clamps() {
        let settings = Settings::default();
        let mut paddle = Paddle::centered(&settings);
        paddle.shift(-10_000.0, settings.field_width);
        assert_eq!(paddle.left(), 0.0);
        paddle.shift(10_000.0, settings.field_width);
        assert_eq!(paddle.right(), settings.field_width);
    }
}
