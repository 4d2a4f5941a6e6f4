//! Session scoreboard for the paddle game
//!
//! Kept in memory only: the best score survives resets and serves but not the
//! session itself.

use serde::{Deserialize, Serialize};

/// Current rally score and the session's best
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Paddle hits since the last reset
    pub score: u32,
    /// Highest score seen this session (never decreases)
    pub best: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a paddle hit. Returns true when the hit set a new best.
    pub fn record_hit(&mut self) -> bool {
        self.score += 1;
        if self.score > self.best {
            self.best = self.score;
            return true;
        }
        false
    }

    /// Start a new round from zero, keeping the best
    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}
