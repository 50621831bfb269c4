use serde::{Deserialize, Serialize};

/// The player's gold tally. Never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    score: u32,
}

impl Scoreboard {
    /// Create a zeroed scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Add points (pickup).
    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Remove points (drop), flooring at zero.
    pub fn deduct(&mut self, points: u32) {
        self.score = self.score.saturating_sub(points);
    }

    /// Wipe the score (death).
    pub fn reset(&mut self) {
        self.score = 0;
    }
}
