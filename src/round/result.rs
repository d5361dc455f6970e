//! Round-result payload emitted once on win.

use serde::{Deserialize, Serialize};

use crate::core::config::Difficulty;
use crate::scoring::{self, Score};

/// Final snapshot of a won round.
///
/// Serializes as `{"moves", "time", "matches", "difficulty"}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundResult {
    /// Completed turns.
    pub moves: u32,
    /// Elapsed seconds on the round clock.
    #[serde(rename = "time")]
    pub time_secs: u32,
    /// Pairs found.
    pub matches: u32,
    /// Difficulty the round was dealt at.
    pub difficulty: Difficulty,
}

impl RoundResult {
    /// Efficiency percentage. Panics if no pair was matched.
    #[must_use]
    pub fn efficiency(&self) -> u32 {
        scoring::efficiency(self.moves, self.matches)
    }

    /// Efficiency, stars and performance tier.
    #[must_use]
    pub fn score(&self) -> Score {
        Score::from_efficiency(self.efficiency())
    }

    /// Share of turns that found a pair, as a percentage.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.moves == 0 {
            return 0.0;
        }
        f64::from(self.matches) / f64::from(self.moves) * 100.0
    }
}
