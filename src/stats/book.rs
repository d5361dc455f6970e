//! Aggregate statistics across rounds.
//!
//! Only aggregates survive a round: totals, bests and a high-score table
//! per difficulty. Card identity and deal order are never recorded.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::config::Difficulty;
use crate::round::RoundResult;
use crate::scoring::Stars;

/// Entries kept per high-score table.
pub const HIGH_SCORE_LIMIT: usize = 10;

/// Running totals.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub total_games: u32,
    pub total_matches: u32,
    pub total_time_secs: u64,
    /// Best efficiency seen (0 before any game).
    pub best_efficiency: u32,
    /// Fastest win, if any.
    pub best_time_secs: Option<u32>,
}

impl GameStats {
    /// Fold in a won round. Returns true if it set a new best efficiency.
    pub fn record(&mut self, result: &RoundResult, efficiency: u32) -> bool {
        let first = self.total_games == 0;

        self.total_games += 1;
        self.total_matches += result.matches;
        self.total_time_secs += u64::from(result.time_secs);
        self.best_time_secs = Some(match self.best_time_secs {
            Some(best) => best.min(result.time_secs),
            None => result.time_secs,
        });

        let improved = first || efficiency > self.best_efficiency;
        self.best_efficiency = self.best_efficiency.max(efficiency);
        improved
    }

    /// Mean seconds per game.
    #[must_use]
    pub fn average_time_secs(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.total_time_secs as f64 / f64::from(self.total_games)
    }
}

/// One row of a high-score table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub efficiency: u32,
    pub stars: Stars,
    pub moves: u32,
    pub time_secs: u32,
}

impl HighScoreEntry {
    #[must_use]
    pub fn from_result(result: &RoundResult, efficiency: u32) -> Self {
        Self {
            efficiency,
            stars: Stars::from_efficiency(efficiency),
            moves: result.moves,
            time_secs: result.time_secs,
        }
    }

    /// Ranking key: higher efficiency, then faster, then fewer moves.
    fn rank_key(&self) -> (std::cmp::Reverse<u32>, u32, u32) {
        (std::cmp::Reverse(self.efficiency), self.time_secs, self.moves)
    }
}

/// Best entries, best first, at most `HIGH_SCORE_LIMIT` long.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreTable {
    entries: Vec<HighScoreEntry>,
}

impl HighScoreTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry. Returns its 0-based rank if it made the table.
    ///
    /// Ties keep earlier entries ahead.
    pub fn insert(&mut self, entry: HighScoreEntry) -> Option<usize> {
        let key = entry.rank_key();
        let rank = self.entries.partition_point(|e| e.rank_key() <= key);
        if rank >= HIGH_SCORE_LIMIT {
            return None;
        }

        self.entries.insert(rank, entry);
        self.entries.truncate(HIGH_SCORE_LIMIT);
        Some(rank)
    }

    #[must_use]
    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    #[must_use]
    pub fn best(&self) -> Option<&HighScoreEntry> {
        self.entries.first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Stats and high scores for one difficulty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyRecord {
    pub stats: GameStats,
    pub high_scores: HighScoreTable,
}

/// What recording a round changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordOutcome {
    /// Rank in the difficulty's high-score table, if it placed.
    pub rank: Option<usize>,
    /// Best efficiency at this difficulty so far.
    pub new_best: bool,
}

/// Everything persisted between rounds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsBook {
    pub overall: GameStats,
    by_difficulty: FxHashMap<Difficulty, DifficultyRecord>,
}

impl StatsBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold in a won round.
    ///
    /// # Panics
    ///
    /// Panics if the result has no matches (see `scoring::efficiency`).
    pub fn record(&mut self, result: &RoundResult) -> RecordOutcome {
        let efficiency = result.efficiency();
        self.overall.record(result, efficiency);

        let record = self.by_difficulty.entry(result.difficulty).or_default();
        let new_best = record.stats.record(result, efficiency);
        let rank = record
            .high_scores
            .insert(HighScoreEntry::from_result(result, efficiency));

        RecordOutcome { rank, new_best }
    }

    /// Record for a difficulty, if any round was won at it.
    #[must_use]
    pub fn difficulty(&self, difficulty: Difficulty) -> Option<&DifficultyRecord> {
        self.by_difficulty.get(&difficulty)
    }

    /// High scores for a difficulty (empty if none).
    #[must_use]
    pub fn high_scores(&self, difficulty: Difficulty) -> &[HighScoreEntry] {
        self.by_difficulty
            .get(&difficulty)
            .map(|r| r.high_scores.entries())
            .unwrap_or(&[])
    }
}
