//! Aggregate statistics and their persistence.
//!
//! - `StatsBook`: overall totals plus per-difficulty stats and high scores
//! - `StatsStore`: load/save collaborator (`MemoryStore`, `FileStore`)

pub mod book;
pub mod store;

pub use book::{
    DifficultyRecord, GameStats, HighScoreEntry, HighScoreTable, RecordOutcome, StatsBook,
    HIGH_SCORE_LIMIT,
};
pub use store::{FileStore, MemoryStore, StatsStore};
