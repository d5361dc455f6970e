//! Round configuration types.
//!
//! - `Difficulty`: selects how many pairs are dealt
//! - `RoundConfig`: difficulty, symbol alphabet and optional seed
//!
//! The engine never hardcodes a deck size; it always derives it from the
//! configured difficulty.

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};
use crate::cards::Alphabet;

/// Difficulty level of a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 8 pairs (16 cards).
    #[default]
    Easy,
    /// 12 pairs (24 cards).
    Medium,
    /// 16 pairs (32 cards).
    Hard,
}

impl Difficulty {
    /// Every difficulty, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Number of pairs dealt at this difficulty.
    #[must_use]
    pub const fn pairs(self) -> usize {
        match self {
            Difficulty::Easy => 8,
            Difficulty::Medium => 12,
            Difficulty::Hard => 16,
        }
    }

    /// Number of cards dealt at this difficulty.
    #[must_use]
    pub const fn card_count(self) -> usize {
        self.pairs() * 2
    }

    /// Lowercase tag used in payloads and storage keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(Error::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Configuration for a round.
///
/// `seed: None` draws a fresh seed from entropy when the round is created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Selected difficulty.
    pub difficulty: Difficulty,

    /// Ordered symbol alphabet; the first `pairs` symbols are dealt.
    pub alphabet: Alphabet,

    /// Seed for the deal RNG.
    pub seed: Option<u64>,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            alphabet: Alphabet::fruit(),
            seed: None,
        }
    }
}

impl RoundConfig {
    /// Create a config for the given difficulty with the default alphabet.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    /// Use a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a custom alphabet.
    #[must_use]
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Change the difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }
}
