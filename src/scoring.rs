//! Scoring: efficiency, star rating and performance tier.
//!
//! All functions here are pure. They are only meaningful for a won round,
//! where at least one pair has been matched.
//!
//! ```
//! use memory_match::scoring::{efficiency, Stars};
//!
//! assert_eq!(efficiency(20, 8), 75);
//! assert_eq!(Stars::from_efficiency(75), Stars::Two);
//! ```

use serde::{Deserialize, Serialize};

/// Efficiency percentage for a finished round.
///
/// `perfect = matches × 2`, then
/// `round(max(0, 100 − (moves − perfect) / perfect × 100))`, capped at 100.
///
/// # Panics
///
/// Panics if `matches` is zero.
#[must_use]
pub fn efficiency(moves: u32, matches: u32) -> u32 {
    assert!(matches > 0, "efficiency requires at least one matched pair");

    let perfect = f64::from(matches) * 2.0;
    let raw = 100.0 - (f64::from(moves) - perfect) / perfect * 100.0;
    raw.clamp(0.0, 100.0).round() as u32
}

/// Star rating. There is no zero-star outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stars {
    One = 1,
    Two = 2,
    Three = 3,
}

impl Stars {
    #[must_use]
    pub const fn from_efficiency(efficiency: u32) -> Self {
        if efficiency >= 90 {
            Stars::Three
        } else if efficiency >= 75 {
            Stars::Two
        } else {
            Stars::One
        }
    }

    /// Number of filled stars (1-3).
    #[must_use]
    pub const fn count(self) -> u8 {
        self as u8
    }
}

/// Coarse performance band shown alongside the score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerformanceTier {
    Outstanding,
    Great,
    Good,
    KeepPracticing,
}

impl PerformanceTier {
    #[must_use]
    pub const fn from_efficiency(efficiency: u32) -> Self {
        if efficiency >= 90 {
            PerformanceTier::Outstanding
        } else if efficiency >= 75 {
            PerformanceTier::Great
        } else if efficiency >= 60 {
            PerformanceTier::Good
        } else {
            PerformanceTier::KeepPracticing
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            PerformanceTier::Outstanding => "Outstanding! You're a memory master!",
            PerformanceTier::Great => "Great job! Your memory is sharp!",
            PerformanceTier::Good => "Good work! Keep practicing!",
            PerformanceTier::KeepPracticing => "Nice try! You'll get better with practice!",
        }
    }
}

/// Derived score of a won round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub efficiency: u32,
    pub stars: Stars,
    pub tier: PerformanceTier,
}

impl Score {
    #[must_use]
    pub const fn from_efficiency(efficiency: u32) -> Self {
        Self {
            efficiency,
            stars: Stars::from_efficiency(efficiency),
            tier: PerformanceTier::from_efficiency(efficiency),
        }
    }
}

/// Render seconds as `m:ss`.
#[must_use]
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_efficiency_scenarios() {
        // Perfect play on easy.
        assert_eq!(efficiency(8, 8), 100);
        // Exactly two turns per pair.
        assert_eq!(efficiency(16, 8), 100);
        // Four extra turns.
        assert_eq!(efficiency(20, 8), 75);
        // Hopeless play floors at zero.
        assert_eq!(efficiency(100, 8), 0);
    }

    #[test]
    fn test_efficiency_rounds_half_up() {
        // 100 - (17 - 16) / 16 * 100 = 93.75
        assert_eq!(efficiency(17, 8), 94);
        // 100 - (25 - 24) / 24 * 100 = 95.83
        assert_eq!(efficiency(25, 12), 96);
    }

    #[test]
    #[should_panic(expected = "at least one matched pair")]
    fn test_efficiency_without_matches_panics() {
        let _ = efficiency(4, 0);
    }

    #[test]
    fn test_stars() {
        assert_eq!(Stars::from_efficiency(100), Stars::Three);
        assert_eq!(Stars::from_efficiency(90), Stars::Three);
        assert_eq!(Stars::from_efficiency(89), Stars::Two);
        assert_eq!(Stars::from_efficiency(75), Stars::Two);
        assert_eq!(Stars::from_efficiency(74), Stars::One);
        assert_eq!(Stars::from_efficiency(0), Stars::One);
        assert_eq!(Stars::Two.count(), 2);
    }

    #[test]
    fn test_tiers() {
        assert_eq!(PerformanceTier::from_efficiency(95), PerformanceTier::Outstanding);
        assert_eq!(PerformanceTier::from_efficiency(80), PerformanceTier::Great);
        assert_eq!(PerformanceTier::from_efficiency(60), PerformanceTier::Good);
        assert_eq!(PerformanceTier::from_efficiency(59), PerformanceTier::KeepPracticing);
        assert!(PerformanceTier::Great.message().starts_with("Great job"));
    }

    #[test]
    fn test_score() {
        let score = Score::from_efficiency(100);
        assert_eq!(score.stars, Stars::Three);
        assert_eq!(score.tier, PerformanceTier::Outstanding);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(9), "0:09");
        assert_eq!(format_clock(65), "1:05");
        assert_eq!(format_clock(600), "10:00");
    }
}
