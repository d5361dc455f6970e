//! # memory-match
//!
//! Matching engine for a card-pairs memory game.
//!
//! ## Design Principles
//!
//! 1. **Synchronous core**: Every operation runs to completion. The engine
//!    holds no timers; delayed effects are an explicit two-phase
//!    `flip` → `commit_resolution`.
//!
//! 2. **Signals, not side effects**: Operations return outcomes whose
//!    signals a driver turns into sound, haptics, analytics or ads.
//!
//! 3. **Deterministic deals**: The shuffle is the only randomness and is
//!    driven by a seedable ChaCha8 stream.
//!
//! ## Modules
//!
//! - `core`: RNG, difficulty/round configuration, errors
//! - `cards`: Cards, symbol alphabets, the dealt deck
//! - `round`: Flip/resolve/win state machine and its signals
//! - `scoring`: Efficiency, stars, performance tiers
//! - `stats`: Aggregate stats, high scores, persistence
//! - `session`: Driver wiring the engine to injected collaborators
//!
//! ## Example
//!
//! ```
//! use memory_match::{Difficulty, FlipOutcome, Round, RoundConfig};
//!
//! let mut round = Round::new(RoundConfig::new(Difficulty::Easy).with_seed(42)).unwrap();
//! let first = round.deck().cards()[0].id;
//! let second = round.deck().cards()[1].id;
//!
//! assert!(matches!(round.flip(first), FlipOutcome::Flipped(_)));
//! let outcome = round.flip(second);
//! assert!(outcome.resolution().is_some());
//!
//! let commit = round.commit_resolution().unwrap();
//! assert_eq!(round.moves(), 1);
//! assert!(commit.won.is_none());
//! ```

pub mod cards;
pub mod core;
pub mod round;
pub mod scoring;
pub mod session;
pub mod stats;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Difficulty, Error, GameRng, GameRngState, Result, RoundConfig};

pub use crate::cards::{Alphabet, Card, CardId, Deck, SymbolId};

pub use crate::round::{
    ClockState, Commit, FlipOutcome, IgnoreReason, MatchOutcome, Resolution, Round, RoundResult,
    Signal,
};

pub use crate::scoring::{efficiency, format_clock, PerformanceTier, Score, Stars};

pub use crate::stats::{FileStore, MemoryStore, StatsBook, StatsStore};

pub use crate::session::{AdCadence, Analytics, AnalyticsEvent, Feedback, Session, Settings, WinReport};
