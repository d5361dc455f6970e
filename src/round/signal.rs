//! Outcomes and signals returned by round operations.
//!
//! The engine never plays sounds or shows ads. Every operation returns a
//! value describing what happened, and `signals()` flattens it into the
//! feedback events a driver may act on. Signals are emitted unconditionally;
//! whether they become audio or haptics is the caller's decision.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::result::RoundResult;
use crate::cards::{Card, CardId, SymbolId};

/// How long a driver should let a found pair settle before committing.
pub const MATCH_SETTLE_DELAY: Duration = Duration::from_millis(500);

/// How long a driver should show a mismatched pair before committing.
pub const MISMATCH_SETTLE_DELAY: Duration = Duration::from_millis(1000);

/// Feedback events emitted by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    /// A flip request was accepted.
    CardFlipped(CardId),
    /// The two face-up cards pair.
    MatchSuccess(SymbolId),
    /// The two face-up cards differ.
    MatchFail,
    /// Every card is matched; carries the final snapshot.
    GameWon(RoundResult),
}

/// Why a flip request left the round unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// No card with that ID is on the board.
    UnknownCard,
    /// The card is already face-up.
    AlreadyFlipped,
    /// The card belongs to a found pair.
    AlreadyMatched,
    /// Two cards are up and waiting for `commit_resolution`.
    ResolutionPending,
}

/// Result of comparing the two selected cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Match,
    Mismatch,
}

/// A turn whose outcome is decided but not yet applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// First card flipped this turn (as it was when flipped).
    pub first: Card,
    /// Second card flipped this turn.
    pub second: Card,
    /// Match or mismatch.
    pub outcome: MatchOutcome,
}

impl Resolution {
    /// Decide the outcome for two face-up cards.
    #[must_use]
    pub fn between(first: Card, second: Card) -> Self {
        let outcome = if first.pairs_with(&second) {
            MatchOutcome::Match
        } else {
            MatchOutcome::Mismatch
        };
        Self { first, second, outcome }
    }

    /// Did the turn find a pair?
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.outcome == MatchOutcome::Match
    }

    /// The IDs of both cards in flip order.
    #[must_use]
    pub fn card_ids(&self) -> [CardId; 2] {
        [self.first.id, self.second.id]
    }

    /// Presentation delay before the driver should commit.
    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        match self.outcome {
            MatchOutcome::Match => MATCH_SETTLE_DELAY,
            MatchOutcome::Mismatch => MISMATCH_SETTLE_DELAY,
        }
    }

    fn signal(&self) -> Signal {
        match self.outcome {
            MatchOutcome::Match => Signal::MatchSuccess(self.first.value),
            MatchOutcome::Mismatch => Signal::MatchFail,
        }
    }
}

/// Result of `Round::flip`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// One card is up; the turn continues.
    Flipped(Card),
    /// Second card is up; resolution has begun and must be committed.
    Resolving(Resolution),
}

impl FlipOutcome {
    /// Was the flip accepted?
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, FlipOutcome::Ignored(_))
    }

    /// The pending resolution, if this flip started one.
    #[must_use]
    pub fn resolution(&self) -> Option<&Resolution> {
        match self {
            FlipOutcome::Resolving(res) => Some(res),
            _ => None,
        }
    }

    /// Signals emitted by this flip, in order.
    #[must_use]
    pub fn signals(&self) -> SmallVec<[Signal; 2]> {
        match self {
            FlipOutcome::Ignored(_) => SmallVec::new(),
            FlipOutcome::Flipped(card) => smallvec![Signal::CardFlipped(card.id)],
            FlipOutcome::Resolving(res) => {
                smallvec![Signal::CardFlipped(res.second.id), res.signal()]
            }
        }
    }
}

/// Result of `Round::commit_resolution`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commit {
    /// The resolution that was applied.
    pub resolution: Resolution,
    /// Final snapshot when this commit completed the board.
    pub won: Option<RoundResult>,
}

impl Commit {
    /// Signals emitted by this commit.
    #[must_use]
    pub fn signals(&self) -> SmallVec<[Signal; 2]> {
        match &self.won {
            Some(result) => smallvec![Signal::GameWon(result.clone())],
            None => SmallVec::new(),
        }
    }
}
