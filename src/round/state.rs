//! The matching state machine for one round.
//!
//! ## Turn flow
//!
//! 1. `flip` a face-down card: it turns up and enters the selection buffer.
//! 2. `flip` a second card: the turn counts as a move and its resolution
//!    begins immediately. The outcome is decided but not yet applied.
//! 3. After its own delay or animation, the driver calls
//!    `commit_resolution`. A match marks the pair as matched and may win the
//!    round; a mismatch turns both cards back down.
//!
//! While a resolution is pending every flip is ignored, which is what keeps
//! turns strictly serialized. The engine holds no timers: the round clock
//! advances only through `tick`/`advance_clock`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use super::result::RoundResult;
use super::signal::{Commit, FlipOutcome, IgnoreReason, MatchOutcome, Resolution};
use crate::cards::{Card, CardId, Deck};
use crate::core::config::{Difficulty, RoundConfig};
use crate::core::error::Result;
use crate::core::rng::{GameRng, GameRngState};

/// Round clock state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockState {
    /// No card flipped yet.
    #[default]
    Idle,
    /// Counting.
    Running,
    /// Frozen on win.
    Stopped,
}

/// Deck, selection buffer and counters for one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Round {
    config: RoundConfig,
    rng: GameRng,
    deck: Deck,
    selection: SmallVec<[CardId; 2]>,
    pending: Option<Resolution>,
    moves: u32,
    matches: u32,
    elapsed_secs: u32,
    clock: ClockState,
    result: Option<RoundResult>,
}

impl Round {
    /// Deal a new round.
    ///
    /// Fails if the difficulty needs more symbols than the alphabet has.
    pub fn new(config: RoundConfig) -> Result<Self> {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_rng(config, rng)
    }

    /// Deal a new round from an explicit RNG stream.
    pub fn with_rng(config: RoundConfig, mut rng: GameRng) -> Result<Self> {
        let deck = Deck::build(config.difficulty.pairs(), &config.alphabet, &mut rng)?;
        info!(
            difficulty = %config.difficulty,
            cards = deck.len(),
            seed = rng.seed(),
            "dealt new round"
        );

        Ok(Self {
            config,
            rng,
            deck,
            selection: SmallVec::new(),
            pending: None,
            moves: 0,
            matches: 0,
            elapsed_secs: 0,
            clock: ClockState::Idle,
            result: None,
        })
    }

    /// Deal a new round that resumes a checkpointed RNG stream.
    ///
    /// Dealing from `other.rng_state()` yields the deck `other` would get
    /// on its next restart.
    pub fn with_rng_state(config: RoundConfig, state: &GameRngState) -> Result<Self> {
        Self::with_rng(config, GameRng::from_state(state))
    }

    /// Discard everything and deal a fresh deck.
    ///
    /// Safe from any state, including mid-resolution. The RNG stream
    /// continues, so the new order is independent of the old one.
    pub fn restart(&mut self) -> Result<()> {
        let deck = Deck::build(self.config.difficulty.pairs(), &self.config.alphabet, &mut self.rng)?;
        info!(difficulty = %self.config.difficulty, "restarted round");

        self.deck = deck;
        self.selection.clear();
        self.pending = None;
        self.moves = 0;
        self.matches = 0;
        self.elapsed_secs = 0;
        self.clock = ClockState::Idle;
        self.result = None;
        Ok(())
    }

    // === Turn Flow ===

    /// Request to turn a card face up.
    ///
    /// Ignored (state unchanged) when the card is unknown, already up,
    /// already matched, or while a resolution is pending.
    pub fn flip(&mut self, id: CardId) -> FlipOutcome {
        if let Some(reason) = self.check_flip(id) {
            debug!(card = %id, ?reason, "flip ignored");
            return FlipOutcome::Ignored(reason);
        }

        let card = match self.deck.get_mut(id) {
            Some(card) => {
                card.flipped = true;
                *card
            }
            None => return FlipOutcome::Ignored(IgnoreReason::UnknownCard),
        };
        self.selection.push(id);
        if self.clock == ClockState::Idle {
            self.clock = ClockState::Running;
        }
        debug!(card = %id, symbol = %card.value, selected = self.selection.len(), "card flipped");

        if self.selection.len() == 2 {
            FlipOutcome::Resolving(self.begin_resolution())
        } else {
            FlipOutcome::Flipped(card)
        }
    }

    fn check_flip(&self, id: CardId) -> Option<IgnoreReason> {
        if self.pending.is_some() || self.selection.len() >= 2 {
            return Some(IgnoreReason::ResolutionPending);
        }
        match self.deck.get(id) {
            None => Some(IgnoreReason::UnknownCard),
            Some(card) if card.matched => Some(IgnoreReason::AlreadyMatched),
            Some(card) if card.flipped => Some(IgnoreReason::AlreadyFlipped),
            Some(_) => None,
        }
    }

    fn selected_card(&self, slot: usize) -> Card {
        let id = self.selection[slot];
        // Selection only ever holds IDs taken from this deck.
        self.deck.get(id).copied().unwrap_or_else(|| unreachable!("selected {id} is not on the board"))
    }

    /// Decide the outcome of a full selection and count the move.
    fn begin_resolution(&mut self) -> Resolution {
        let resolution = Resolution::between(self.selected_card(0), self.selected_card(1));
        self.moves += 1;
        self.pending = Some(resolution);

        debug!(
            first = %resolution.first.id,
            second = %resolution.second.id,
            outcome = ?resolution.outcome,
            moves = self.moves,
            "resolution begun"
        );
        resolution
    }

    /// Apply the pending resolution.
    ///
    /// Returns `None` when nothing is pending.
    pub fn commit_resolution(&mut self) -> Option<Commit> {
        let resolution = self.pending.take()?;

        match resolution.outcome {
            MatchOutcome::Match => {
                self.deck.mark_matched(resolution.first.value);
                self.matches += 1;
            }
            MatchOutcome::Mismatch => {
                for id in resolution.card_ids() {
                    self.deck.flip_down(id);
                }
            }
        }
        self.selection.clear();

        let won = if resolution.is_match() && self.deck.all_matched() {
            self.clock = ClockState::Stopped;
            let result = RoundResult {
                moves: self.moves,
                time_secs: self.elapsed_secs,
                matches: self.matches,
                difficulty: self.config.difficulty,
            };
            info!(
                moves = result.moves,
                time_secs = result.time_secs,
                matches = result.matches,
                difficulty = %result.difficulty,
                "round won"
            );
            self.result = Some(result.clone());
            Some(result)
        } else {
            None
        };

        Some(Commit { resolution, won })
    }

    // === Clock ===

    /// Advance the clock by one second if it is running.
    pub fn tick(&mut self) {
        self.advance_clock(1);
    }

    /// Advance the clock by `secs` if it is running.
    pub fn advance_clock(&mut self, secs: u32) {
        if self.clock == ClockState::Running {
            self.elapsed_secs = self.elapsed_secs.saturating_add(secs);
        }
    }

    // === Accessors ===

    /// The configuration this round was dealt with.
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    /// The board.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Face-up, unresolved cards in flip order (0, 1 or 2).
    #[must_use]
    pub fn selection(&self) -> &[CardId] {
        &self.selection
    }

    /// Resolution waiting for `commit_resolution`.
    #[must_use]
    pub fn pending_resolution(&self) -> Option<&Resolution> {
        self.pending.as_ref()
    }

    /// Completed turns.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Pairs found.
    #[must_use]
    pub fn matches(&self) -> u32 {
        self.matches
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    #[must_use]
    pub fn clock(&self) -> ClockState {
        self.clock
    }

    /// Is every card matched?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.result.is_some()
    }

    /// Final snapshot, once won.
    #[must_use]
    pub fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// Glyph printed on a card.
    #[must_use]
    pub fn glyph(&self, id: CardId) -> Option<&str> {
        let card = self.deck.get(id)?;
        self.config.alphabet.glyph(card.value)
    }

    /// Checkpoint of the deal RNG.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
