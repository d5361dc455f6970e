//! The deck: an ordered, fixed-length board of cards.
//!
//! ## Invariants
//!
//! - Exactly `2 × pairs` cards, each symbol appearing exactly twice
//! - Order is randomized once at construction and never re-sorted
//! - Cards are only mutated in place; nothing is inserted or removed
//!
//! Lookup by `CardId` goes through an id → position index built after the
//! shuffle, so addressing stays O(1) regardless of board order.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::alphabet::Alphabet;
use super::card::{Card, CardId, SymbolId};
use crate::core::error::{Error, Result};
use crate::core::rng::GameRng;

/// A dealt board of cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Deck {
    cards: Vec<Card>,
    index: FxHashMap<CardId, usize>,
}

impl Deck {
    /// Build the unshuffled deck for `pairs` symbols.
    ///
    /// Symbol `k` yields cards `2k` and `2k + 1`, adjacent.
    pub fn ordered(pairs: usize, alphabet: &Alphabet) -> Result<Self> {
        if pairs == 0 {
            return Err(Error::EmptyDeck);
        }

        let mut cards = Vec::with_capacity(pairs * 2);
        for symbol in alphabet.take(pairs)? {
            let base = u32::from(symbol.0) * 2;
            cards.push(Card::new(CardId::new(base), symbol));
            cards.push(Card::new(CardId::new(base + 1), symbol));
        }

        Ok(Self::from_cards(cards))
    }

    /// Build and shuffle a deck for `pairs` symbols.
    pub fn build(pairs: usize, alphabet: &Alphabet, rng: &mut GameRng) -> Result<Self> {
        let mut deck = Self::ordered(pairs, alphabet)?;
        deck.shuffle(rng);
        Ok(deck)
    }

    fn from_cards(cards: Vec<Card>) -> Self {
        let mut deck = Self {
            cards,
            index: FxHashMap::default(),
        };
        deck.reindex();
        deck
    }

    fn reindex(&mut self) {
        self.index = self
            .cards
            .iter()
            .enumerate()
            .map(|(pos, card)| (card.id, pos))
            .collect();
    }

    /// Shuffle the board order in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
        self.reindex();
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck empty? (Never true for a built deck.)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Cards in board order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate over cards in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Board position of a card.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.position(id).map(|pos| &self.cards[pos])
    }

    /// Get a mutable card by ID.
    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        let pos = self.position(id)?;
        self.cards.get_mut(pos)
    }

    /// Mark every card with `symbol` as matched. Returns how many changed.
    pub fn mark_matched(&mut self, symbol: SymbolId) -> usize {
        let mut changed = 0;
        for card in self.cards.iter_mut().filter(|c| c.value == symbol && !c.matched) {
            card.matched = true;
            changed += 1;
        }
        changed
    }

    /// Turn a card face down unless it is already matched.
    pub fn flip_down(&mut self, id: CardId) {
        if let Some(card) = self.get_mut(id) {
            if !card.matched {
                card.flipped = false;
            }
        }
    }

    /// Number of matched cards.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count()
    }

    /// Win predicate: every card is matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|c| c.matched)
    }
}

/// Rebuild a deck from its cards, rejecting boards that break the pair
/// invariants.
impl TryFrom<Vec<Card>> for Deck {
    type Error = Error;

    fn try_from(cards: Vec<Card>) -> Result<Self> {
        if cards.is_empty() {
            return Err(Error::EmptyDeck);
        }

        let mut symbols: FxHashMap<SymbolId, usize> = FxHashMap::default();
        for card in &cards {
            *symbols.entry(card.value).or_default() += 1;
        }
        if let Some((&symbol, &count)) = symbols.iter().find(|(_, count)| **count != 2) {
            return Err(Error::UnpairedSymbol { symbol: symbol.0, count });
        }

        let mut ids = FxHashSet::default();
        if let Some(card) = cards.iter().find(|c| !ids.insert(c.id)) {
            return Err(Error::DuplicateCard { id: card.id.raw() });
        }

        Ok(Self::from_cards(cards))
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.cards
    }
}
