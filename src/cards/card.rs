//! Card identity and per-card state.
//!
//! A `Card` carries two identities that must never be confused:
//! - `id`: addresses one physical card within a deck
//! - `value`: the symbol printed on it; two cards with equal values form a pair

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within a deck.
///
/// Stable for the lifetime of the deck. Never used for match comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Index of a symbol in the round's `Alphabet`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolId(pub u16);

impl SymbolId {
    /// Create a new symbol ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Position of this symbol in its alphabet.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// A card on the board.
///
/// `matched` is terminal: once set it is never cleared for the life of the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Identity within the deck.
    pub id: CardId,

    /// Printed symbol.
    pub value: SymbolId,

    /// Face-up while pending resolution (and after being matched).
    pub flipped: bool,

    /// Permanently resolved as part of a found pair.
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub const fn new(id: CardId, value: SymbolId) -> Self {
        Self {
            id,
            value,
            flipped: false,
            matched: false,
        }
    }

    /// Does this card pair with `other`?
    ///
    /// Compares symbols only; a card never pairs with itself.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.value == other.value
    }

    /// Is the card currently showing its symbol?
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.flipped || self.matched
    }
}
