//! Card system: cards, symbol alphabets and the dealt deck.
//!
//! ## Key Types
//!
//! - `CardId`: Identity of a card within a deck (addressing only)
//! - `SymbolId`: The value printed on a card; equal values form a pair
//! - `Card`: Per-card state (`flipped`, `matched`)
//! - `Alphabet`: Ordered, distinct symbols to deal from
//! - `Deck`: Shuffled board of `2 × pairs` cards

pub mod alphabet;
pub mod card;
pub mod deck;

pub use alphabet::{Alphabet, FRUIT_GLYPHS};
pub use card::{Card, CardId, SymbolId};
pub use deck::Deck;
