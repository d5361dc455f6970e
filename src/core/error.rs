//! Error type shared across the crate.
//!
//! Only configuration and storage problems are errors. Rejected flips are
//! ordinary outcomes (`FlipOutcome::Ignored`), and scoring a round without
//! any match is a programmer error that panics.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("deck needs {requested} distinct symbols but the alphabet only has {available}")]
    NotEnoughSymbols { requested: usize, available: usize },

    #[error("deck of {requested} pairs exceeds the {max} symbol ids available")]
    TooManyPairs { requested: usize, max: usize },

    #[error("deck must contain at least one pair")]
    EmptyDeck,

    #[error("card {id} appears more than once in the deck")]
    DuplicateCard { id: u32 },

    #[error("symbol {symbol} appears {count} times in the deck, expected 2")]
    UnpairedSymbol { symbol: u16, count: usize },

    #[error("symbol {glyph:?} appears more than once in the alphabet")]
    DuplicateSymbol { glyph: String },

    #[error("alphabet contains an empty symbol")]
    EmptySymbol,

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("encoding error: {0}")]
    Codec(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}
