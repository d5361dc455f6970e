//! Symbol alphabets.
//!
//! An `Alphabet` is the ordered list of glyphs a deck draws its pair values
//! from. Decks take the first `pairs` symbols, so the order is significant
//! and every glyph must be distinct.
//!
//! ```
//! use memory_match::cards::{Alphabet, SymbolId};
//!
//! let fruit = Alphabet::fruit();
//! assert_eq!(fruit.len(), 16);
//! assert_eq!(fruit.glyph(SymbolId::new(0)), Some("🍎"));
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::SymbolId;
use crate::core::error::{Error, Result};

/// Default glyphs, in deal order.
pub const FRUIT_GLYPHS: [&str; 16] = [
    "🍎", "🍌", "🍒", "🍇", "🍊", "🍓", "🍑", "🥭", "🍍", "🥝", "🍉", "🍐", "🫐", "🍋", "🥥", "🥑",
];

/// Ordered set of distinct symbols.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Alphabet {
    glyphs: Vec<String>,
}

impl Alphabet {
    /// Build an alphabet from glyphs.
    ///
    /// Fails on an empty glyph or on a glyph that appears twice.
    pub fn new<I, S>(glyphs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let glyphs: Vec<String> = glyphs.into_iter().map(Into::into).collect();

        {
            let mut seen = FxHashSet::default();
            for glyph in &glyphs {
                if glyph.is_empty() {
                    return Err(Error::EmptySymbol);
                }
                if !seen.insert(glyph.as_str()) {
                    return Err(Error::DuplicateSymbol { glyph: glyph.clone() });
                }
            }
        }

        Ok(Self { glyphs })
    }

    /// The default 16-fruit alphabet.
    #[must_use]
    pub fn fruit() -> Self {
        Self {
            glyphs: FRUIT_GLYPHS.iter().map(|g| (*g).to_string()).collect(),
        }
    }

    /// Number of distinct symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Is the alphabet empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph for a symbol, if it belongs to this alphabet.
    #[must_use]
    pub fn glyph(&self, symbol: SymbolId) -> Option<&str> {
        self.glyphs.get(symbol.index()).map(String::as_str)
    }

    /// The first `count` symbols, in order.
    ///
    /// Fails rather than repeating a symbol when `count` exceeds the alphabet
    /// or the range of symbol ids.
    pub fn take(&self, count: usize) -> Result<impl Iterator<Item = SymbolId>> {
        if count > self.glyphs.len() {
            return Err(Error::NotEnoughSymbols {
                requested: count,
                available: self.glyphs.len(),
            });
        }
        let count = u16::try_from(count).map_err(|_| Error::TooManyPairs {
            requested: count,
            max: usize::from(u16::MAX),
        })?;
        Ok((0..count).map(SymbolId::new))
    }

    /// Iterate over all glyphs in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.glyphs.iter().map(String::as_str)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::fruit()
    }
}

impl TryFrom<Vec<String>> for Alphabet {
    type Error = Error;

    fn try_from(glyphs: Vec<String>) -> Result<Self> {
        Self::new(glyphs)
    }
}

impl From<Alphabet> for Vec<String> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.glyphs
    }
}
