//! Round bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::CardId;
use crate::core::{Difficulty, Error, RoundConfig};
use crate::round::{FlipOutcome, MatchOutcome, Round};
use crate::scoring;

fn to_py_err(e: Error) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Python wrapper for Round.
///
/// Drive it exactly like the Rust type: `flip` twice, then `commit`.
#[pyclass(name = "Round")]
pub struct PyRound {
    inner: Round,
}

#[pymethods]
impl PyRound {
    /// Deal a new round.
    ///
    /// # Arguments
    /// - difficulty: "easy", "medium" or "hard"
    /// - seed: RNG seed; omit for a random deal
    #[new]
    #[pyo3(signature = (difficulty = "easy", seed = None))]
    fn new(difficulty: &str, seed: Option<u64>) -> PyResult<Self> {
        let difficulty: Difficulty = difficulty.parse().map_err(to_py_err)?;
        let mut config = RoundConfig::new(difficulty);
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }
        let inner = Round::new(config).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Flip a card.
    ///
    /// Returns "ignored", "flipped", "match" or "mismatch".
    fn flip(&mut self, card_id: u32) -> &'static str {
        match self.inner.flip(CardId::new(card_id)) {
            FlipOutcome::Ignored(_) => "ignored",
            FlipOutcome::Flipped(_) => "flipped",
            FlipOutcome::Resolving(res) => match res.outcome {
                MatchOutcome::Match => "match",
                MatchOutcome::Mismatch => "mismatch",
            },
        }
    }

    /// Commit the pending resolution.
    ///
    /// Returns None if nothing was pending, otherwise whether the round is won.
    fn commit(&mut self) -> Option<bool> {
        self.inner.commit_resolution().map(|c| c.won.is_some())
    }

    /// Advance the clock by one second.
    fn tick(&mut self) {
        self.inner.tick();
    }

    /// Deal a fresh deck at the same difficulty.
    fn restart(&mut self) -> PyResult<()> {
        self.inner.restart().map_err(to_py_err)
    }

    /// Board as (id, glyph, flipped, matched) tuples.
    fn cards(&self) -> Vec<(u32, String, bool, bool)> {
        self.inner
            .deck()
            .iter()
            .map(|c| {
                let glyph = self.inner.glyph(c.id).unwrap_or_default().to_string();
                (c.id.raw(), glyph, c.flipped, c.matched)
            })
            .collect()
    }

    #[getter]
    fn moves(&self) -> u32 {
        self.inner.moves()
    }

    #[getter]
    fn matches(&self) -> u32 {
        self.inner.matches()
    }

    #[getter]
    fn elapsed(&self) -> u32 {
        self.inner.elapsed_secs()
    }

    #[getter]
    fn won(&self) -> bool {
        self.inner.is_won()
    }

    /// Efficiency of a won round, else None.
    fn efficiency(&self) -> Option<u32> {
        self.inner.result().map(|r| r.efficiency())
    }

    fn __repr__(&self) -> String {
        format!(
            "Round(difficulty={}, moves={}, matches={})",
            self.inner.difficulty(),
            self.inner.moves(),
            self.inner.matches()
        )
    }
}

/// Efficiency percentage for `moves` and `matches` (matches must be > 0).
#[pyfunction]
pub fn efficiency(moves: u32, matches: u32) -> PyResult<u32> {
    if matches == 0 {
        return Err(PyValueError::new_err("efficiency requires at least one matched pair"));
    }
    Ok(scoring::efficiency(moves, matches))
}
