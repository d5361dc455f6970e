//! Python bindings for the memory-match engine.
//!
//! # Quick Start
//!
//! ```python
//! import memory_match as mm
//!
//! game = mm.Round(difficulty="easy", seed=42)
//! game.flip(0)
//! if game.flip(1) in ("match", "mismatch"):
//!     game.commit()
//! ```

use pyo3::prelude::*;

mod py_round;

pub use py_round::*;

/// memory_match: card-pairs matching engine.
#[pymodule]
fn memory_match(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRound>()?;
    m.add_function(wrap_pyfunction!(efficiency, m)?)?;
    Ok(())
}
