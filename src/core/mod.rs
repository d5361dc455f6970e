//! Core engine types: RNG, configuration and errors.
//!
//! These are shared by the card, round and stats layers.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{Difficulty, RoundConfig};
pub use error::{Error, Result};
pub use rng::{GameRng, GameRngState};
