//! One round of play: flip requests, turn resolution and win detection.
//!
//! `Round` is a synchronous state machine. Drivers call `flip` on taps,
//! wait out `Resolution::settle_delay`, then `commit_resolution`. Signals
//! from each outcome tell the driver what feedback to give.

mod result;
mod signal;
mod state;

pub use result::RoundResult;
pub use signal::{
    Commit, FlipOutcome, IgnoreReason, MatchOutcome, Resolution, Signal, MATCH_SETTLE_DELAY,
    MISMATCH_SETTLE_DELAY,
};
pub use state::{ClockState, Round};
