//! Interstitial ad cadence.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Decides when an interstitial is due.
///
/// Counts completed rounds and asks for an ad on every `every`-th one.
/// Once ads are removed by purchase nothing is counted or shown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdCadence {
    /// Show on every n-th completed round (0 disables).
    pub every: u32,
    completed: u32,
    ads_removed: bool,
}

impl Default for AdCadence {
    fn default() -> Self {
        Self::new(3)
    }
}

impl AdCadence {
    #[must_use]
    pub fn new(every: u32) -> Self {
        Self {
            every,
            completed: 0,
            ads_removed: false,
        }
    }

    /// Record a completed round. Returns true if an ad is due now.
    pub fn round_completed(&mut self) -> bool {
        if self.ads_removed {
            return false;
        }

        self.completed += 1;
        let due = self.every > 0 && self.completed % self.every == 0;
        debug!(completed = self.completed, due, "round completed");
        due
    }

    /// Permanently disable ads (after the remove-ads purchase).
    pub fn remove_ads(&mut self) {
        self.ads_removed = true;
    }

    #[must_use]
    pub fn ads_removed(&self) -> bool {
        self.ads_removed
    }

    /// Completed rounds counted so far.
    #[must_use]
    pub fn completed(&self) -> u32 {
        self.completed
    }
}
