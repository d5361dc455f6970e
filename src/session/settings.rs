//! Player settings.

use serde::{Deserialize, Serialize};

use crate::core::config::Difficulty;

/// User-facing toggles. Missing fields deserialize to their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Gates every sound cue, music included.
    pub sound_enabled: bool,
    pub music_enabled: bool,
    pub haptics_enabled: bool,
    pub notifications_enabled: bool,
    /// Difficulty for new rounds.
    pub difficulty: Difficulty,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            music_enabled: true,
            haptics_enabled: true,
            notifications_enabled: true,
            difficulty: Difficulty::Medium,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn with_sound(mut self, enabled: bool) -> Self {
        self.sound_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_music(mut self, enabled: bool) -> Self {
        self.music_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_haptics(mut self, enabled: bool) -> Self {
        self.haptics_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Background music plays only with both sound and music on.
    #[must_use]
    pub fn music_active(&self) -> bool {
        self.sound_enabled && self.music_enabled
    }
}
