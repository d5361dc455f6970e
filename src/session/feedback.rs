//! Audio and haptic feedback collaborator.
//!
//! The session translates engine signals into cues and pulses; a platform
//! layer implements `Feedback` to actually play them.

use serde::{Deserialize, Serialize};

use crate::round::Signal;

/// Sound cues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    CardFlip,
    MatchSuccess,
    MemoryRecall,
    MatchFail,
    GameWin,
    LevelUp,
}

/// Haptic pulses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Haptic {
    Light,
    Medium,
    Heavy,
    Success,
    Warning,
}

/// Plays cues and pulses.
pub trait Feedback {
    fn play(&mut self, cue: Cue);

    fn pulse(&mut self, haptic: Haptic);

    /// Start or stop background music.
    fn music(&mut self, _playing: bool) {}
}

impl<T: Feedback + ?Sized> Feedback for &mut T {
    fn play(&mut self, cue: Cue) {
        (**self).play(cue);
    }

    fn pulse(&mut self, haptic: Haptic) {
        (**self).pulse(haptic);
    }

    fn music(&mut self, playing: bool) {
        (**self).music(playing);
    }
}

/// Feedback sink that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFeedback;

impl Feedback for NoFeedback {
    fn play(&mut self, _cue: Cue) {}

    fn pulse(&mut self, _haptic: Haptic) {}
}

/// Sound cues for a signal, in play order.
#[must_use]
pub fn cues_for(signal: &Signal) -> &'static [Cue] {
    match signal {
        Signal::CardFlipped(_) => &[Cue::CardFlip],
        Signal::MatchSuccess(_) => &[Cue::MatchSuccess, Cue::MemoryRecall],
        Signal::MatchFail => &[Cue::MatchFail],
        Signal::GameWon(_) => &[Cue::GameWin, Cue::LevelUp],
    }
}

/// Haptic pulses for a signal, in order.
#[must_use]
pub fn haptics_for(signal: &Signal) -> &'static [Haptic] {
    match signal {
        Signal::CardFlipped(_) => &[Haptic::Light],
        Signal::MatchSuccess(_) => &[Haptic::Success],
        Signal::MatchFail => &[Haptic::Warning],
        Signal::GameWon(_) => &[Haptic::Success, Haptic::Heavy],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, SymbolId};

    #[test]
    fn test_signal_mapping() {
        let flipped = Signal::CardFlipped(CardId::new(1));
        assert_eq!(cues_for(&flipped), &[Cue::CardFlip]);
        assert_eq!(haptics_for(&flipped), &[Haptic::Light]);

        let hit = Signal::MatchSuccess(SymbolId::new(0));
        assert_eq!(cues_for(&hit), &[Cue::MatchSuccess, Cue::MemoryRecall]);

        assert_eq!(haptics_for(&Signal::MatchFail), &[Haptic::Warning]);
    }
}
