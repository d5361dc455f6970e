//! The session: drives rounds and routes their signals to collaborators.
//!
//! A `Session` owns the active `Round` and the explicitly injected service
//! handles. The engine itself never sees any of them.

use tracing::{info, warn};

use super::ads::AdCadence;
use super::analytics::{Analytics, AnalyticsEvent};
use super::feedback::{cues_for, haptics_for, Feedback};
use super::settings::Settings;
use crate::cards::CardId;
use crate::core::config::{Difficulty, RoundConfig};
use crate::core::error::{Error, Result};
use crate::core::rng::GameRng;
use crate::round::{Commit, FlipOutcome, Round, RoundResult, Signal};
use crate::scoring::Score;
use crate::stats::{RecordOutcome, StatsBook, StatsStore};

/// Everything a results view needs after a win.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WinReport {
    pub result: RoundResult,
    pub score: Score,
    /// High-score rank at this difficulty, if it placed.
    pub rank: Option<usize>,
    /// Best efficiency so far at this difficulty.
    pub new_best: bool,
    /// An interstitial ad is due.
    pub show_interstitial: bool,
}

/// Result of `Session::commit_resolution`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settled {
    pub commit: Commit,
    pub win: Option<WinReport>,
}

/// Drives rounds for one player.
pub struct Session<F, A, S> {
    settings: Settings,
    ads: AdCadence,
    feedback: F,
    analytics: A,
    store: S,
    rng: GameRng,
    round: Round,
}

impl<F: Feedback, A: Analytics, S: StatsStore> Session<F, A, S> {
    /// Start a session and deal the first round at the settings' difficulty.
    ///
    /// `seed: None` seeds from entropy.
    pub fn new(
        settings: Settings,
        feedback: F,
        analytics: A,
        store: S,
        seed: Option<u64>,
    ) -> Result<Self> {
        let mut rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let round = Round::with_rng(RoundConfig::new(settings.difficulty), rng.fork())?;

        let mut session = Self {
            settings,
            ads: AdCadence::default(),
            feedback,
            analytics,
            store,
            rng,
            round,
        };
        session.apply_music();
        session.track_start();
        Ok(session)
    }

    /// Replace the ad cadence.
    #[must_use]
    pub fn with_ads(mut self, ads: AdCadence) -> Self {
        self.ads = ads;
        self
    }

    // === Rounds ===

    /// Deal a fresh round at `difficulty`.
    pub fn new_round(&mut self, difficulty: Difficulty) -> Result<()> {
        let config = self.round.config().clone().with_difficulty(difficulty);
        self.round = Round::with_rng(config, self.rng.fork())?;
        self.track_start();
        Ok(())
    }

    /// Re-deal the current round at the same difficulty.
    pub fn restart(&mut self) -> Result<()> {
        self.round.restart()?;
        self.track_start();
        Ok(())
    }

    /// Flip a card and play the resulting feedback.
    pub fn flip(&mut self, id: CardId) -> FlipOutcome {
        let outcome = self.round.flip(id);
        for signal in outcome.signals() {
            self.route(&signal);
        }
        outcome
    }

    /// Commit the pending resolution; on a win, record and report it.
    pub fn commit_resolution(&mut self) -> Option<Settled> {
        let commit = self.round.commit_resolution()?;
        for signal in commit.signals() {
            self.route(&signal);
        }

        let win = commit.won.as_ref().map(|result| self.finish(result));
        Some(Settled { commit, win })
    }

    /// Advance the round clock by one second.
    pub fn tick(&mut self) {
        self.round.tick();
    }

    fn finish(&mut self, result: &RoundResult) -> WinReport {
        let score = result.score();

        let outcome = match self.record_stats(result) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "failed to persist stats");
                RecordOutcome { rank: None, new_best: false }
            }
        };

        self.analytics.record(AnalyticsEvent::GameComplete {
            result: result.clone(),
            accuracy: result.accuracy(),
            efficiency: score.efficiency,
        });

        let show_interstitial = self.ads.round_completed();
        info!(
            efficiency = score.efficiency,
            stars = score.stars.count(),
            rank = ?outcome.rank,
            show_interstitial,
            "round finished"
        );

        WinReport {
            result: result.clone(),
            score,
            rank: outcome.rank,
            new_best: outcome.new_best,
            show_interstitial,
        }
    }

    fn record_stats(&mut self, result: &RoundResult) -> Result<RecordOutcome> {
        let mut book = match self.store.load() {
            Ok(book) => book,
            // An undecodable book is replaced rather than blocking every later save.
            Err(Error::Codec(e)) => {
                warn!(error = %e, "stats unreadable, starting a fresh book");
                StatsBook::default()
            }
            Err(e) => return Err(e),
        };
        let outcome = book.record(result);
        self.store.save(&book)?;
        Ok(outcome)
    }

    fn route(&mut self, signal: &Signal) {
        if self.settings.sound_enabled {
            for &cue in cues_for(signal) {
                self.feedback.play(cue);
            }
        }
        if self.settings.haptics_enabled {
            for &haptic in haptics_for(signal) {
                self.feedback.pulse(haptic);
            }
        }
    }

    fn track_start(&mut self) {
        self.analytics.record(AnalyticsEvent::GameStart {
            difficulty: self.round.difficulty(),
        });
    }

    fn apply_music(&mut self) {
        let playing = self.settings.music_active();
        self.feedback.music(playing);
    }

    // === Settings and Ads ===

    /// Replace the settings. Takes effect on the next signal; the difficulty
    /// applies from the next `new_round`.
    pub fn update_settings(&mut self, settings: Settings) {
        self.settings = settings;
        self.apply_music();
    }

    /// Record the remove-ads purchase.
    pub fn remove_ads(&mut self) {
        self.ads.remove_ads();
    }

    // === Accessors ===

    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn ads(&self) -> &AdCadence {
        &self.ads
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn analytics(&self) -> &A {
        &self.analytics
    }

    #[must_use]
    pub fn feedback(&self) -> &F {
        &self.feedback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::SymbolId;
    use crate::session::feedback::{Cue, Haptic};
    use crate::stats::MemoryStore;

    #[derive(Default)]
    struct Recorder {
        cues: Vec<Cue>,
        haptics: Vec<Haptic>,
        music: Option<bool>,
    }

    impl Feedback for Recorder {
        fn play(&mut self, cue: Cue) {
            self.cues.push(cue);
        }

        fn pulse(&mut self, haptic: Haptic) {
            self.haptics.push(haptic);
        }

        fn music(&mut self, playing: bool) {
            self.music = Some(playing);
        }
    }

    type TestSession = Session<Recorder, Vec<AnalyticsEvent>, MemoryStore>;

    fn session(settings: Settings) -> TestSession {
        Session::new(settings, Recorder::default(), Vec::new(), MemoryStore::new(), Some(9)).unwrap()
    }

    fn pair_ids(round: &Round, symbol: u16) -> Vec<CardId> {
        round
            .deck()
            .iter()
            .filter(|c| c.value == SymbolId::new(symbol))
            .map(|c| c.id)
            .collect()
    }

    fn play_perfect(session: &mut TestSession) -> WinReport {
        let pairs = session.round().deck().pairs() as u16;
        let mut report = None;
        for symbol in 0..pairs {
            let ids = pair_ids(session.round(), symbol);
            session.flip(ids[0]);
            session.flip(ids[1]);
            session.tick();
            report = session.commit_resolution().unwrap().win;
        }
        report.unwrap()
    }

    #[test]
    fn test_start_tracks_and_plays_music() {
        let session = session(Settings::default().with_difficulty(Difficulty::Easy));
        assert_eq!(
            session.analytics(),
            &vec![AnalyticsEvent::GameStart { difficulty: Difficulty::Easy }]
        );
        assert_eq!(session.feedback().music, Some(true));
        assert_eq!(session.round().deck().len(), 16);
    }

    #[test]
    fn test_flip_routes_feedback() {
        let mut session = session(Settings::default());
        let a = pair_ids(session.round(), 0)[0];
        let b = pair_ids(session.round(), 1)[0];

        session.flip(a);
        session.flip(b);

        assert_eq!(session.feedback().cues, vec![Cue::CardFlip, Cue::CardFlip, Cue::MatchFail]);
        assert_eq!(
            session.feedback().haptics,
            vec![Haptic::Light, Haptic::Light, Haptic::Warning]
        );

        // Ignored flips stay silent.
        session.flip(a);
        assert_eq!(session.feedback().cues.len(), 3);
    }

    #[test]
    fn test_settings_gate_feedback() {
        let mut session = session(Settings::default().with_sound(false));
        assert_eq!(session.feedback().music, Some(false));

        let a = pair_ids(session.round(), 0)[0];
        session.flip(a);
        assert!(session.feedback().cues.is_empty());
        assert_eq!(session.feedback().haptics, vec![Haptic::Light]);

        session.update_settings(Settings::default().with_haptics(false));
        let b = pair_ids(session.round(), 0)[1];
        session.flip(b);
        assert_eq!(session.feedback().cues, vec![Cue::CardFlip, Cue::MatchSuccess, Cue::MemoryRecall]);
        assert_eq!(session.feedback().haptics, vec![Haptic::Light]);
        assert_eq!(session.feedback().music, Some(true));
    }

    #[test]
    fn test_win_report() {
        let mut session = session(Settings::default().with_difficulty(Difficulty::Easy));
        let report = play_perfect(&mut session);

        assert_eq!(report.result.moves, 8);
        assert_eq!(report.result.matches, 8);
        assert_eq!(report.result.time_secs, 8);
        assert_eq!(report.score.efficiency, 100);
        assert_eq!(report.rank, Some(0));
        assert!(report.new_best);
        assert!(!report.show_interstitial);

        let cues = &session.feedback().cues;
        assert_eq!(&cues[cues.len() - 2..], &[Cue::GameWin, Cue::LevelUp]);

        let book = session.store().load().unwrap();
        assert_eq!(book.overall.total_games, 1);
        assert_eq!(book.high_scores(Difficulty::Easy).len(), 1);

        assert!(matches!(
            session.analytics().last(),
            Some(AnalyticsEvent::GameComplete { efficiency: 100, .. })
        ));
    }

    #[test]
    fn test_third_win_shows_interstitial() {
        let mut session = session(Settings::default().with_difficulty(Difficulty::Easy));

        let first = play_perfect(&mut session);
        session.restart().unwrap();
        let second = play_perfect(&mut session);
        session.new_round(Difficulty::Easy).unwrap();
        let third = play_perfect(&mut session);

        assert!(!first.show_interstitial);
        assert!(!second.show_interstitial);
        assert!(third.show_interstitial);
        assert!(!third.new_best);
        assert_eq!(third.rank, Some(2));
    }

    #[test]
    fn test_remove_ads() {
        let mut session = session(Settings::default().with_difficulty(Difficulty::Easy))
            .with_ads(AdCadence::new(1));
        session.remove_ads();

        let report = play_perfect(&mut session);
        assert!(!report.show_interstitial);
        assert!(session.ads().ads_removed());
    }

    #[test]
    fn test_new_round_changes_difficulty() {
        let mut session = session(Settings::default());
        session.new_round(Difficulty::Hard).unwrap();

        assert_eq!(session.round().difficulty(), Difficulty::Hard);
        assert_eq!(session.round().deck().len(), 32);
        assert_eq!(session.analytics().len(), 2);
    }
}
