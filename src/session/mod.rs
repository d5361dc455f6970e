//! The driving layer around the engine.
//!
//! `Session` plays the role of the UI's controller: it owns the active round,
//! turns signals into feedback according to `Settings`, persists stats,
//! reports analytics and paces interstitial ads. Every service is an
//! explicitly constructed handle passed in by the caller.

mod ads;
mod analytics;
mod driver;
mod feedback;
mod settings;

pub use ads::AdCadence;
pub use analytics::{Analytics, AnalyticsEvent, NoAnalytics};
pub use driver::{Session, Settled, WinReport};
pub use feedback::{cues_for, haptics_for, Cue, Feedback, Haptic, NoFeedback};
pub use settings::Settings;
