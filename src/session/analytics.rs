//! Analytics collaborator.

use serde::{Deserialize, Serialize};

use crate::core::config::Difficulty;
use crate::round::RoundResult;

/// Events reported to analytics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    /// A deck was dealt.
    GameStart { difficulty: Difficulty },
    /// A round was won.
    GameComplete {
        #[serde(flatten)]
        result: RoundResult,
        accuracy: f64,
        efficiency: u32,
    },
}

/// Receives analytics events.
pub trait Analytics {
    fn record(&mut self, event: AnalyticsEvent);
}

impl<T: Analytics + ?Sized> Analytics for &mut T {
    fn record(&mut self, event: AnalyticsEvent) {
        (**self).record(event);
    }
}

/// Collects events in order.
impl Analytics for Vec<AnalyticsEvent> {
    fn record(&mut self, event: AnalyticsEvent) {
        self.push(event);
    }
}

/// Analytics sink that drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoAnalytics;

impl Analytics for NoAnalytics {
    fn record(&mut self, _event: AnalyticsEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json() {
        let event = AnalyticsEvent::GameComplete {
            result: RoundResult {
                moves: 16,
                time_secs: 30,
                matches: 8,
                difficulty: Difficulty::Easy,
            },
            accuracy: 50.0,
            efficiency: 100,
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "event": "game_complete",
                "moves": 16,
                "time": 30,
                "matches": 8,
                "difficulty": "easy",
                "accuracy": 50.0,
                "efficiency": 100
            })
        );

        let start = serde_json::to_value(AnalyticsEvent::GameStart { difficulty: Difficulty::Hard }).unwrap();
        assert_eq!(start, serde_json::json!({"event": "game_start", "difficulty": "hard"}));
    }

    #[test]
    fn test_vec_collects() {
        let mut events: Vec<AnalyticsEvent> = Vec::new();
        events.record(AnalyticsEvent::GameStart { difficulty: Difficulty::Easy });
        assert_eq!(events.len(), 1);
    }
}
