//! Session integration tests: a full play-through with real collaborators.

use memory_match::cards::{CardId, SymbolId};
use memory_match::core::Difficulty;
use memory_match::round::FlipOutcome;
use memory_match::session::{Analytics, AnalyticsEvent, Feedback, NoFeedback, Session, Settings, WinReport};
use memory_match::stats::{FileStore, StatsStore};

fn ids_of<F: Feedback, A: Analytics, S: StatsStore>(session: &Session<F, A, S>, symbol: u16) -> Vec<CardId> {
    session
        .round()
        .deck()
        .iter()
        .filter(|c| c.value == SymbolId::new(symbol))
        .map(|c| c.id)
        .collect()
}

#[test]
fn test_stats_survive_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stats.bin");

    for seed in [1u64, 2] {
        let settings = Settings::default().with_difficulty(Difficulty::Easy);
        let mut session =
            Session::new(settings, NoFeedback, Vec::new(), FileStore::new(&path), Some(seed)).unwrap();

        // One wasted turn per game so the second game scores the same.
        let miss = [ids_of(&session, 0)[0], ids_of(&session, 1)[0]];
        session.flip(miss[0]);
        assert!(matches!(session.flip(miss[1]), FlipOutcome::Resolving(_)));
        session.commit_resolution().unwrap();

        let mut report = None;
        for symbol in 0..8 {
            let ids = ids_of(&session, symbol);
            session.flip(ids[0]);
            session.flip(ids[1]);
            session.tick();
            report = session.commit_resolution().unwrap().win;
        }

        let report = report.unwrap();
        assert_eq!(report.result.moves, 9);
        assert_eq!(report.rank, Some((seed - 1) as usize));

        let events: Vec<_> = session
            .analytics()
            .iter()
            .map(|e| match e {
                AnalyticsEvent::GameStart { .. } => "start",
                AnalyticsEvent::GameComplete { .. } => "complete",
            })
            .collect();
        assert_eq!(events, vec!["start", "complete"]);
    }

    let book = FileStore::new(&path).load().unwrap();
    assert_eq!(book.overall.total_games, 2);
    assert_eq!(book.overall.total_matches, 16);
    assert_eq!(book.high_scores(Difficulty::Easy).len(), 2);
}

fn play_perfect<F: Feedback, A: Analytics, S: StatsStore>(session: &mut Session<F, A, S>) -> WinReport {
    let mut report = None;
    for symbol in 0..session.round().deck().pairs() as u16 {
        let ids = ids_of(session, symbol);
        session.flip(ids[0]);
        session.flip(ids[1]);
        report = session.commit_resolution().unwrap().win;
    }
    report.unwrap()
}

#[test]
fn test_corrupt_store_is_replaced_on_next_win() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stats.bin");
    std::fs::write(&path, b"junk").unwrap();

    let mut ranks = Vec::new();
    for seed in [3u64, 4] {
        let settings = Settings::default().with_difficulty(Difficulty::Easy);
        let mut session =
            Session::new(settings, NoFeedback, Vec::new(), FileStore::new(&path), Some(seed)).unwrap();

        let report = play_perfect(&mut session);
        assert_eq!(report.score.efficiency, 100);
        ranks.push(report.rank);
    }

    // The first win starts a fresh book; the second lands behind it.
    assert_eq!(ranks, vec![Some(0), Some(1)]);

    let book = FileStore::new(&path).load().unwrap();
    assert_eq!(book.overall.total_games, 2);
    assert_eq!(book.high_scores(Difficulty::Easy).len(), 2);
}

#[test]
fn test_unwritable_store_does_not_block_win() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("stats.bin");

    let settings = Settings::default().with_difficulty(Difficulty::Easy);
    let mut session =
        Session::new(settings, NoFeedback, Vec::new(), FileStore::new(&path), Some(3)).unwrap();

    let report = play_perfect(&mut session);
    assert_eq!(report.rank, None);
    assert!(!report.new_best);
    assert_eq!(report.score.efficiency, 100);
    assert!(!path.exists());
}
