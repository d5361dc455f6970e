use criterion::{black_box, criterion_group, criterion_main, Criterion};
use memory_match::cards::{Alphabet, Deck};
use memory_match::core::{Difficulty, GameRng, RoundConfig};
use memory_match::round::Round;

fn bench_deal(c: &mut Criterion) {
    let alphabet = Alphabet::fruit();
    let mut rng = GameRng::new(42);

    c.bench_function("deck_build_hard", |b| {
        b.iter(|| Deck::build(black_box(Difficulty::Hard.pairs()), &alphabet, &mut rng))
    });
}

fn bench_perfect_round(c: &mut Criterion) {
    let mut round = Round::new(RoundConfig::new(Difficulty::Hard).with_seed(7)).unwrap();

    c.bench_function("perfect_round_hard", |b| {
        b.iter(|| {
            round.restart().unwrap();
            let mut by_symbol = vec![Vec::with_capacity(2); Difficulty::Hard.pairs()];
            for card in round.deck().iter() {
                by_symbol[card.value.index()].push(card.id);
            }
            for ids in by_symbol {
                round.flip(ids[0]);
                round.flip(ids[1]);
                round.commit_resolution();
            }
            black_box(round.result().cloned())
        })
    });
}

criterion_group!(benches, bench_deal, bench_perfect_round);
criterion_main!(benches);
