use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use poker_bits::cards::CardSet;
use poker_bits::evaluator::best_hand;

fn pool(s: &str) -> CardSet {
    s.parse().expect("valid card list")
}

fn bench_best_hand(c: &mut Criterion) {
    let high = pool("Ace_Hearts King_Diamonds Seven_Spades Five_Clubs Two_Diamonds");
    let royal = pool("Ten_Spades Jack_Spades Queen_Spades King_Spades Ace_Spades");
    let seven = pool(
        "Ace_Spades Ace_Hearts King_Spades Queen_Spades Jack_Spades Ten_Spades Nine_Spades",
    );

    let mut g = c.benchmark_group("best_hand");
    g.bench_with_input(BenchmarkId::new("high_card", "A,K,7,5,2"), &high, |b, input| {
        b.iter(|| best_hand(black_box(*input)))
    });
    g.bench_with_input(BenchmarkId::new("royal_flush", "five"), &royal, |b, input| {
        b.iter(|| best_hand(black_box(*input)))
    });
    g.bench_with_input(BenchmarkId::new("royal_flush", "seven"), &seven, |b, input| {
        b.iter(|| best_hand(black_box(*input)))
    });
    g.finish();
}

fn bench_take_drain(c: &mut Criterion) {
    c.bench_function("drain_full_deck", |b| {
        b.iter(|| {
            let mut deck = black_box(CardSet::FULL_DECK);
            let mut n = 0u32;
            while !deck.take().is_empty() {
                n += 1;
            }
            n
        })
    });
}

criterion_group!(benches, bench_best_hand, bench_take_drain);
criterion_main!(benches);
