use crate::cards::{CardSet, ALL_CARDS};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A shuffled 52-card deck with a draw cursor.
///
/// Holds a random permutation of the card indices; `draw` walks it once.
/// Intended for single-owner sequential use within one round.
///
/// ```
/// use poker_bits::deck::Deck;
///
/// let mut deck = Deck::shuffled_seeded(42);
/// let hole = deck.draw_n(2);
/// assert_eq!(hole.count(), 2);
/// assert_eq!(deck.remaining(), 50);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    order: [u8; 52],
    cursor: usize,
}

impl Deck {
    /// A freshly shuffled deck using the thread RNG.
    pub fn shuffled() -> Self {
        Self::shuffled_with(&mut rand::rng())
    }

    /// A shuffled deck from a seeded RNG, for reproducibility.
    pub fn shuffled_seeded(seed: u64) -> Self {
        Self::shuffled_with(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// A shuffled deck using the provided RNG.
    pub fn shuffled_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut order = [0u8; 52];
        for (i, slot) in order.iter_mut().enumerate() {
            *slot = i as u8;
        }
        order.shuffle(rng);
        Self { order, cursor: 0 }
    }

    /// Draw the next card, or `EMPTY` once the deck is exhausted.
    pub fn draw(&mut self) -> CardSet {
        if self.cursor == self.order.len() {
            return CardSet::EMPTY;
        }
        let card = ALL_CARDS[self.order[self.cursor] as usize];
        self.cursor += 1;
        card
    }

    /// Draw `n` cards as a single set. Short when the deck runs out.
    pub fn draw_n(&mut self, n: usize) -> CardSet {
        let mut hand = CardSet::EMPTY;
        for _ in 0..n {
            hand |= self.draw();
        }
        hand
    }

    pub fn remaining(&self) -> usize {
        self.order.len() - self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}
