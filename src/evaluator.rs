//! Hand categories and the best-hand orchestrator.

pub(crate) mod detectors;

pub use detectors::{
    flush, four_of_a_kind, full_house, high_card, pair, royal_flush, straight, straight_flush,
    three_of_a_kind, two_pair,
};

use crate::cards::CardSet;
use std::fmt;

/// Poker hand category from weakest to strongest.
///
/// The derived order is hand strength: `HighCard < Pair < ... < RoyalFlush`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum HandCategory {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    pub const ALL: [HandCategory; 10] = [
        HandCategory::HighCard,
        HandCategory::Pair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "HighCard",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "TwoPair",
            HandCategory::ThreeOfAKind => "ThreeOfAKind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "FullHouse",
            HandCategory::FourOfAKind => "FourOfAKind",
            HandCategory::StraightFlush => "StraightFlush",
            HandCategory::RoyalFlush => "RoyalFlush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// The `n` highest cards of `pool`, fewer if it runs dry.
fn take_n(mut pool: CardSet, n: usize) -> CardSet {
    let mut out = CardSet::EMPTY;
    for _ in 0..n {
        out |= pool.take();
    }
    out
}

/// The best five-card hand obtainable from `c`.
///
/// Runs the detectors in descending strength order and returns the first
/// match, padded to five cards with the highest remaining kickers where
/// the category alone yields fewer. With fewer than five cards in `c`
/// the `HighCard` fallback is `EMPTY` (degenerate input).
///
/// ```
/// use poker_bits::cards::CardSet;
/// use poker_bits::evaluator::{best_hand, HandCategory};
///
/// let pool: CardSet = "Ace_Clubs Ace_Diamonds Ace_Hearts Ace_Spades King_Clubs"
///     .parse()
///     .unwrap();
/// let (category, five) = best_hand(pool);
/// assert_eq!(category, HandCategory::FourOfAKind);
/// assert_eq!(five, pool);
/// ```
pub fn best_hand(c: CardSet) -> (HandCategory, CardSet) {
    let d = royal_flush(c);
    if !d.is_empty() {
        return (HandCategory::RoyalFlush, d);
    }

    let d = straight_flush(c);
    if !d.is_empty() {
        return (HandCategory::StraightFlush, d);
    }

    let d = four_of_a_kind(c);
    if !d.is_empty() {
        return (HandCategory::FourOfAKind, d | take_n(c ^ d, 1));
    }

    let d = full_house(c);
    if !d.is_empty() {
        return (HandCategory::FullHouse, d);
    }

    let d = flush(c);
    if !d.is_empty() {
        return (HandCategory::Flush, d);
    }

    let d = straight(c);
    if !d.is_empty() {
        return (HandCategory::Straight, d);
    }

    let d = three_of_a_kind(c);
    if !d.is_empty() {
        return (HandCategory::ThreeOfAKind, d | take_n(c ^ d, 2));
    }

    let d = two_pair(c);
    if !d.is_empty() {
        return (HandCategory::TwoPair, d | take_n(c ^ d, 1));
    }

    let d = pair(c);
    if !d.is_empty() {
        return (HandCategory::Pair, d | take_n(c ^ d, 3));
    }

    (HandCategory::HighCard, high_card(c))
}
