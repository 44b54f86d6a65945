//! poker-bits: bitset card sets and best-hand evaluation
//!
//! A 52-card deck packed into a single `u64` (one 16-bit lane per suit),
//! ten pure hand-category detectors over that bitset, and an orchestrator
//! that ranks them and pads the winner to exactly five cards.
//!
//! Goals:
//! - Value-semantics `CardSet`: every operation is a handful of bit ops,
//!   no allocation, no shared state
//! - No panics for invalid input; `Result` for the one checked failure
//!   (`rank`/`suit` on a non-single-card set)
//!
//! ## Quick start: find the best hand in a card pool
//! ```
//! use poker_bits::cards::{CardSet, Rank, Suit};
//! use poker_bits::evaluator::{best_hand, HandCategory};
//!
//! let pool = CardSet::card(Rank::Ace, Suit::Clubs)
//!     | CardSet::card(Rank::Two, Suit::Clubs)
//!     | CardSet::card(Rank::Three, Suit::Clubs)
//!     | CardSet::card(Rank::Four, Suit::Clubs)
//!     | CardSet::card(Rank::Five, Suit::Clubs);
//!
//! let (category, five) = best_hand(pool);
//! assert_eq!(category, HandCategory::StraightFlush);
//! assert_eq!(five, pool);
//! ```
//!
//! ## Dealing from a shuffled deck
//! ```
//! use poker_bits::deck::Deck;
//! use poker_bits::evaluator::best_hand;
//!
//! let mut deck = Deck::shuffled_seeded(1);
//! let pool = deck.draw_n(7);
//! let (category, five) = best_hand(pool);
//! assert_eq!(five.count(), 5);
//! assert!(pool.contains(five));
//! # let _ = category;
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
