use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

// One bit per suit lane, at lane offset zero.
const LANES: u64 = 0x0001_0001_0001_0001;

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Mask selecting this rank in all four suit lanes.
    pub const fn mask(self) -> CardSet {
        CardSet(LANES << self.lane_bit())
    }

    /// Bit offset of this rank within a suit lane (Two = 1 .. Ace = 13).
    pub(crate) const fn lane_bit(self) -> u32 {
        self as u32 - 1
    }

    pub const fn name(self) -> &'static str {
        match self {
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let r = match lower.as_str() {
            "two" => Rank::Two,
            "three" => Rank::Three,
            "four" => Rank::Four,
            "five" => Rank::Five,
            "six" => Rank::Six,
            "seven" => Rank::Seven,
            "eight" => Rank::Eight,
            "nine" => Rank::Nine,
            "ten" => Rank::Ten,
            "jack" => Rank::Jack,
            "queen" => Rank::Queen,
            "king" => Rank::King,
            "ace" => Rank::Ace,
            _ => return Err(RankParseError::Invalid(s.to_string())),
        };
        Ok(r)
    }
}

/// Four suits; order has no hand-strength meaning but is fixed for the
/// lane layout: C < D < H < S.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Mask selecting this suit's entire 16-bit lane.
    pub const fn mask(self) -> CardSet {
        CardSet(0xFFFF << (16 * self as u32))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clubs" => Ok(Suit::Clubs),
            "diamonds" => Ok(Suit::Diamonds),
            "hearts" => Ok(Suit::Hearts),
            "spades" => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

/// A set of cards packed into a `u64`.
///
/// Each suit owns a 16-bit lane (Clubs lowest), with ranks Two..Ace at
/// lane bits 1..13. Lane bits 0, 14 and 15 stay clear in any well-formed
/// set; bit 0 of each lane is reserved scratch space for the low-Ace used
/// by the straight detectors.
///
/// A `CardSet` is equally a single card, a hand, or a reusable mask
/// (a whole suit lane, or one rank across all four lanes).
///
/// ```
/// use poker_bits::cards::{CardSet, Rank, Suit};
///
/// let mut hand = CardSet::card(Rank::Ace, Suit::Spades)
///     | CardSet::card(Rank::King, Suit::Hearts);
/// assert_eq!(hand.count(), 2);
/// assert_eq!(hand.take().to_string(), "Ace_Spades");
/// assert_eq!(hand.take().to_string(), "King_Hearts");
/// assert!(hand.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CardSet(u64);

/// All 52 cards, Clubs through Spades, Two through Ace within each suit.
pub const ALL_CARDS: [CardSet; 52] = {
    let mut all = [CardSet::EMPTY; 52];
    let mut s = 0;
    while s < 4 {
        let mut r = 0;
        while r < 13 {
            all[s * 13 + r] = CardSet(1u64 << (r + 1 + 16 * s));
            r += 1;
        }
        s += 1;
    }
    all
};

impl CardSet {
    pub const EMPTY: CardSet = CardSet(0);

    /// The union of all 52 cards.
    pub const FULL_DECK: CardSet = {
        let mut bits = 0u64;
        let mut i = 0;
        while i < 52 {
            bits |= ALL_CARDS[i].0;
            i += 1;
        }
        CardSet(bits)
    };

    /// The single card with the given rank and suit.
    pub const fn card(rank: Rank, suit: Suit) -> CardSet {
        CardSet(1u64 << (rank.lane_bit() + 16 * suit as u32))
    }

    pub(crate) const fn from_bits(bits: u64) -> CardSet {
        CardSet(bits)
    }

    pub(crate) const fn bits(self) -> u64 {
        self.0
    }

    /// True iff every card in `sub` is also in `self`.
    pub const fn contains(self, sub: CardSet) -> bool {
        self.0 & sub.0 == sub.0
    }

    /// Number of cards in the set.
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The highest card in the set, or `EMPTY`.
    ///
    /// Scans the rank masks Ace down to Two; within the first occupied
    /// rank, ties between suits resolve to the highest lane. That order
    /// only matters for deterministic extraction, not hand strength.
    pub fn peek(self) -> CardSet {
        for &r in Rank::ALL.iter().rev() {
            let group = self & r.mask();
            if !group.is_empty() {
                return group.highest_bit();
            }
        }
        CardSet::EMPTY
    }

    // Smear the top bit rightwards, then keep only the top bit.
    const fn highest_bit(self) -> CardSet {
        let mut v = self.0;
        v |= v >> 1;
        v |= v >> 2;
        v |= v >> 4;
        v |= v >> 8;
        v |= v >> 16;
        v |= v >> 32;
        CardSet(v - (v >> 1))
    }

    /// Remove and return the highest card. On an empty set this is a
    /// no-op returning `EMPTY`, so repeated calls drain high to low and
    /// then stay empty.
    pub fn take(&mut self) -> CardSet {
        let card = self.peek();
        self.0 ^= card.0;
        card
    }

    /// The suit of a single card.
    ///
    /// Errors with [`CardSetError::NotSingleCard`] unless `count() == 1`.
    pub fn suit(self) -> Result<Suit, CardSetError> {
        if self.count() != 1 {
            return Err(CardSetError::NotSingleCard(self.count()));
        }
        for &s in &Suit::ALL {
            if !(self & s.mask()).is_empty() {
                return Ok(s);
            }
        }
        Err(CardSetError::NotSingleCard(self.count()))
    }

    /// The rank of a single card.
    ///
    /// Errors with [`CardSetError::NotSingleCard`] unless `count() == 1`.
    pub fn rank(self) -> Result<Rank, CardSetError> {
        if self.count() != 1 {
            return Err(CardSetError::NotSingleCard(self.count()));
        }
        for &r in &Rank::ALL {
            if !(self & r.mask()).is_empty() {
                return Ok(r);
            }
        }
        Err(CardSetError::NotSingleCard(self.count()))
    }

    /// Iterate the cards in descending `take` order.
    pub fn iter(self) -> CardIter {
        CardIter(self)
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardSetError {
    #[error("expected a single card, got a set of {0}")]
    NotSingleCard(u32),
}

/// Draining iterator over the single cards of a set, highest first.
#[derive(Debug, Clone)]
pub struct CardIter(CardSet);

impl Iterator for CardIter {
    type Item = CardSet;

    fn next(&mut self) -> Option<CardSet> {
        let card = self.0.take();
        if card.is_empty() {
            None
        } else {
            Some(card)
        }
    }
}

impl BitOr for CardSet {
    type Output = CardSet;
    fn bitor(self, rhs: CardSet) -> CardSet {
        CardSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for CardSet {
    fn bitor_assign(&mut self, rhs: CardSet) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for CardSet {
    type Output = CardSet;
    fn bitand(self, rhs: CardSet) -> CardSet {
        CardSet(self.0 & rhs.0)
    }
}

impl BitAndAssign for CardSet {
    fn bitand_assign(&mut self, rhs: CardSet) {
        self.0 &= rhs.0;
    }
}

impl BitXor for CardSet {
    type Output = CardSet;
    fn bitxor(self, rhs: CardSet) -> CardSet {
        CardSet(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for CardSet {
    fn bitxor_assign(&mut self, rhs: CardSet) {
        self.0 ^= rhs.0;
    }
}

impl fmt::Display for CardSet {
    /// A single card formats as `Rank_Suit` (e.g. `Ace_Clubs`); larger
    /// sets space-join their cards highest first; the empty set formats
    /// as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count() == 1 {
            if let (Ok(r), Ok(s)) = (self.rank(), self.suit()) {
                return write!(f, "{}_{}", r, s);
            }
        }
        let mut first = true;
        for card in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}", card)?;
            first = false;
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card token: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for CardSet {
    type Err = CardParseError;

    /// Inverse of `Display`: whitespace-separated `Rank_Suit` tokens,
    /// OR-ed together. The empty string parses to `EMPTY`.
    ///
    /// ```
    /// use poker_bits::cards::{CardSet, Rank, Suit};
    ///
    /// let set: CardSet = "Ace_Clubs King_Spades".parse().unwrap();
    /// assert!(set.contains(CardSet::card(Rank::King, Suit::Spades)));
    /// assert_eq!(set.count(), 2);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut set = CardSet::EMPTY;
        for token in s.split_whitespace() {
            let (rank, suit) = token
                .split_once('_')
                .ok_or_else(|| CardParseError::Invalid(token.to_string()))?;
            set |= CardSet::card(rank.parse()?, suit.parse()?);
        }
        Ok(set)
    }
}
