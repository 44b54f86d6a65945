//! The ten hand-category detectors.
//!
//! Each detector takes the player's full visible card pool and returns
//! the matched cards, or `EMPTY` when the category is absent. All are
//! pure; scratch copies mutate, inputs never do.

use crate::cards::{CardSet, Rank, Suit};

// Five consecutive bits, starting flush against the top of the word.
const WINDOW: u64 = 0xF800_0000_0000_0000;

// Bit 0 of each suit lane: where the Ace rank lands when shifted down by
// 13, one slot below each Two. These bits exist only in detector scratch
// values and never escape into results.
const LOW_ACE: u64 = 0x0001_0001_0001_0001;

/// Rank of the highest card in the set, if any.
fn top_rank(c: CardSet) -> Option<Rank> {
    c.peek().rank().ok()
}

/// Best five-card straight flush, or `EMPTY`.
///
/// Plants synthetic low-Ace bits below each Two so the wheel is just
/// another window, then slides a 5-bit window across the word keeping
/// the fully-contained candidate with the highest top rank.
pub fn straight_flush(c: CardSet) -> CardSet {
    let pool = c.bits() | ((c.bits() & Rank::Ace.mask().bits()) >> 13);

    let mut best = CardSet::EMPTY;
    for i in 0..60 {
        let window = WINDOW >> i;
        if pool & window == window {
            let candidate = CardSet::from_bits(window);
            if top_rank(candidate) > top_rank(best) {
                best = candidate;
            }
        }
    }

    // A retained wheel carries a synthetic bit; swap it for the real Ace.
    if best.bits() & LOW_ACE != 0 {
        let bits = (best.bits() | ((best.bits() & LOW_ACE) << 13)) & !LOW_ACE;
        best = CardSet::from_bits(bits);
    }

    best
}

/// Ten through Ace of one suit, or `EMPTY`.
pub fn royal_flush(c: CardSet) -> CardSet {
    let sf = straight_flush(c);

    let has_ace = !(sf & Rank::Ace.mask()).is_empty();
    let has_king = !(sf & Rank::King.mask()).is_empty();
    if has_ace && has_king {
        sf
    } else {
        CardSet::EMPTY
    }
}

/// All four cards of the highest quaded rank, or `EMPTY`.
pub fn four_of_a_kind(c: CardSet) -> CardSet {
    for &r in Rank::ALL.iter().rev() {
        let m = r.mask();
        if c.contains(m) {
            return m;
        }
    }
    CardSet::EMPTY
}

/// Highest triple plus the highest pair among the rest, or `EMPTY`.
pub fn full_house(c: CardSet) -> CardSet {
    let three = three_of_a_kind(c);
    let two = pair(c ^ three);

    if three.is_empty() || two.is_empty() {
        return CardSet::EMPTY;
    }
    three | two
}

/// The best five-card flush, or `EMPTY`.
///
/// A suit qualifies with five or more cards; between qualifying suits
/// the one with the higher top card wins, keeping only its top five.
pub fn flush(c: CardSet) -> CardSet {
    let mut best = CardSet::EMPTY;
    for &s in &Suit::ALL {
        let mut suited = c & s.mask();
        if suited.count() >= 5 && (best.is_empty() || top_rank(suited) > top_rank(best)) {
            let mut five = CardSet::EMPTY;
            for _ in 0..5 {
                five |= suited.take();
            }
            best = five;
        }
    }
    best
}

/// The highest five-card straight (any suits), or `EMPTY`.
///
/// Walks ranks Ace down to Two plus one extra step where the Ace stands
/// in for the low end of the wheel, taking one representative card per
/// rank and resetting on a gap. The wheel's low slot draws a real Ace,
/// so no bit rewriting is needed on the way out.
pub fn straight(c: CardSet) -> CardSet {
    let mut run = CardSet::EMPTY;
    let mut len = 0;

    for step in 0..14 {
        let r = if step < 13 { Rank::ALL[12 - step] } else { Rank::Ace };

        let mut group = c & r.mask();
        if group.is_empty() {
            len = 0;
            run = CardSet::EMPTY;
            continue;
        }

        len += 1;
        run |= group.take();

        if len == 5 {
            return run;
        }
    }

    CardSet::EMPTY
}

/// The highest rank with exactly three cards, or `EMPTY`.
///
/// Exact-count match, so a quad never passes as a trip.
pub fn three_of_a_kind(c: CardSet) -> CardSet {
    for &r in Rank::ALL.iter().rev() {
        let d = c & r.mask();
        if d.count() == 3 {
            return d;
        }
    }
    CardSet::EMPTY
}

/// The two highest pairs, or `EMPTY` if there is at most one.
pub fn two_pair(c: CardSet) -> CardSet {
    let p1 = pair(c);
    let p2 = pair(c ^ p1);

    if p1.is_empty() || p2.is_empty() {
        return CardSet::EMPTY;
    }
    p1 | p2
}

/// The highest rank with exactly two cards, or `EMPTY`.
pub fn pair(c: CardSet) -> CardSet {
    for &r in Rank::ALL.iter().rev() {
        let d = c & r.mask();
        if d.count() == 2 {
            return d;
        }
    }
    CardSet::EMPTY
}

/// The five highest cards, or `EMPTY` if fewer than five are present.
pub fn high_card(c: CardSet) -> CardSet {
    let mut pool = c;
    let mut hand = CardSet::EMPTY;

    for _ in 0..5 {
        let card = pool.take();
        if card.is_empty() {
            return CardSet::EMPTY;
        }
        hand |= card;
    }

    hand
}
