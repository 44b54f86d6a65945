use poker_bits::cards::CardSet;
use poker_bits::evaluator::{best_hand, HandCategory};

fn set(s: &str) -> CardSet {
    s.parse().expect("valid card list")
}

#[test]
fn category_royal_flush() {
    let pool = set("Ten_Spades Jack_Spades Queen_Spades King_Spades Ace_Spades Two_Clubs Seven_Hearts");
    let (cat, five) = best_hand(pool);
    assert_eq!(cat, HandCategory::RoyalFlush);
    assert_eq!(five, set("Ten_Spades Jack_Spades Queen_Spades King_Spades Ace_Spades"));
}

#[test]
fn category_straight_flush_wheel() {
    let pool = set("Ace_Clubs Two_Clubs Three_Clubs Four_Clubs Five_Clubs");
    let (cat, five) = best_hand(pool);
    assert_eq!(cat, HandCategory::StraightFlush);
    assert_eq!(five, pool);
}

#[test]
fn category_four_of_a_kind() {
    let pool = set("Ace_Clubs Ace_Diamonds Ace_Hearts Ace_Spades King_Clubs");
    let (cat, five) = best_hand(pool);
    assert_eq!(cat, HandCategory::FourOfAKind);
    assert_eq!(five, pool);
}

#[test]
fn category_full_house() {
    let pool = set("Three_Clubs Three_Diamonds Three_Hearts Jack_Spades Jack_Clubs Two_Hearts Seven_Diamonds");
    let (cat, five) = best_hand(pool);
    assert_eq!(cat, HandCategory::FullHouse);
    assert_eq!(five, set("Three_Clubs Three_Diamonds Three_Hearts Jack_Spades Jack_Clubs"));
}

#[test]
fn category_flush_drops_the_lowest_of_six() {
    let pool = set("King_Hearts Ten_Hearts Eight_Hearts Six_Hearts Three_Hearts Two_Hearts");
    let (cat, five) = best_hand(pool);
    assert_eq!(cat, HandCategory::Flush);
    assert_eq!(five, set("King_Hearts Ten_Hearts Eight_Hearts Six_Hearts Three_Hearts"));
}

#[test]
fn category_straight_mixed_suits() {
    let pool = set("Ace_Clubs Five_Clubs Four_Diamonds Three_Hearts Two_Spades");
    let (cat, five) = best_hand(pool);
    assert_eq!(cat, HandCategory::Straight);
    assert_eq!(five, pool);
}

#[test]
fn category_three_of_a_kind() {
    let pool = set("Queen_Clubs Queen_Diamonds Queen_Hearts Ten_Spades Two_Clubs");
    let (cat, five) = best_hand(pool);
    assert_eq!(cat, HandCategory::ThreeOfAKind);
    assert_eq!(five, pool);
}

#[test]
fn category_two_pair() {
    let pool = set("Jack_Clubs Jack_Diamonds Nine_Clubs Nine_Hearts Two_Spades");
    let (cat, five) = best_hand(pool);
    assert_eq!(cat, HandCategory::TwoPair);
    assert_eq!(five, pool);
}

#[test]
fn category_pair() {
    let pool = set("Ace_Hearts Ace_Diamonds Ten_Spades Nine_Clubs Two_Diamonds");
    let (cat, five) = best_hand(pool);
    assert_eq!(cat, HandCategory::Pair);
    assert_eq!(five, pool);
}

#[test]
fn category_high_card() {
    let pool = set("Ace_Hearts King_Diamonds Seven_Spades Five_Clubs Two_Diamonds");
    let (cat, five) = best_hand(pool);
    assert_eq!(cat, HandCategory::HighCard);
    assert_eq!(five, pool);
}

#[test]
fn wheel_straight_flush_is_not_royal() {
    let pool = set("Ace_Clubs Two_Clubs Three_Clubs Four_Clubs Five_Clubs");
    let (cat, _) = best_hand(pool);
    assert_ne!(cat, HandCategory::RoyalFlush);
    assert_eq!(cat, HandCategory::StraightFlush);
}

#[test]
fn straight_flush_beats_plain_flush_in_the_same_pool() {
    let pool = set("Five_Hearts Six_Hearts Seven_Hearts Eight_Hearts Nine_Hearts Ace_Hearts King_Clubs");
    let (cat, five) = best_hand(pool);
    assert_eq!(cat, HandCategory::StraightFlush);
    assert_eq!(five, set("Five_Hearts Six_Hearts Seven_Hearts Eight_Hearts Nine_Hearts"));
}
