use poker_sim::cards::{Card, Rank, Suit};
use poker_sim::hand::{Category, PokerHand};

fn hand(cards: [(Rank, Suit); 5]) -> PokerHand {
    PokerHand::from_cards(cards.map(|(r, s)| Card::new(r, s)))
}

#[test]
fn low_straight_in_mixed_suits() {
    let h = hand([
        (Rank::Two, Suit::Clubs),
        (Rank::Three, Suit::Spades),
        (Rank::Four, Suit::Hearts),
        (Rank::Five, Suit::Diamonds),
        (Rank::Six, Suit::Clubs),
    ]);
    assert!(h.is_straight());
    assert_eq!(h.num_match(), 0);
    assert!(!h.is_flush());
    assert_eq!(h.category(), Category::Straight);
}

#[test]
fn ace_low_straight_is_not_detected() {
    let h = hand([
        (Rank::Ace, Suit::Clubs),
        (Rank::Two, Suit::Spades),
        (Rank::Three, Suit::Hearts),
        (Rank::Four, Suit::Diamonds),
        (Rank::Five, Suit::Clubs),
    ]);
    assert!(!h.is_straight());
    assert_eq!(h.category(), Category::HighCard);
}

#[test]
fn broadway_straight() {
    let h = hand([
        (Rank::Ace, Suit::Hearts),
        (Rank::King, Suit::Spades),
        (Rank::Queen, Suit::Hearts),
        (Rank::Jack, Suit::Diamonds),
        (Rank::Ten, Suit::Clubs),
    ]);
    assert!(h.is_straight());
}

#[test]
fn gap_is_not_a_straight() {
    let h = hand([
        (Rank::Two, Suit::Clubs),
        (Rank::Three, Suit::Spades),
        (Rank::Four, Suit::Hearts),
        (Rank::Five, Suit::Diamonds),
        (Rank::Seven, Suit::Clubs),
    ]);
    assert!(!h.is_straight());
}

#[test]
fn paired_span_of_four_is_not_a_straight() {
    let h = hand([
        (Rank::Two, Suit::Clubs),
        (Rank::Two, Suit::Spades),
        (Rank::Four, Suit::Hearts),
        (Rank::Five, Suit::Diamonds),
        (Rank::Six, Suit::Clubs),
    ]);
    assert!(!h.is_straight());
    assert!(h.is_pair());
}

#[test]
fn full_house_is_only_a_full_house() {
    let h = hand([
        (Rank::Five, Suit::Clubs),
        (Rank::Five, Suit::Spades),
        (Rank::Five, Suit::Hearts),
        (Rank::King, Suit::Diamonds),
        (Rank::King, Suit::Clubs),
    ]);
    assert_eq!(h.num_match(), 8);
    assert!(h.is_full_house());
    assert!(!h.is_pair());
    assert!(!h.is_tris());
    assert!(!h.is_two_pair());
    assert!(!h.is_quad());
}

#[test]
fn two_pair() {
    let h = hand([
        (Rank::Two, Suit::Clubs),
        (Rank::Two, Suit::Spades),
        (Rank::Five, Suit::Hearts),
        (Rank::Five, Suit::Diamonds),
        (Rank::Nine, Suit::Clubs),
    ]);
    assert_eq!(h.num_match(), 4);
    assert!(h.is_two_pair());
    assert_eq!(h.category(), Category::TwoPair);
}

#[test]
fn three_of_a_kind() {
    let h = hand([
        (Rank::Queen, Suit::Clubs),
        (Rank::Queen, Suit::Diamonds),
        (Rank::Queen, Suit::Hearts),
        (Rank::Ten, Suit::Spades),
        (Rank::Two, Suit::Clubs),
    ]);
    assert_eq!(h.num_match(), 6);
    assert!(h.is_tris());
}

#[test]
fn four_of_a_kind() {
    let h = hand([
        (Rank::Nine, Suit::Clubs),
        (Rank::Nine, Suit::Diamonds),
        (Rank::Nine, Suit::Hearts),
        (Rank::Nine, Suit::Spades),
        (Rank::Ace, Suit::Clubs),
    ]);
    assert_eq!(h.num_match(), 12);
    assert!(h.is_quad());
    assert_eq!(h.category(), Category::FourOfAKind);
}

#[test]
fn all_spades_is_a_flush() {
    let h = hand([
        (Rank::King, Suit::Spades),
        (Rank::Ten, Suit::Spades),
        (Rank::Eight, Suit::Spades),
        (Rank::Six, Suit::Spades),
        (Rank::Three, Suit::Spades),
    ]);
    assert!(h.is_flush());
    assert_eq!(h.category(), Category::Flush);
}

#[test]
fn straight_flush_holds_both_predicates() {
    let h: PokerHand = "9♥ 10♥ J♥ Q♥ K♥".parse().unwrap();
    assert!(h.is_straight());
    assert!(h.is_flush());
    assert!(Category::Straight.is_held_by(&h));
    assert!(Category::Flush.is_held_by(&h));
    assert_eq!(h.category(), Category::StraightFlush);
}
