use crate::cards::{parse_cards, Card, InvalidValue};
use crate::deck::{Deck, DeckError};
use std::fmt;
use std::str::FromStr;

/// Number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;

// Ordered-pair match counts produced by `PokerHand::num_match`.
const ONE_PAIR: usize = 2;
const TWO_PAIR: usize = 4;
const TRIS: usize = 6;
const FULL_HOUSE: usize = 8;
const QUAD: usize = 12;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly 5 cards, got {0}")]
    CardCount(usize),
    #[error(transparent)]
    Card(#[from] InvalidValue),
}

/// Five cards dealt out of a [`Deck`].
///
/// The hand owns its cards; the deck it came from no longer holds them.
///
/// ```
/// use poker_sim::deck::Deck;
/// use poker_sim::hand::PokerHand;
///
/// let mut deck = Deck::standard();
/// deck.shuffle_seeded(3);
/// let hand = PokerHand::deal(&mut deck).unwrap();
/// assert_eq!(deck.len(), 47);
/// assert_eq!(hand.cards().len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct PokerHand {
    cards: [Card; HAND_SIZE],
}

impl PokerHand {
    /// Deal five cards from the front of `deck`.
    ///
    /// A deck holding fewer than five cards yields [`DeckError::EmptyDeck`] and is left as it was.
    pub fn deal(deck: &mut Deck) -> Result<Self, DeckError> {
        if deck.len() < HAND_SIZE {
            return Err(DeckError::EmptyDeck);
        }
        let cards = [deck.deal()?, deck.deal()?, deck.deal()?, deck.deal()?, deck.deal()?];
        Ok(Self { cards })
    }

    pub fn from_cards(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn into_cards(self) -> [Card; HAND_SIZE] {
        self.cards
    }

    /// Reorder the stored cards by rank, lowest first.
    pub fn sort_by_rank(&mut self) {
        self.cards.sort();
    }

    /// Count of ordered position pairs `(i, j)`, `i != j`, whose ranks match.
    ///
    /// A rank held by `k` cards contributes `k * (k - 1)`, so a full house counts
    /// `3*2 + 2*1 = 8`.
    pub fn num_match(&self) -> usize {
        let mut matches = 0;
        for (i, a) in self.cards.iter().enumerate() {
            for (j, b) in self.cards.iter().enumerate() {
                if i != j && a.rank() == b.rank() {
                    matches += 1;
                }
            }
        }
        matches
    }

    pub fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit();
        self.cards[1..].iter().all(|c| c.suit() == suit)
    }

    pub fn is_pair(&self) -> bool {
        self.num_match() == ONE_PAIR
    }

    pub fn is_two_pair(&self) -> bool {
        self.num_match() == TWO_PAIR
    }

    pub fn is_tris(&self) -> bool {
        self.num_match() == TRIS
    }

    pub fn is_full_house(&self) -> bool {
        self.num_match() == FULL_HOUSE
    }

    pub fn is_quad(&self) -> bool {
        self.num_match() == QUAD
    }

    /// Five distinct ranks spanning exactly four steps of the rank sequence.
    ///
    /// The Ace only plays high: `A 2 3 4 5` is not a straight. Works on a sorted
    /// copy, the stored order is not touched.
    pub fn is_straight(&self) -> bool {
        let mut sorted = self.cards;
        sorted.sort();
        let distance = sorted[HAND_SIZE - 1].rank().index() - sorted[0].rank().index();
        self.num_match() == 0 && distance == 4
    }

    /// The strongest category this hand holds.
    pub fn category(&self) -> Category {
        Category::DESCENDING
            .iter()
            .copied()
            .find(|c| c.is_held_by(self))
            .unwrap_or(Category::HighCard)
    }
}

impl TryFrom<Vec<Card>> for PokerHand {
    type Error = HandError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        let len = cards.len();
        let cards: [Card; HAND_SIZE] = cards.try_into().map_err(|_| HandError::CardCount(len))?;
        Ok(Self::from_cards(cards))
    }
}

impl FromStr for PokerHand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PokerHand::try_from(parse_cards(s)?)
    }
}

impl fmt::Display for PokerHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

/// Hand shapes the classifier recognises, weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    const DESCENDING: [Category; 9] = [
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::Pair,
        Category::HighCard,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Whether `hand` satisfies this category's predicate.
    ///
    /// Categories are tested independently: a straight flush also holds
    /// `Straight` and `Flush`. `HighCard` holds only when nothing else does.
    pub fn is_held_by(self, hand: &PokerHand) -> bool {
        match self {
            Category::HighCard => {
                hand.num_match() == 0 && !hand.is_straight() && !hand.is_flush()
            }
            Category::Pair => hand.is_pair(),
            Category::TwoPair => hand.is_two_pair(),
            Category::ThreeOfAKind => hand.is_tris(),
            Category::Straight => hand.is_straight(),
            Category::Flush => hand.is_flush(),
            Category::FullHouse => hand.is_full_house(),
            Category::FourOfAKind => hand.is_quad(),
            Category::StraightFlush => hand.is_straight() && hand.is_flush(),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "high card",
            Category::Pair => "pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfAKind => "four of a kind",
            Category::StraightFlush => "straight flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryParseError {
    #[error("unknown hand category: '{0}'")]
    Unknown(String),
}

impl FromStr for Category {
    type Err = CategoryParseError;

    /// Accepts the display names plus a few short aliases (`tris`, `quad`, `full-house`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        let c = match key.as_str() {
            "tris" | "trips" => Category::ThreeOfAKind,
            "quad" | "quads" => Category::FourOfAKind,
            other => Category::DESCENDING
                .iter()
                .copied()
                .find(|c| c.name() == other)
                .ok_or_else(|| CategoryParseError::Unknown(s.to_string()))?,
        };
        Ok(c)
    }
}
