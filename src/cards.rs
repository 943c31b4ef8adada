use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Emoji presentation selector that often trails suit symbols (`♠️`).
const VARIATION_SELECTOR: char = '\u{FE0F}';

/// Card ranks from Two (low) to Ace (high).
///
/// Ordering is the position in [`Rank::ALL`]; the Ace is always high.
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

    /// Pip value, 2 through 14.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Position in the fixed rank sequence: Two is 0, Ace is 12.
    pub const fn index(self) -> usize {
        (self as u8 - 2) as usize
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A rank, suit or card outside the fixed enumerations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidValue {
    #[error("invalid rank: '{0}'")]
    Rank(String),
    #[error("invalid suit: '{0}'")]
    Suit(String),
    #[error("invalid card: '{0}'")]
    Card(String),
}

impl TryFrom<u8> for Rank {
    type Error = InvalidValue;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            2..=14 => Ok(Rank::ALL[(v - 2) as usize]),
            _ => Err(InvalidValue::Rank(v.to_string())),
        }
    }
}

impl FromStr for Rank {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        if upper == "T" {
            return Ok(Rank::Ten);
        }
        Rank::ALL
            .iter()
            .copied()
            .find(|r| r.symbol() == upper)
            .ok_or_else(|| InvalidValue::Rank(s.to_string()))
    }
}

/// Four suits. Suits carry no ordering: nothing in hand classification ranks one
/// suit above another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,
    Spades,
    Hearts,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Spades, Suit::Hearts, Suit::Diamonds];

    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Suit {
    type Error = InvalidValue;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            '♣' | '♧' | 'c' => Ok(Suit::Clubs),
            '♠' | '♤' | 's' => Ok(Suit::Spades),
            '♥' | '♡' | 'h' => Ok(Suit::Hearts),
            '♦' | '♢' | 'd' => Ok(Suit::Diamonds),
            _ => Err(InvalidValue::Suit(c.to_string())),
        }
    }
}

impl FromStr for Suit {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().trim_end_matches(VARIATION_SELECTOR);
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c).map_err(|_| InvalidValue::Suit(s.to_string()));
        }
        match t.to_ascii_lowercase().as_str() {
            "clubs" => Ok(Suit::Clubs),
            "spades" => Ok(Suit::Spades),
            "hearts" => Ok(Suit::Hearts),
            "diamonds" => Ok(Suit::Diamonds),
            _ => Err(InvalidValue::Suit(s.to_string())),
        }
    }
}

/// A playing card: rank + suit.
///
/// Equality, ordering and hashing look at the rank only. Two cards of the same
/// rank compare equal whatever their suits; use [`Card::to_tuple`] when the
/// exact physical card matters.
///
/// ```
/// use poker_sim::cards::{Card, Rank, Suit};
///
/// let ace = Card::new(Rank::Ace, Suit::Spades);
/// assert_eq!(ace.to_string(), "A♠");
/// assert_eq!(ace, Card::new(Rank::Ace, Suit::Hearts));
/// assert!(ace > Card::new(Rank::King, Suit::Spades));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Build a card from its textual rank and suit, e.g. `("10", "♣")`.
    pub fn from_symbols(rank: &str, suit: &str) -> Result<Self, InvalidValue> {
        Ok(Self::new(rank.parse()?, suit.parse()?))
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }
    pub const fn suit(self) -> Suit {
        self.suit
    }

    pub const fn to_tuple(self) -> (Rank, Suit) {
        (self.rank, self.suit)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.index().cmp(&other.rank.index())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().trim_end_matches(VARIATION_SELECTOR);
        // suit is the last char, rank is everything before it
        let (split, suit_ch) = t.char_indices().last().ok_or_else(|| InvalidValue::Card(s.to_string()))?;
        if split == 0 {
            return Err(InvalidValue::Card(s.to_string()));
        }
        let rank = Rank::from_str(&t[..split])?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use poker_sim::cards::{parse_cards, Rank, Suit};
///
/// let cards = parse_cards("A♠, Kd 10c").unwrap();
/// assert_eq!(cards[0].to_tuple(), (Rank::Ace, Suit::Spades));
/// assert_eq!(cards[1].to_tuple(), (Rank::King, Suit::Diamonds));
/// assert_eq!(cards[2].to_tuple(), (Rank::Ten, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, InvalidValue> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}
