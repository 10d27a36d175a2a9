use std::fmt;
use std::str::FromStr;

/// Card ranks from Ace (low, 1) to King (13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
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
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
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
    ];

    /// Highest rank value; also the width of one suit in the sort key.
    pub const MAX: u8 = Rank::King as u8;

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Zero-based position within `Rank::ALL`.
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    pub const fn from_value(value: u8) -> Option<Rank> {
        match value {
            1..=13 => Some(Rank::ALL[value as usize - 1]),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
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

    /// Accepts full names ("Queen"), numbers ("1".."10") and the letters A, T, J, Q, K.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if let Some(r) = Rank::ALL.iter().find(|r| r.name().eq_ignore_ascii_case(t)) {
            return Ok(*r);
        }
        let r = match t.to_ascii_uppercase().as_str() {
            "A" => Rank::Ace,
            "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            num => num
                .parse::<u8>()
                .ok()
                .filter(|v| *v <= 10)
                .and_then(Rank::from_value)
                .ok_or_else(|| RankParseError::Invalid(s.to_string()))?,
        };
        Ok(r)
    }
}

/// Suits in base-deck order. `Joker` is a sentinel, not a playing suit; it
/// sits last so jokers sort after every playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Spade,
    Diamond,
    Club,
    Heart,
    Joker,
}

impl Suit {
    pub const ALL: [Suit; 5] = [Suit::Spade, Suit::Diamond, Suit::Club, Suit::Heart, Suit::Joker];

    /// The four playing suits, in the order the base deck is laid out.
    pub const STANDARD: [Suit; 4] = [Suit::Spade, Suit::Diamond, Suit::Club, Suit::Heart];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn is_joker(self) -> bool {
        matches!(self, Suit::Joker)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Spade => "Spade",
            Suit::Diamond => "Diamond",
            Suit::Club => "Club",
            Suit::Heart => "Heart",
            Suit::Joker => "Joker",
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
        let lower = s.trim().to_ascii_lowercase();
        let name = match lower.as_str() {
            "s" => "spade",
            "d" => "diamond",
            "c" => "club",
            "h" => "heart",
            long => long.strip_suffix('s').unwrap_or(long),
        };
        match name {
            "spade" => Ok(Suit::Spade),
            "diamond" => Ok(Suit::Diamond),
            "club" => Ok(Suit::Club),
            "heart" => Ok(Suit::Heart),
            "joker" => Ok(Suit::Joker),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

/// A playing card or a joker.
///
/// A playing card carries its rank value in `tag`. A joker carries its index
/// among the jokers added to a deck instead; the index only tells jokers apart.
///
/// ```
/// use card_deck::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ace, Suit::Spade);
/// assert_eq!(card.to_string(), "Ace of Spades");
/// assert_eq!(Card::joker(2).to_string(), "Joker");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    tag: usize,
}

impl Card {
    /// Passing `Suit::Joker` yields a joker tagged with the rank's value.
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, tag: rank.value() as usize }
    }

    pub const fn joker(index: usize) -> Self {
        Self { suit: Suit::Joker, tag: index }
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// `None` for jokers.
    pub const fn rank(self) -> Option<Rank> {
        if self.suit.is_joker() || self.tag > Rank::MAX as usize {
            None
        } else {
            Rank::from_value(self.tag as u8)
        }
    }

    /// `None` for playing cards.
    pub const fn joker_index(self) -> Option<usize> {
        if self.suit.is_joker() {
            Some(self.tag)
        } else {
            None
        }
    }

    /// Rank value for playing cards, joker index for jokers.
    pub const fn tag(self) -> usize {
        self.tag
    }

    pub const fn is_joker(self) -> bool {
        self.suit.is_joker()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank() {
            Some(rank) => write!(f, "{} of {}s", rank, self.suit),
            None => write!(f, "{}", self.suit),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Parses the `Display` form. A bare "Joker" parses as joker #0 since the
    /// rendered text drops the index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "joker" {
            return Ok(Card::joker(0));
        }
        let (rank_str, suit_str) = lower
            .split_once(" of ")
            .ok_or_else(|| CardParseError::Invalid(s.to_string()))?;
        let rank = Rank::from_str(rank_str)?;
        let suit = Suit::from_str(suit_str)?;
        if suit.is_joker() {
            return Err(CardParseError::Invalid(s.to_string()));
        }
        Ok(Card::new(rank, suit))
    }
}

/// Parse multiple cards separated by commas.
///
/// ```
/// use card_deck::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("Ace of Spades, Ten of Hearts, Joker").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spade));
/// assert_eq!(cards[1], Card::new(Rank::Ten, Suit::Heart));
/// assert_eq!(cards[2], Card::joker(0));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}
