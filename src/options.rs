//! Deck construction options.
//!
//! Each option turns one card sequence into another. The builder applies
//! them in the order given, so `[Jokers(2), Shuffle]` mixes the jokers in
//! while `[Shuffle, Jokers(2)]` leaves them on the bottom.

use std::cmp::Ordering;
use std::fmt;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cards::{Card, Rank};

/// Less-than relation used by [`DeckOption::CustomSort`].
pub type Comparator = Box<dyn Fn(&Card, &Card) -> bool>;

/// Removal test used by [`DeckOption::Filter`]; `true` drops the card.
pub type Predicate = Box<dyn Fn(&Card) -> bool>;

/// Composite ordering key: suit-major, rank-minor.
///
/// Jokers get `Suit::Joker.index() * 13 + joker_index`, which places them
/// after every playing card. Joker #0 shares its key with the King of Hearts;
/// the stable sort keeps whichever came first.
pub const fn sort_key(card: Card) -> usize {
    card.suit().index() * Rank::MAX as usize + card.tag()
}

/// The comparator behind [`DeckOption::DefaultSort`].
///
/// ```
/// use card_deck::deck::build;
/// use card_deck::options::{less, DeckOption};
///
/// let custom = build([DeckOption::custom_sort(less)]);
/// let default = build([DeckOption::DefaultSort]);
/// assert_eq!(custom, default);
/// ```
pub fn less(a: &Card, b: &Card) -> bool {
    sort_key(*a) < sort_key(*b)
}

/// One step of deck construction.
#[non_exhaustive]
pub enum DeckOption {
    /// Stable sort by [`sort_key`].
    DefaultSort,
    /// Stable sort by a caller-supplied less-than relation.
    CustomSort(Comparator),
    /// Uniform permutation drawn from the builder's random source.
    Shuffle,
    /// Uniform permutation drawn from a fresh source seeded with the value.
    /// Does not touch the builder's source.
    ShuffleSeeded(u64),
    /// Append this many jokers, tagged `0..n`.
    Jokers(usize),
    /// Drop every card the predicate matches, keeping the order of the rest.
    Filter(Predicate),
    /// Repeat the deck built so far this many times. Zero empties it.
    MultiplyDeck(usize),
}

impl DeckOption {
    pub fn custom_sort<F>(less: F) -> Self
    where
        F: Fn(&Card, &Card) -> bool + 'static,
    {
        DeckOption::CustomSort(Box::new(less))
    }

    pub fn filter<F>(predicate: F) -> Self
    where
        F: Fn(&Card) -> bool + 'static,
    {
        DeckOption::Filter(Box::new(predicate))
    }

    /// Short label used in logs.
    pub const fn name(&self) -> &'static str {
        match self {
            DeckOption::DefaultSort => "default-sort",
            DeckOption::CustomSort(_) => "custom-sort",
            DeckOption::Shuffle => "shuffle",
            DeckOption::ShuffleSeeded(_) => "shuffle-seeded",
            DeckOption::Jokers(_) => "jokers",
            DeckOption::Filter(_) => "filter",
            DeckOption::MultiplyDeck(_) => "multiply-deck",
        }
    }

    /// Apply this option. `rng` is only read by [`DeckOption::Shuffle`].
    pub fn apply<R: Rng + ?Sized>(&self, cards: Vec<Card>, rng: &mut R) -> Vec<Card> {
        match self {
            DeckOption::DefaultSort => sort_by_less(cards, less),
            DeckOption::CustomSort(cmp) => sort_by_less(cards, cmp),
            DeckOption::Shuffle => shuffle_with(&cards, rng),
            DeckOption::ShuffleSeeded(seed) => {
                let mut seeded = ChaCha8Rng::seed_from_u64(*seed);
                shuffle_with(&cards, &mut seeded)
            }
            DeckOption::Jokers(n) => add_jokers(cards, *n),
            DeckOption::Filter(pred) => cards.into_iter().filter(|c| !pred(c)).collect(),
            DeckOption::MultiplyDeck(n) => cards.repeat(*n),
        }
    }
}

impl fmt::Debug for DeckOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckOption::DefaultSort => f.write_str("DefaultSort"),
            DeckOption::CustomSort(_) => f.write_str("CustomSort(..)"),
            DeckOption::Shuffle => f.write_str("Shuffle"),
            DeckOption::ShuffleSeeded(seed) => f.debug_tuple("ShuffleSeeded").field(seed).finish(),
            DeckOption::Jokers(n) => f.debug_tuple("Jokers").field(n).finish(),
            DeckOption::Filter(_) => f.write_str("Filter(..)"),
            DeckOption::MultiplyDeck(n) => f.debug_tuple("MultiplyDeck").field(n).finish(),
        }
    }
}

fn sort_by_less<F>(mut cards: Vec<Card>, less: F) -> Vec<Card>
where
    F: Fn(&Card, &Card) -> bool,
{
    // slice::sort_by is stable
    cards.sort_by(|a, b| {
        if less(a, b) {
            Ordering::Less
        } else if less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
    cards
}

/// Draw a uniform permutation of `0..n`.
pub fn permutation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}

fn shuffle_with<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    permutation(cards.len(), rng).into_iter().map(|j| cards[j]).collect()
}

fn add_jokers(mut cards: Vec<Card>, n: usize) -> Vec<Card> {
    cards.extend((0..n).map(Card::joker));
    cards
}
