use std::ops::Index;
use std::slice;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cards::{Card, Rank, Suit};
use crate::options::DeckOption;

/// Number of cards in the base deck.
pub const STANDARD_SIZE: usize = 52;

/// An ordered sequence of cards produced by [`Builder::build`].
///
/// Duplicates are allowed: filters, jokers and multi-deck shoes can all
/// produce them. A returned deck is read-only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The base deck: Spades, Diamonds, Clubs, Hearts, each Ace through King.
    ///
    /// ```
    /// use card_deck::cards::{Card, Rank, Suit};
    /// use card_deck::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck[0], Card::new(Rank::Ace, Suit::Spade));
    /// assert_eq!(deck[51], Card::new(Rank::King, Suit::Heart));
    /// ```
    pub fn standard() -> Self {
        Self { cards: standard_cards() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn into_vec(self) -> Vec<Card> {
        self.cards
    }

    /// Number of cards whose suit is `Suit::Joker`.
    pub fn joker_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_joker()).count()
    }
}

impl Index<usize> for Deck {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.cards
    }
}

fn standard_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(STANDARD_SIZE);
    for &s in &Suit::STANDARD {
        for &r in &Rank::ALL {
            cards.push(Card::new(r, s));
        }
    }
    cards
}

/// Builds decks, owning the random source that [`DeckOption::Shuffle`] draws from.
///
/// Every shuffle on the same builder advances the same source, so a builder
/// made with [`Builder::seeded`] replays the same sequence of decks.
///
/// ```
/// use card_deck::deck::Builder;
/// use card_deck::options::DeckOption;
///
/// let mut a = Builder::seeded(7);
/// let mut b = Builder::seeded(7);
/// assert_eq!(a.build([DeckOption::Shuffle]), b.build([DeckOption::Shuffle]));
/// ```
#[derive(Debug, Clone)]
pub struct Builder<R = ChaCha8Rng> {
    rng: R,
}

impl Builder<ChaCha8Rng> {
    /// A builder seeded from the operating system.
    pub fn new() -> Self {
        Self { rng: ChaCha8Rng::from_os_rng() }
    }

    /// A builder with a reproducible source.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl Default for Builder<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Builder<R> {
    /// Use any random source, e.g. a `StdRng` shared with other game state.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Start from the base deck and apply `options` in order.
    pub fn build<I>(&mut self, options: I) -> Deck
    where
        I: IntoIterator<Item = DeckOption>,
    {
        let mut cards = standard_cards();
        let mut applied = 0usize;
        for opt in options {
            let before = cards.len();
            cards = opt.apply(cards, &mut self.rng);
            log::trace!("applied {}: {} -> {} cards", opt.name(), before, cards.len());
            applied += 1;
        }
        log::debug!("built deck of {} cards with {} options", cards.len(), applied);
        Deck { cards }
    }
}

/// Build a deck with a freshly OS-seeded [`Builder`].
///
/// ```
/// use card_deck::deck::build;
/// use card_deck::options::DeckOption;
///
/// let deck = build([DeckOption::Jokers(2), DeckOption::MultiplyDeck(2)]);
/// assert_eq!(deck.len(), 108);
/// assert_eq!(deck.joker_count(), 4);
/// ```
pub fn build<I>(options: I) -> Deck
where
    I: IntoIterator<Item = DeckOption>,
{
    Builder::new().build(options)
}
