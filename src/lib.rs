//! card-deck: composable playing-card deck construction
//!
//! Goals:
//! - A fixed, deterministic base deck (52 cards, suit-major, Ace to King)
//! - Ordered, composable construction options
//! - Reproducible shuffles from an explicit, seedable random source
//!
//! ## Quick start
//! ```
//! use card_deck::cards::{Card, Rank, Suit};
//! use card_deck::deck::Builder;
//! use card_deck::options::DeckOption;
//!
//! let mut builder = Builder::seeded(2024);
//! let deck = builder.build([
//!     DeckOption::filter(|c: &Card| c.rank().is_some_and(|r| r < Rank::Five)),
//!     DeckOption::Jokers(2),
//!     DeckOption::MultiplyDeck(2),
//!     DeckOption::Shuffle,
//! ]);
//! assert_eq!(deck.len(), 2 * (36 + 2));
//! assert!(deck.iter().all(|c| c.rank() != Some(Rank::Ace)));
//!
//! let sorted = builder.build([DeckOption::DefaultSort]);
//! assert_eq!(sorted[0], Card::new(Rank::Ace, Suit::Spade));
//! ```
//!
//! Logging goes through the `log` facade; install any logger to see the
//! `debug`/`trace` output of each build.

pub mod cards;
pub mod deck;
pub mod options;

pub use cards::{Card, Rank, Suit};
pub use deck::{build, Builder, Deck};
pub use options::DeckOption;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
