use card_deck::cards::{Card, Rank, Suit};
use card_deck::deck::{build, Builder, Deck};
use card_deck::options::{less, DeckOption};

#[test]
fn default_sort_puts_ace_of_spades_first() {
    let d = build([DeckOption::DefaultSort]);
    assert_eq!(d[0], Card::new(Rank::Ace, Suit::Spade));
    assert_eq!(d, Deck::standard());
}

#[test]
fn custom_sort_with_default_comparator_matches_default_sort() {
    let d = build([DeckOption::custom_sort(less)]);
    assert_eq!(d[0], Card::new(Rank::Ace, Suit::Spade));
    assert_eq!(d, build([DeckOption::DefaultSort]));
}

#[test]
fn custom_sort_by_rank_groups_ranks_together() {
    let by_rank = |a: &Card, b: &Card| a.rank() < b.rank();
    let d = build([DeckOption::custom_sort(by_rank)]);
    let first_four: Vec<_> = d.iter().take(4).map(|c| c.rank()).collect();
    assert_eq!(first_four, vec![Some(Rank::Ace); 4]);
    // stable: suits keep base-deck order within a rank
    let suits: Vec<_> = d.iter().take(4).map(|c| c.suit()).collect();
    assert_eq!(suits, Suit::STANDARD.to_vec());
}

#[test]
fn default_sort_after_shuffle_restores_base_order() {
    let mut b = Builder::seeded(11);
    let d = b.build([DeckOption::Shuffle, DeckOption::DefaultSort]);
    assert_eq!(d, Deck::standard());
}

#[test]
fn default_sort_is_idempotent() {
    let mut b = Builder::seeded(5);
    let once = b.build([DeckOption::Shuffle, DeckOption::Jokers(3), DeckOption::DefaultSort]);
    let mut b = Builder::seeded(5);
    let twice = b.build([
        DeckOption::Shuffle,
        DeckOption::Jokers(3),
        DeckOption::DefaultSort,
        DeckOption::DefaultSort,
    ]);
    assert_eq!(once, twice);
}

#[test]
fn jokers_sort_after_hearts() {
    let d = build([DeckOption::Jokers(2), DeckOption::Shuffle, DeckOption::DefaultSort]);
    assert_eq!(d.len(), 54);
    assert!(d.iter().take(51).all(|c| !c.is_joker()));
    assert_eq!(d[53], Card::joker(1));
}

#[test]
fn jokers_are_appended_with_distinct_indices() {
    let d = build([DeckOption::Jokers(3)]);
    assert_eq!(d.len(), 55);
    assert_eq!(d.joker_count(), 3);
    let indices: Vec<_> = d.iter().filter_map(|c| c.joker_index()).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    assert!(d.iter().skip(52).all(|c| c.suit() == Suit::Joker));
    assert_eq!(build([DeckOption::Jokers(0)]), Deck::standard());
}

#[test]
fn jokers_beyond_a_byte_keep_counting() {
    let d = build([DeckOption::Jokers(300)]);
    assert_eq!(d.len(), 352);
    assert_eq!(d.joker_count(), 300);
    let indices: Vec<_> = d.iter().filter_map(|c| c.joker_index()).collect();
    assert_eq!(indices, (0..300).collect::<Vec<_>>());
    assert!(d.iter().skip(52).all(|c| c.rank().is_none()));
}

#[test]
fn filter_low_ranks_leaves_36_in_order() {
    let d = build([DeckOption::filter(|c: &Card| c.rank().is_some_and(|r| r < Rank::Five))]);
    assert_eq!(d.len(), 52 - 4 * 4);
    let expected: Vec<Card> = Deck::standard()
        .into_iter()
        .filter(|c| c.rank().is_some_and(|r| r >= Rank::Five))
        .collect();
    assert_eq!(d.into_vec(), expected);
}

#[test]
fn filter_edge_cases() {
    assert_eq!(build([DeckOption::filter(|_| false)]), Deck::standard());
    assert!(build([DeckOption::filter(|_| true)]).is_empty());
}

#[test]
fn filter_can_drop_jokers() {
    let d = build([DeckOption::Jokers(4), DeckOption::filter(|c: &Card| c.is_joker())]);
    assert_eq!(d, Deck::standard());
}

#[test]
fn multiply_deck_concatenates_copies() {
    let d = build([DeckOption::MultiplyDeck(3)]);
    assert_eq!(d.len(), 156);
    let base = Deck::standard();
    for chunk in d.as_slice().chunks(52) {
        assert_eq!(chunk, base.as_slice());
    }
    assert!(build([DeckOption::MultiplyDeck(0)]).is_empty());
}

#[test]
fn shuffle_is_reproducible_for_a_seed() {
    let d1 = Builder::seeded(0).build([DeckOption::Shuffle]);
    let d2 = Builder::seeded(0).build([DeckOption::Shuffle]);
    assert_eq!(d1, d2);
    assert_ne!(d1, Deck::standard());

    let s1 = build([DeckOption::ShuffleSeeded(99)]);

    let s2 = build([DeckOption::ShuffleSeeded(99)]);
    assert_eq!(s1, s2);
}

// ChaCha8 seed 0 through rand's Fisher-Yates
#[test]
fn shuffle_with_seed_zero_has_fixed_order() {
    let base = Deck::standard();
    let d = Builder::seeded(0).build([DeckOption::Shuffle]);
    assert_eq!(d[0], base[27]);
    assert_eq!(d[1], base[8]);
    assert_eq!(d[0], Card::new(Rank::Two, Suit::Club));
    assert_eq!(d[1], Card::new(Rank::Nine, Suit::Spade));
}

#[test]
fn rng_mut_draws_from_the_shuffle_source() {
    use rand::Rng;

    let mut a = Builder::seeded(21);
    let mut b = Builder::seeded(21);
    assert_eq!(a.rng_mut().random::<u64>(), b.rng_mut().random::<u64>());
    assert_eq!(a.build([DeckOption::Shuffle]), b.build([DeckOption::Shuffle]));

    let _ = b.rng_mut().random::<u64>();
    assert_ne!(a.build([DeckOption::Shuffle]), b.build([DeckOption::Shuffle]));
}

#[test]
fn shuffle_accepts_any_rng() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut b = Builder::with_rng(StdRng::seed_from_u64(8));
    let d = b.build([DeckOption::Shuffle]);
    let mut sorted = d.into_vec();
    sorted.sort_by_key(|c| card_deck::options::sort_key(*c));
    assert_eq!(sorted, Deck::standard().into_vec());
}

#[test]
fn cards_render_as_text() {
    let d = build([DeckOption::Jokers(1)]);
    assert_eq!(d[0].to_string(), "Ace of Spades");
    assert_eq!(d[13].to_string(), "Ace of Diamonds");
    assert_eq!(d[51].to_string(), "King of Hearts");
    assert_eq!(d[52].to_string(), "Joker");
}
