//! The shuffled draw pile.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, canonical_order};
use crate::error::EmptyDeck;

/// A single 52-card deck.
///
/// Cards are drawn from the end of the pile. The deck owns its random number
/// generator, so two decks built from the same seed shuffle identically.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full deck in canonical order and shuffles it.
    ///
    /// # Example
    ///
    /// ```
    /// use bjengine::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new(42);
    /// assert_eq!(deck.remaining(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            cards: Vec::from(canonical_order()),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.shuffle();
        deck
    }

    /// Creates a deck whose draws return `draws` front to back.
    ///
    /// The deck is not shuffled. Useful for replaying a known sequence.
    #[must_use]
    pub fn from_draw_order(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    /// Re-permutes the remaining cards in place.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the last card of the pile.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeck`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, EmptyDeck> {
        self.cards.pop().ok_or(EmptyDeck)
    }

    /// Puts a card back on top of the pile so that it is drawn next.
    pub(crate) fn put_back(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the deck still holds `count` cards.
    #[must_use]
    pub fn has(&self, count: usize) -> bool {
        self.cards.len() >= count
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;
    use crate::card::{DECK_SIZE, Rank, Suit};

    #[test]
    fn draws_every_card_once_then_fails() {
        let mut deck = Deck::new(7);
        let mut seen = HashSet::new();
        for _ in 0..DECK_SIZE {
            assert!(seen.insert(deck.draw().unwrap()));
        }
        assert_eq!(seen.len(), DECK_SIZE);
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), Err(EmptyDeck));
    }

    #[test]
    fn construction_shuffles() {
        let deck = Deck::new(1);
        assert_ne!(deck.cards, Vec::from(canonical_order()));
    }

    #[test]
    fn same_seed_same_order() {
        let mut a = Deck::new(99);
        let mut b = Deck::new(99);
        for _ in 0..DECK_SIZE {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn shuffle_keeps_remaining_cards() {
        let mut deck = Deck::new(3);
        let drawn = deck.draw().unwrap();
        let before: HashSet<Card> = deck.cards.iter().copied().collect();
        deck.shuffle();
        let after: HashSet<Card> = deck.cards.iter().copied().collect();
        assert_eq!(before, after);
        assert!(!after.contains(&drawn));
        assert_eq!(deck.remaining(), DECK_SIZE - 1);
    }

    #[test]
    fn draw_order_is_preserved() {
        let first = Card::new(Suit::Clubs, Rank::Ace);
        let second = Card::new(Suit::Hearts, Rank::Nine);
        let mut deck = Deck::from_draw_order(&[first, second]);
        assert_eq!(deck.draw(), Ok(first));
        assert_eq!(deck.draw(), Ok(second));
        assert_eq!(deck.draw(), Err(EmptyDeck));
    }

    proptest! {
        #[test]
        fn any_seed_yields_52_distinct_cards(seed in any::<u64>()) {
            let mut deck = Deck::new(seed);
            let mut seen = HashSet::new();
            for _ in 0..DECK_SIZE {
                prop_assert!(seen.insert(deck.draw().unwrap()));
            }
            prop_assert_eq!(deck.draw(), Err(EmptyDeck));
        }
    }
}
