//! Hand representation and scoring.

use alloc::vec::Vec;

use crate::card::Card;

/// Highest score that is not a bust.
pub const BLACKJACK: u32 = 21;

fn evaluate_cards(cards: &[Card]) -> (u32, bool) {
    let mut value: u32 = 0;
    let mut aces: usize = 0;

    for card in cards {
        if card.rank.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(u32::from(card.value()));
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// Returns the best score for `cards`.
///
/// Aces count as 11 until the total would exceed 21, at which point they are
/// demoted to 1 one at a time. An empty slice scores 0.
///
/// # Example
///
/// ```
/// use bjengine::{Card, Rank, Suit, score};
///
/// let aces = [Card::new(Suit::Hearts, Rank::Ace), Card::new(Suit::Spades, Rank::Ace)];
/// assert_eq!(score(&aces), 12);
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> u32 {
    evaluate_cards(cards).0
}

/// Returns whether `score` is over 21.
#[must_use]
pub const fn is_bust(score: u32) -> bool {
    score > BLACKJACK
}

/// Returns whether `cards` still count an Ace as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// An append-only sequence of cards held by the player or the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the most recently added card.
    pub(crate) fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the score of the hand.
    #[must_use]
    pub fn score(&self) -> u32 {
        score(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(self.score())
    }

    /// Returns whether the hand is soft.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::card::{Rank, Suit};

    const fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn empty_hand_scores_zero() {
        assert_eq!(score(&[]), 0);
        assert!(!Hand::new().is_soft());
    }

    #[test]
    fn ace_with_ten_value_is_21() {
        for ten in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King] {
            let hand = [card(Suit::Hearts, Rank::Ace), card(Suit::Spades, ten)];
            assert_eq!(score(&hand), 21);
            assert!(is_soft(&hand));
        }
    }

    #[test]
    fn two_aces_score_12() {
        let hand = [card(Suit::Hearts, Rank::Ace), card(Suit::Spades, Rank::Ace)];
        assert_eq!(score(&hand), 12);
    }

    #[test]
    fn aces_demote_until_not_bust() {
        let hand = [
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Spades, Rank::Jack),
            card(Suit::Clubs, Rank::Ace),
            card(Suit::Diamonds, Rank::Eight),
        ];
        assert_eq!(score(&hand), 20);
        assert!(!is_soft(&hand));

        let mut bust = Hand::from(&hand[..]);
        bust.push(card(Suit::Diamonds, Rank::Two));
        assert_eq!(bust.score(), 22);
        assert!(bust.is_bust());
    }

    #[test]
    fn soft_17() {
        let hand = [card(Suit::Hearts, Rank::Ace), card(Suit::Spades, Rank::Six)];
        assert_eq!(score(&hand), 17);
        assert!(is_soft(&hand));
    }

    #[test]
    fn full_deck_scores_without_truncation() {
        let all = crate::card::canonical_order();
        // 4 * (2..=9 + four tens + ace) = 380, with all four Aces demoted.
        assert_eq!(score(&all), 340);
        assert!(!is_soft(&all));
        assert!(is_bust(score(&all)));

        let doubled: Vec<Card> = all.iter().chain(all.iter()).copied().collect();
        assert_eq!(score(&doubled), 680);
    }

    #[test]
    fn bust_threshold() {
        assert!(!is_bust(21));
        assert!(is_bust(22));
    }

    fn any_card() -> impl Strategy<Value = Card> {
        (0..4usize, 0..13usize).prop_map(|(s, r)| Card::new(Suit::ALL[s], Rank::ALL[r]))
    }

    proptest! {
        #[test]
        fn score_ignores_card_order(
            cards in prop::collection::vec(any_card(), 0..12),
            seed in any::<u64>(),
        ) {
            use rand::SeedableRng;
            use rand::seq::SliceRandom;

            let mut shuffled = cards.clone();
            shuffled.shuffle(&mut rand_chacha::ChaCha8Rng::seed_from_u64(seed));
            prop_assert_eq!(score(&cards), score(&shuffled));
        }

        #[test]
        fn soft_hands_never_bust(cards in prop::collection::vec(any_card(), 1..12)) {
            if is_soft(&cards) {
                prop_assert!(!is_bust(score(&cards)));
            }
        }
    }
}
