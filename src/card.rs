//! Card types and the canonical deck order.

use core::fmt;
use core::str::FromStr;

use crate::error::InvalidCard;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the title-case name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = InvalidCard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(s))
            .ok_or(InvalidCard::Suit)
    }
}

/// Card rank, from Two up to Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in canonical order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the short label used on the table (`"2"`..`"10"`, `"J"`, `"Q"`, `"K"`, `"A"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// Returns the blackjack value of the rank, counting an Ace as 11.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
            Self::Ace => 11,
        }
    }

    /// Returns whether this rank is an Ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rank {
    type Err = InvalidCard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.label().eq_ignore_ascii_case(s))
            .ok_or(InvalidCard::Rank)
    }
}

impl TryFrom<u8> for Rank {
    type Error = InvalidCard;

    /// Converts a numeric rank where 11 = Jack, 12 = Queen, 13 = King and 14 = Ace.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2..=14 => Ok(Self::ALL[usize::from(value - 2)]),
            _ => Err(InvalidCard::Rank),
        }
    }
}

/// A playing card.
///
/// Equality is structural: two cards are equal when suit and rank match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Parses a card from raw suit and rank names.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCard`] if either value is outside the standard set.
    ///
    /// # Example
    ///
    /// ```
    /// use bjengine::{Card, Rank, Suit};
    ///
    /// let card = Card::parse("hearts", "10").unwrap();
    /// assert_eq!(card, Card::new(Suit::Hearts, Rank::Ten));
    /// assert!(Card::parse("stars", "A").is_err());
    /// ```
    pub fn parse(suit: &str, rank: &str) -> Result<Self, InvalidCard> {
        Ok(Self::new(suit.parse()?, rank.parse()?))
    }

    /// Returns the blackjack value of the card, counting an Ace as 11.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Returns all 52 cards in canonical (suit, rank) order.
#[must_use]
pub fn canonical_order() -> [Card; DECK_SIZE] {
    let mut cards = [Card::new(Suit::Hearts, Rank::Two); DECK_SIZE];
    for (i, suit) in Suit::ALL.into_iter().enumerate() {
        for (j, rank) in Rank::ALL.into_iter().enumerate() {
            cards[i * Rank::ALL.len() + j] = Card::new(suit, rank);
        }
    }
    cards
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn parse_accepts_standard_values() {
        assert_eq!(
            Card::parse("Spades", "q"),
            Ok(Card::new(Suit::Spades, Rank::Queen))
        );
        assert_eq!("10".parse::<Rank>(), Ok(Rank::Ten));
        assert_eq!(Rank::try_from(14), Ok(Rank::Ace));
        assert_eq!(Rank::try_from(2), Ok(Rank::Two));
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(Card::parse("InvalidSuit", "A"), Err(InvalidCard::Suit));
        assert_eq!(Card::parse("", "A"), Err(InvalidCard::Suit));
        assert_eq!(Card::parse("Clubs", "InvalidRank"), Err(InvalidCard::Rank));
        assert_eq!(Card::parse("Clubs", "1"), Err(InvalidCard::Rank));
        assert_eq!(Rank::try_from(1), Err(InvalidCard::Rank));
        assert_eq!(Rank::try_from(15), Err(InvalidCard::Rank));
    }

    #[test]
    fn card_display() {
        let card = Card::new(Suit::Hearts, Rank::Ten);
        assert_eq!(card.to_string(), "10 of Hearts");
        assert_eq!(Card::new(Suit::Spades, Rank::Ace).to_string(), "A of Spades");
    }

    #[test]
    fn canonical_order_is_suit_major() {
        let cards = canonical_order();
        assert_eq!(cards[0], Card::new(Suit::Hearts, Rank::Two));
        assert_eq!(cards[12], Card::new(Suit::Hearts, Rank::Ace));
        assert_eq!(cards[13], Card::new(Suit::Diamonds, Rank::Two));
        assert_eq!(cards[51], Card::new(Suit::Spades, Rank::Ace));
    }
}
