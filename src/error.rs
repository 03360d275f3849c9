//! Error types for card construction, drawing, and game moves.

use thiserror::Error;

/// Errors that can occur when building a card from raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidCard {
    /// The suit is not one of Hearts, Diamonds, Clubs, or Spades.
    #[error("invalid suit")]
    Suit,
    /// The rank is not one of 2 through 10, J, Q, K, or A.
    #[error("invalid rank")]
    Rank,
}

/// A draw was attempted on a deck with no cards remaining.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeck;

/// Errors returned when a game operation is not legal in the current state.
///
/// A rejected move never mutates the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidMove {
    /// The initial cards have already been dealt.
    #[error("already dealt")]
    AlreadyDealt,
    /// The initial cards have not been dealt yet.
    #[error("not started")]
    NotStarted,
    /// The game has reached a terminal state.
    #[error("game finished")]
    GameFinished,
    /// The deck cannot supply the cards the move needs.
    #[error("no cards left in the deck")]
    OutOfCards,
}

impl From<EmptyDeck> for InvalidMove {
    fn from(_: EmptyDeck) -> Self {
        Self::OutOfCards
    }
}
