//! Game engine and state management.

use crate::deck::Deck;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::Outcome;

mod actions;
mod dealer;
mod display;
pub mod state;

use state::Phase;
pub use state::GameState;

/// A single-player blackjack game.
///
/// The game owns its deck and both hands for its whole lifetime. Drive it with
/// [`Game::deal`], then [`Game::hit`] and [`Game::stand`] until
/// [`Game::state`] is terminal. Every operation either applies fully or
/// returns an error without touching the game.
///
/// # Example
///
/// ```
/// use bjengine::{Game, GameOptions};
///
/// let mut game = Game::new(GameOptions::default(), 42);
/// game.deal().unwrap();
/// let outcome = game.stand().unwrap();
/// assert_eq!(game.outcome(), Some(outcome));
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    deck: Deck,
    player: Hand,
    dealer: Hand,
    phase: Phase,
}

impl Game {
    /// Creates a new game with a freshly shuffled deck.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_deck(options, Deck::new(seed))
    }

    /// Creates a new game that draws from `deck`.
    #[must_use]
    pub const fn with_deck(options: GameOptions, deck: Deck) -> Self {
        Self {
            options,
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            phase: Phase::Waiting,
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.phase.state()
    }

    /// Returns whether the initial cards have been dealt.
    #[must_use]
    pub const fn is_dealt(&self) -> bool {
        self.phase.is_dealt()
    }

    /// Returns whether the game has reached a terminal state.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    /// Returns the outcome once the game is finished.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Finished(outcome) => Some(outcome),
            Phase::Waiting | Phase::PlayerTurn => None,
        }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the player's current score.
    #[must_use]
    pub fn player_score(&self) -> u32 {
        self.player.score()
    }

    /// Returns the dealer's current score.
    #[must_use]
    pub fn dealer_score(&self) -> u32 {
        self.dealer.score()
    }

    /// Returns whether the player's hand is bust.
    #[must_use]
    pub fn player_is_bust(&self) -> bool {
        self.player.is_bust()
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }
}
