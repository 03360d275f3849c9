//! A single-player blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that enforces the deal → hit/stand →
//! resolution flow, scores hands with soft/hard Ace handling, and plays the
//! dealer's turn. It performs no I/O; callers drive it through method calls and
//! render [`Game::display`].
//!
//! # Example
//!
//! ```
//! use bjengine::{Game, GameOptions, GameState, InvalidMove};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! assert_eq!(game.hit(), Err(InvalidMove::NotStarted));
//!
//! game.deal().unwrap();
//! while game.state() == GameState::InProgress && game.player_score() < 17 {
//!     game.hit().unwrap();
//! }
//! if !game.is_finished() {
//!     game.stand().unwrap();
//! }
//! assert!(game.is_finished());
//! println!("{}", game.display());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{EmptyDeck, InvalidCard, InvalidMove};
pub use game::{Game, GameState};
pub use hand::{Hand, is_bust, is_soft, score};
pub use options::GameOptions;
pub use result::Outcome;
