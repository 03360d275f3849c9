//! Game state types.

use core::fmt;

use crate::result::Outcome;

/// Game state.
///
/// Once a game leaves [`GameState::InProgress`] it never changes again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Moves are still accepted.
    InProgress,
    /// The player won.
    PlayerWon,
    /// The dealer won.
    DealerWon,
    /// Both hands tied.
    Draw,
}

impl GameState {
    /// Returns whether the state is terminal.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    /// Returns the outcome for a terminal state.
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::InProgress => None,
            Self::PlayerWon => Some(Outcome::PlayerWon),
            Self::DealerWon => Some(Outcome::DealerWon),
            Self::Draw => Some(Outcome::Draw),
        }
    }

    /// Returns the status label shown on the table.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.outcome() {
            None => "In Progress",
            Some(outcome) => outcome.label(),
        }
    }
}

impl From<Outcome> for GameState {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::PlayerWon => Self::PlayerWon,
            Outcome::DealerWon => Self::DealerWon,
            Outcome::Draw => Self::Draw,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the game is in its deal → play → resolve lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    /// No cards dealt yet.
    Waiting,
    /// Initial cards dealt, player to act.
    PlayerTurn,
    /// Resolved.
    Finished(Outcome),
}

impl Phase {
    pub(crate) const fn state(self) -> GameState {
        match self {
            Self::Waiting | Self::PlayerTurn => GameState::InProgress,
            Self::Finished(outcome) => match outcome {
                Outcome::PlayerWon => GameState::PlayerWon,
                Outcome::DealerWon => GameState::DealerWon,
                Outcome::Draw => GameState::Draw,
            },
        }
    }

    pub(crate) const fn is_dealt(self) -> bool {
        !matches!(self, Self::Waiting)
    }
}
