//! Final result of a game.

use core::fmt;

/// How a finished game was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The dealer busted or the player finished closer to 21.
    PlayerWon,
    /// The player busted or the dealer finished closer to 21.
    DealerWon,
    /// Both hands finished on the same score.
    Draw,
}

impl Outcome {
    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PlayerWon => "Player Won",
            Self::DealerWon => "Dealer Won",
            Self::Draw => "Draw",
        }
    }

    /// Compares final scores once the dealer has finished drawing.
    ///
    /// A bust player loses even if the dealer also busts.
    #[must_use]
    pub const fn resolve(player_score: u32, dealer_score: u32) -> Self {
        if crate::hand::is_bust(player_score) {
            Self::DealerWon
        } else if crate::hand::is_bust(dealer_score) {
            Self::PlayerWon
        } else if dealer_score > player_score {
            Self::DealerWon
        } else if dealer_score < player_score {
            Self::PlayerWon
        } else {
            Self::Draw
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_orders_checks() {
        assert_eq!(Outcome::resolve(22, 25), Outcome::DealerWon);
        assert_eq!(Outcome::resolve(12, 22), Outcome::PlayerWon);
        assert_eq!(Outcome::resolve(20, 19), Outcome::PlayerWon);
        assert_eq!(Outcome::resolve(18, 19), Outcome::DealerWon);
        assert_eq!(Outcome::resolve(20, 20), Outcome::Draw);
        assert_eq!(Outcome::resolve(21, 21), Outcome::Draw);
    }
}
