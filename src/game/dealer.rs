use tracing::{debug, info};

use crate::error::InvalidMove;
use crate::hand::{Hand, is_bust};
use crate::options::GameOptions;
use crate::result::Outcome;

use super::{Game, Phase};

/// Returns whether the dealer must take another card.
///
/// The dealer draws below `dealer_stands_on`. On exactly that total the dealer
/// only draws when the hand is soft and `stand_on_soft_17` is off. A bust hand
/// never draws, whatever the threshold.
pub(crate) fn dealer_should_draw(hand: &Hand, options: &GameOptions) -> bool {
    let value = hand.score();
    if is_bust(value) {
        return false;
    }
    if value < options.dealer_stands_on {
        return true;
    }
    value == options.dealer_stands_on && hand.is_soft() && !options.stand_on_soft_17
}

impl Game {
    /// Dealer draws until the policy says stand.
    ///
    /// If the deck runs dry part way, every card drawn here goes back on the
    /// deck in its original order.
    pub(super) fn dealer_play(&mut self) -> Result<(), InvalidMove> {
        let mut drawn = 0;

        while dealer_should_draw(&self.dealer, &self.options) {
            match self.deck.draw() {
                Ok(card) => {
                    self.dealer.push(card);
                    drawn += 1;
                    debug!(%card, score = self.dealer.score(), "dealer draws");
                }
                Err(err) => {
                    for _ in 0..drawn {
                        if let Some(card) = self.dealer.pop() {
                            self.deck.put_back(card);
                        }
                    }
                    return Err(err.into());
                }
            }
        }

        Ok(())
    }

    /// Moves the game into its terminal state.
    pub(super) fn finish(&mut self, outcome: Outcome) {
        self.phase = Phase::Finished(outcome);
        info!(
            %outcome,
            player = self.player.score(),
            dealer = self.dealer.score(),
            "game finished"
        );
    }
}
