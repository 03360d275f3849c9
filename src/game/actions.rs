use tracing::debug;

use crate::card::Card;
use crate::error::InvalidMove;
use crate::result::Outcome;

use super::{Game, Phase};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), InvalidMove> {
        match self.phase {
            Phase::PlayerTurn => Ok(()),
            Phase::Waiting => Err(InvalidMove::NotStarted),
            Phase::Finished(_) => Err(InvalidMove::GameFinished),
        }
    }

    /// Deals two cards each to the player and the dealer, alternating and
    /// starting with the player.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::GameFinished`] once the game is over,
    /// [`InvalidMove::AlreadyDealt`] on a second deal, and
    /// [`InvalidMove::OutOfCards`] if the deck holds fewer than four cards.
    pub fn deal(&mut self) -> Result<(), InvalidMove> {
        match self.phase {
            Phase::Waiting => {}
            Phase::PlayerTurn => return Err(reject("deal", InvalidMove::AlreadyDealt)),
            Phase::Finished(_) => return Err(reject("deal", InvalidMove::GameFinished)),
        }

        if !self.deck.has(4) {
            return Err(reject("deal", InvalidMove::OutOfCards));
        }

        for _ in 0..2 {
            self.player.push(self.deck.draw()?);
            self.dealer.push(self.deck.draw()?);
        }
        self.phase = Phase::PlayerTurn;

        debug!(
            player = self.player.score(),
            dealer = self.dealer.score(),
            "dealt initial cards"
        );
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Returns the drawn card. If it takes the player over 21 the game ends
    /// immediately with [`Outcome::DealerWon`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::NotStarted`] before the deal,
    /// [`InvalidMove::GameFinished`] once the game is over, and
    /// [`InvalidMove::OutOfCards`] if the deck is empty.
    pub fn hit(&mut self) -> Result<Card, InvalidMove> {
        self.ensure_player_turn().map_err(|err| reject("hit", err))?;

        let card = self.deck.draw().map_err(|err| reject("hit", err.into()))?;
        self.player.push(card);

        let score = self.player.score();
        debug!(%card, score, "player hit");

        if crate::hand::is_bust(score) {
            self.finish(Outcome::DealerWon);
        }

        Ok(card)
    }

    /// Player action: Stand. The dealer plays out their hand and the game
    /// is resolved.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::NotStarted`] before the deal,
    /// [`InvalidMove::GameFinished`] once the game is over, and
    /// [`InvalidMove::OutOfCards`] if the deck runs out while the dealer must
    /// draw. In that case the dealer's hand and the deck are restored.
    pub fn stand(&mut self) -> Result<Outcome, InvalidMove> {
        self.ensure_player_turn().map_err(|err| reject("stand", err))?;

        self.dealer_play().map_err(|err| reject("stand", err))?;

        let outcome = Outcome::resolve(self.player.score(), self.dealer.score());
        self.finish(outcome);
        Ok(outcome)
    }
}

fn reject(action: &'static str, err: InvalidMove) -> InvalidMove {
    debug!(action, %err, "move rejected");
    err
}
