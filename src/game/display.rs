use core::fmt::{self, Write as _};

use alloc::string::{String, ToString};

use crate::hand::Hand;

use super::Game;

const HEADER: [&str; 3] = ["Player", "Score", "Cards"];

fn card_labels(hand: &Hand) -> String {
    let mut out = String::new();
    for (i, card) in hand.cards().iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(card.rank.label());
    }
    out
}

fn write_border(f: &mut fmt::Formatter<'_>, widths: &[usize; 3]) -> fmt::Result {
    for &width in widths {
        f.write_char('+')?;
        for _ in 0..width + 2 {
            f.write_char('-')?;
        }
    }
    f.write_str("+\n")
}

fn write_row(f: &mut fmt::Formatter<'_>, widths: &[usize; 3], cells: &[&str; 3]) -> fmt::Result {
    for (cell, &width) in cells.iter().zip(widths) {
        write!(f, "| {cell:^width$} ")?;
    }
    f.write_str("|\n")
}

impl Game {
    /// Renders both hands, their scores, and the game status.
    ///
    /// ```
    /// use bjengine::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 1);
    /// assert!(game.display().starts_with("||In Progress||"));
    /// ```
    #[must_use]
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dealer_score = self.dealer.score().to_string();
        let player_score = alloc::format!("-->{}<--", self.player.score());
        let dealer_cards = card_labels(&self.dealer);
        let player_cards = card_labels(&self.player);

        let rows = [
            ["Dealer", dealer_score.as_str(), dealer_cards.as_str()],
            ["Player", player_score.as_str(), player_cards.as_str()],
        ];

        let mut widths = HEADER.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        write!(f, "||{}||\n\n", self.state())?;
        write_border(f, &widths)?;
        write_row(f, &widths, &HEADER)?;
        write_border(f, &widths)?;
        for row in &rows {
            write_row(f, &widths, row)?;
        }
        write_border(f, &widths)
    }
}

#[cfg(test)]
mod tests {
    use crate::card::{Card, Rank, Suit};
    use crate::deck::Deck;
    use crate::options::GameOptions;

    use super::*;

    #[test]
    fn renders_table_after_deal() {
        let deck = Deck::from_draw_order(&[
            Card::new(Suit::Hearts, Rank::Ten),
            Card::new(Suit::Clubs, Rank::Nine),
            Card::new(Suit::Spades, Rank::King),
            Card::new(Suit::Diamonds, Rank::Six),
        ]);
        let mut game = Game::with_deck(GameOptions::default(), deck);
        game.deal().unwrap();

        let expected = "\
||In Progress||

+--------+----------+-------+
| Player |  Score   | Cards |
+--------+----------+-------+
| Dealer |    15    | 9, 6  |
| Player | -->20<-- | 10, K |
+--------+----------+-------+
";
        assert_eq!(game.display(), expected);
    }

    #[test]
    fn empty_hands_render() {
        let game = Game::new(GameOptions::default(), 5);
        let text = game.display();
        assert!(text.contains("| Dealer |"));
        assert!(text.contains("-->0<--"));
    }
}
