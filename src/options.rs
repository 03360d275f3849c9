//! Game configuration options.

/// Configuration options for a blackjack game.
///
/// The defaults give the house rule the engine was built around: the dealer
/// draws below 17 and stands on every 17, soft or hard.
///
/// ```
/// use bjengine::GameOptions;
///
/// let options = GameOptions::default().with_stand_on_soft_17(false);
/// assert_eq!(options.dealer_stands_on, 17);
/// assert!(!options.stand_on_soft_17);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Total at which the dealer stops drawing.
    pub dealer_stands_on: u32,
    /// Whether the dealer stands on a soft total equal to `dealer_stands_on`.
    pub stand_on_soft_17: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stands_on: 17,
            stand_on_soft_17: true,
        }
    }
}

impl GameOptions {
    /// Sets the total at which the dealer stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjengine::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(16);
    /// assert_eq!(options.dealer_stands_on, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u32) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets whether the dealer stands on soft 17.
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }
}
