//! Game configuration options.

use alloc::vec::Vec;

use crate::card::Card;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use stackrs::{Card, GameOptions, Rank, Suit};
///
/// let options = GameOptions::default()
///     .with_packs(2)
///     .with_cards_per_hand(5)
///     .with_excluded_card(Card::new(Rank::Two, Suit::Clubs));
/// assert_eq!(options.excluded_cards.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Number of 52-card packs in the deck, clamped to `1..=6`.
    pub packs: usize,
    /// Number of cards dealt to each player.
    pub cards_per_hand: usize,
    /// Cards removed from the deck before shuffling.
    pub excluded_cards: Vec<Card>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            packs: 1,
            cards_per_hand: 7,
            excluded_cards: Vec::new(),
        }
    }
}

impl GameOptions {
    /// Sets the number of packs.
    ///
    /// # Example
    ///
    /// ```
    /// use stackrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_packs(3);
    /// assert_eq!(options.packs, 3);
    /// ```
    #[must_use]
    pub const fn with_packs(mut self, packs: usize) -> Self {
        self.packs = packs;
        self
    }

    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use stackrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_cards_per_hand(10);
    /// assert_eq!(options.cards_per_hand, 10);
    /// ```
    #[must_use]
    pub const fn with_cards_per_hand(mut self, cards: usize) -> Self {
        self.cards_per_hand = cards;
        self
    }

    /// Adds a card to remove from the deck before each shuffle.
    #[must_use]
    pub fn with_excluded_card(mut self, card: Card) -> Self {
        self.excluded_cards.push(card);
        self
    }

    /// Replaces the excluded cards.
    #[must_use]
    pub fn with_excluded_cards(mut self, cards: Vec<Card>) -> Self {
        self.excluded_cards = cards;
        self
    }
}
