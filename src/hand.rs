//! Player hand representation.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::HandError;

/// A player's hand.
///
/// Cards are kept contiguous in the order they were taken; playing a card
/// shifts the cards after it one place to the left.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Maximum number of cards a hand can hold.
    pub const MAX_CARDS: usize = 50;

    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Empties the hand.
    pub fn reset(&mut self) {
        self.cards.clear();
    }

    /// Adds a card after the last card held.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::Full`] if the hand already holds
    /// [`Hand::MAX_CARDS`] cards.
    pub fn take_card(&mut self, card: Card) -> Result<(), HandError> {
        if self.is_full() {
            return Err(HandError::Full {
                capacity: Self::MAX_CARDS,
            });
        }
        self.cards.push(card);
        Ok(())
    }

    /// Removes and returns the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::IndexOutOfRange`] if `index` is not below
    /// [`Hand::len`].
    pub fn play_card(&mut self, index: usize) -> Result<Card, HandError> {
        self.check_index(index)?;
        Ok(self.cards.remove(index))
    }

    /// Returns a copy of the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::IndexOutOfRange`] if `index` is not below
    /// [`Hand::len`].
    pub fn inspect_card(&self, index: usize) -> Result<Card, HandError> {
        self.check_index(index)?;
        let card = self.cards[index];
        Ok(if card.is_valid() { card } else { Card::INVALID })
    }

    /// Sorts the hand by ascending rank position.
    ///
    /// Cards of equal rank keep their relative order.
    pub fn sort(&mut self) {
        self.cards.sort_by_key(Card::rank_position);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand is at capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= Self::MAX_CARDS
    }

    fn check_index(&self, index: usize) -> Result<(), HandError> {
        if index < self.cards.len() {
            Ok(())
        } else {
            Err(HandError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            })
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hand = (")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
                if i % 5 == 0 {
                    f.write_str("\n")?;
                }
            }
            write!(f, " {card}")?;
        }
        f.write_str(" )")
    }
}
