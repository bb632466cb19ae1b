//! Error types for hand, deck, and game operations.

use thiserror::Error;

/// Errors raised by [`Hand`](crate::Hand) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand already holds its maximum number of cards.
    #[error("hand is full ({capacity} cards)")]
    Full {
        /// Capacity of the hand.
        capacity: usize,
    },
    /// Index is past the cards currently held.
    #[error("card index {index} out of range for hand of {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of cards held.
        len: usize,
    },
}

/// Errors raised by [`Deck`](crate::Deck) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Index is past the cards remaining in the deck.
    #[error("card index {index} out of range for deck of {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of cards remaining.
        len: usize,
    },
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// No card at the requested hand index.
    #[error("card not found in hand")]
    CardNotFound,
    /// No table stack at the requested index.
    #[error("stack not found")]
    StackNotFound,
    /// The card cannot be placed on that stack.
    #[error("move breaks the adjacency rule")]
    IllegalMove,
}
