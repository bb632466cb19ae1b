//! Game state types.

/// Game state.
///
/// There is no finished state: the driver decides when a game is over and
/// simply stops calling into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// No cards dealt yet.
    #[default]
    NotStarted,
    /// Hands have been dealt, no card has moved since.
    Dealt,
    /// Players are taking turns.
    InPlay,
}

/// A proposed move: a card from a hand onto a table stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// Index of the card in the acting player's hand.
    pub hand_index: usize,
    /// Index of the target table stack.
    pub stack_index: usize,
}

impl Move {
    /// Creates a move.
    #[must_use]
    pub const fn new(hand_index: usize, stack_index: usize) -> Self {
        Self {
            hand_index,
            stack_index,
        }
    }
}
