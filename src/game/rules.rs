use crate::card::Rank;

use super::Game;

const TWO: usize = Rank::Two.position();
const ACE: usize = Rank::Ace.position();

/// The adjacency rule.
///
/// A card may be placed on a stack when either rank is the joker, when the
/// ranks are one apart, or when one is an ace and the other a two. Equal
/// ranks never match.
///
/// ```
/// use stackrs::game_rule;
///
/// assert!(game_rule(5, 6));
/// assert!(game_rule(13, 1));
/// assert!(!game_rule(3, 3));
/// ```
#[must_use]
pub const fn game_rule(played: usize, stack: usize) -> bool {
    if played == 0 || stack == 0 {
        return true;
    }
    if played.abs_diff(stack) == 1 {
        return true;
    }
    (stack == ACE && played == TWO) || (stack == TWO && played == ACE)
}

impl Game {
    /// Checks whether `player_id` may put the card at `hand_index` onto the
    /// stack at `stack_index`.
    ///
    /// Out-of-range indices and invalid hand cards are never valid. An empty
    /// stack accepts any card.
    #[must_use]
    pub fn is_valid_move(&self, player_id: usize, hand_index: usize, stack_index: usize) -> bool {
        let Some(stack_card) = self.stacks.get(stack_index) else {
            return false;
        };
        let Some(hand) = self.hands.get(player_id) else {
            return false;
        };
        let Ok(card) = hand.inspect_card(hand_index) else {
            return false;
        };
        if !card.is_valid() {
            return false;
        }
        game_rule(card.rank_position(), stack_card.rank_position())
    }
}
