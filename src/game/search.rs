use rand::Rng;
use tracing::debug;

use super::{Game, Move, game_rule};

impl Game {
    /// Looks for a legal move for `player_id`.
    ///
    /// If any stack shows a joker (or is empty), a uniformly random valid card
    /// from the hand is paired with the first such stack, since anything may land
    /// there. Otherwise the first pair that satisfies [`game_rule`] is
    /// returned, scanning hand cards in order and stacks in order for each
    /// card.
    ///
    /// Returns `None` when no move exists; the driver should record a pass.
    pub fn look_for_a_move(&mut self, player_id: usize) -> Option<Move> {
        let hand = self.hands.get(player_id)?;
        if hand.is_empty() {
            debug!(player_id, "no move: empty hand");
            return None;
        }

        if let Some(stack_index) = self.stacks.iter().position(|c| c.rank_position() == 0) {
            let playable = hand.cards().iter().filter(|c| c.is_valid()).count();
            if playable == 0 {
                debug!(player_id, "no move: no valid cards");
                return None;
            }
            let pick = self.rng.random_range(0..playable);
            let (hand_index, _) = hand
                .cards()
                .iter()
                .enumerate()
                .filter(|(_, c)| c.is_valid())
                .nth(pick)?;
            debug!(player_id, hand_index, stack_index, "wild stack");
            return Some(Move::new(hand_index, stack_index));
        }

        for (hand_index, card) in hand.cards().iter().enumerate() {
            if !card.is_valid() {
                continue;
            }
            for (stack_index, stack) in self.stacks.iter().enumerate() {
                if game_rule(card.rank_position(), stack.rank_position()) {
                    debug!(player_id, hand_index, stack_index, "move found");
                    return Some(Move::new(hand_index, stack_index));
                }
            }
        }

        debug!(player_id, "no move found");
        None
    }
}
