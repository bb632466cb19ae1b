use tracing::{debug, trace};

use crate::card::Card;
use crate::error::ActionError;

use super::{Game, GameState, Move, NUM_STACKS};

impl Game {
    /// Moves a dealt game into play. A game that was never dealt stays
    /// `NotStarted`.
    const fn mark_in_play(&mut self) {
        if !matches!(self.state, GameState::NotStarted) {
            self.state = GameState::InPlay;
        }
    }

    /// Plays the card at `card_index` from a player's hand.
    ///
    /// Returns [`Card::INVALID`] if the player or the card index is out of
    /// range; the hand is left untouched in that case.
    pub fn play_card(&mut self, player_id: usize, card_index: usize) -> Card {
        let Some(hand) = self.hands.get_mut(player_id) else {
            return Card::INVALID;
        };
        let Ok(card) = hand.play_card(card_index) else {
            return Card::INVALID;
        };
        trace!(player_id, card_index, %card, "card played");
        self.mark_in_play();
        card
    }

    /// Deals the top card of the deck to a player and returns it.
    ///
    /// Returns [`Card::INVALID`] without touching the deck if the player is
    /// unknown, their hand is full, or the deck is empty.
    pub fn deal_a_card_to(&mut self, player_id: usize) -> Card {
        let Some(hand) = self.hands.get_mut(player_id) else {
            return Card::INVALID;
        };
        if hand.is_full() || self.deck.is_empty() {
            return Card::INVALID;
        }
        let card = self.deck.deal_card();
        if hand.take_card(card).is_err() {
            return Card::INVALID;
        }
        trace!(player_id, %card, "card drawn");
        self.mark_in_play();
        card
    }

    /// Places `card` on a table stack, replacing whatever was showing.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::StackNotFound`] if `stack_index` is not a stack.
    pub fn add_to_play_stack(&mut self, card: Card, stack_index: usize) -> Result<(), ActionError> {
        let slot = self
            .stacks
            .get_mut(stack_index)
            .ok_or(ActionError::StackNotFound)?;
        *slot = card;
        trace!(stack_index, %card, "card stacked");
        self.mark_in_play();
        Ok(())
    }

    /// Checks a move against the rule and, if legal, moves the card from the
    /// player's hand onto the stack.
    ///
    /// Returns the card that was played.
    ///
    /// # Errors
    ///
    /// Returns an error if the player, card, or stack does not exist, or if
    /// the card does not fit on the stack.
    pub fn make_move(&mut self, player_id: usize, mv: Move) -> Result<Card, ActionError> {
        let hand = self.hands.get(player_id).ok_or(ActionError::PlayerNotFound)?;
        if mv.hand_index >= hand.len() {
            return Err(ActionError::CardNotFound);
        }
        if mv.stack_index >= NUM_STACKS {
            return Err(ActionError::StackNotFound);
        }
        if !self.is_valid_move(player_id, mv.hand_index, mv.stack_index) {
            return Err(ActionError::IllegalMove);
        }

        let card = self.play_card(player_id, mv.hand_index);
        self.add_to_play_stack(card, mv.stack_index)?;
        debug!(player_id, %card, stack_index = mv.stack_index, "move made");
        Ok(card)
    }

    /// Replaces every table stack with a card from the deck.
    ///
    /// Does nothing unless the deck holds at least one card per stack.
    /// Returns whether the stacks were replaced.
    pub fn refresh_card_stack(&mut self) -> bool {
        if self.deck.len() < NUM_STACKS {
            debug!(deck = self.deck.len(), "too few cards to refresh stacks");
            return false;
        }
        for slot in &mut self.stacks {
            *slot = self.deck.deal_card();
        }
        debug!(deck = self.deck.len(), "stacks refreshed");
        self.mark_in_play();
        true
    }

    /// Records a pass for a player and returns their new pass count.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::PlayerNotFound`] if the player ID is not a seat.
    pub fn update_pass_counter(&mut self, player_id: usize) -> Result<u32, ActionError> {
        let count = self
            .pass_counts
            .get_mut(player_id)
            .ok_or(ActionError::PlayerNotFound)?;
        *count += 1;
        debug!(player_id, passes = *count, "pass recorded");
        Ok(*count)
    }
}
