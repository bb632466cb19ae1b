//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::card::Card;
use crate::deck::{Deck, MasterTemplate};
use crate::hand::Hand;
use crate::options::GameOptions;

mod actions;
mod rules;
mod search;
pub mod state;

pub use rules::game_rule;
pub use state::{GameState, Move};

/// Number of players at the table.
pub const NUM_PLAYERS: usize = 2;

/// Number of table stacks.
pub const NUM_STACKS: usize = 3;

/// Seat of the automated player.
pub const COMPUTER: usize = 0;

/// Seat of the human player.
pub const HUMAN: usize = 1;

/// A two-player stack game.
///
/// The game owns the deck, one hand per seat, the table stacks, and the pass
/// counters. It has no opinion on whose turn it is; the driver decides that
/// and calls the per-turn queries and commands in order.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// The shared deck.
    deck: Deck,
    /// Hands indexed by seat.
    hands: [Hand; NUM_PLAYERS],
    /// Table stacks; an empty stack holds [`Card::INVALID`].
    stacks: [Card; NUM_STACKS],
    /// Passes recorded per seat.
    pass_counts: [u32; NUM_PLAYERS],
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// Nothing is dealt until [`Game::new_game`] is called.
    ///
    /// # Example
    ///
    /// ```
    /// use stackrs::{Game, GameOptions, GameState};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// game.new_game();
    /// assert_eq!(game.state(), GameState::Dealt);
    /// assert_eq!(game.cards_left_in_deck(), 42);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_template(options, MasterTemplate::standard(), seed)
    }

    /// Creates a new game whose deck is filled from `template`.
    #[must_use]
    pub fn with_template(options: GameOptions, template: MasterTemplate, seed: u64) -> Self {
        Self {
            options,
            state: GameState::NotStarted,
            deck: Deck::new(template),
            hands: core::array::from_fn(|_| Hand::new()),
            stacks: [Card::INVALID; NUM_STACKS],
            pass_counts: [0; NUM_PLAYERS],
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Starts a new game: restocks the deck, removes the excluded cards,
    /// shuffles, and deals.
    ///
    /// Pass counters and table stacks carry over; call
    /// [`Game::refresh_card_stack`] to lay out fresh stacks.
    pub fn new_game(&mut self) {
        for hand in &mut self.hands {
            hand.reset();
        }

        self.deck.initialize(self.options.packs);

        let mut removed = 0usize;
        for card in &self.options.excluded_cards {
            if self.deck.remove_card(card) {
                removed += 1;
            }
        }

        self.deck.shuffle(&mut self.rng);
        debug!(
            packs = self.options.packs,
            removed,
            deck = self.deck.len(),
            "new game"
        );

        self.deal();
    }

    /// Deals `cards_per_hand` cards to every seat, one at a time in seat
    /// order, then sorts every hand.
    ///
    /// Dealing stops early if the deck runs out. Returns the number of cards
    /// dealt.
    pub fn deal(&mut self) -> usize {
        for hand in &mut self.hands {
            hand.reset();
        }

        let mut dealt = 0;
        for _ in 0..self.options.cards_per_hand {
            for player_id in 0..NUM_PLAYERS {
                if self.take_card(player_id) {
                    dealt += 1;
                }
            }
        }

        for hand in &mut self.hands {
            hand.sort();
        }

        debug!(dealt, deck = self.deck.len(), "dealt hands");
        self.state = GameState::Dealt;
        dealt
    }

    /// Moves the top card of the deck into a hand.
    fn take_card(&mut self, player_id: usize) -> bool {
        if self.deck.is_empty() {
            return false;
        }
        let Some(hand) = self.hands.get_mut(player_id) else {
            return false;
        };
        if hand.is_full() {
            return false;
        }
        let card = self.deck.deal_card();
        trace!(player_id, %card, "card dealt");
        hand.take_card(card).is_ok()
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns a snapshot of a player's hand.
    ///
    /// Returns `None` if the player ID is not a seat.
    #[must_use]
    pub fn get_hand(&self, player_id: usize) -> Option<Hand> {
        self.hands.get(player_id).cloned()
    }

    /// Returns a player's hand for direct manipulation.
    pub fn hand_mut(&mut self, player_id: usize) -> Option<&mut Hand> {
        self.hands.get_mut(player_id)
    }

    /// Returns the number of cards a player holds, 0 for an unknown seat.
    #[must_use]
    pub fn player_cards_left(&self, player_id: usize) -> usize {
        self.hands.get(player_id).map_or(0, Hand::len)
    }

    /// Returns a copy of the table stacks.
    #[must_use]
    pub const fn cards_on_stacks(&self) -> [Card; NUM_STACKS] {
        self.stacks
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the deck for direct manipulation.
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_left_in_deck(&self) -> usize {
        self.deck.len()
    }

    /// Returns the number of passes recorded for a player.
    ///
    /// Returns `None` if the player ID is not a seat.
    #[must_use]
    pub fn total_score_of_player(&self, player_id: usize) -> Option<u32> {
        self.pass_counts.get(player_id).copied()
    }
}
