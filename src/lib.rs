//! A two-player stack-building card game engine with optional `no_std` support.
//!
//! Two players hold hands dealt from a shared deck and take turns placing a
//! card on one of three table stacks. A card fits on a stack when its rank is
//! next to the stack's rank, with the ace and the two linked and jokers
//! fitting anywhere. A player with no legal move passes, and the pass
//! counters are the score.
//!
//! The crate provides a [`Game`] type that owns the deck, hands, stacks, and
//! pass counters, plus [`Game::look_for_a_move`] to drive a computer seat.
//! Turn order and the end of a game are left to the caller.
//!
//! # Example
//!
//! ```
//! use stackrs::{COMPUTER, Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.new_game();
//! game.refresh_card_stack();
//!
//! match game.look_for_a_move(COMPUTER) {
//!     Some(mv) => {
//!         game.make_move(COMPUTER, mv).unwrap();
//!     }
//!     None => {
//!         game.update_pass_counter(COMPUTER).unwrap();
//!     }
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;

// Re-export main types
pub use card::{Card, RANK_COUNT, Rank, Suit};
pub use deck::{Deck, JOKER_SLOTS, MasterTemplate, PACK_SIZE, TEMPLATE_SIZE};
pub use error::{ActionError, DeckError, HandError};
pub use game::{COMPUTER, Game, GameState, HUMAN, Move, NUM_PLAYERS, NUM_STACKS, game_rule};
pub use hand::Hand;
pub use options::GameOptions;
