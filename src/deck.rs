//! The master template and the dealing deck built from it.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, RANK_COUNT, Rank, Suit};
use crate::error::DeckError;

/// Number of cards in the master template.
pub const TEMPLATE_SIZE: usize = RANK_COUNT * Suit::ALL.len();

/// Number of ranked (non-joker) cards in one pack.
pub const PACK_SIZE: usize = 52;

/// Joker slots added once per deck, on top of the packs.
pub const JOKER_SLOTS: usize = 4;

/// The canonical card sequence decks are filled from.
///
/// One run of the rank table per suit, joker first, so the template holds
/// 52 ranked cards and 4 jokers.
#[derive(Debug, Clone, Copy)]
pub struct MasterTemplate {
    cards: [Card; TEMPLATE_SIZE],
}

impl MasterTemplate {
    /// Builds the standard template.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = [Card::INVALID; TEMPLATE_SIZE];
        let all = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)));
        for (slot, card) in cards.iter_mut().zip(all) {
            *slot = card;
        }
        Self { cards }
    }

    /// Returns the template cards in order.
    #[must_use]
    pub const fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for MasterTemplate {
    fn default() -> Self {
        Self::standard()
    }
}

/// A deck dealt from the top.
///
/// The top of the deck is the end of [`Deck::cards`]; the number of cards
/// remaining doubles as the deal cursor.
#[derive(Debug, Clone)]
pub struct Deck {
    template: MasterTemplate,
    cards: Vec<Card>,
}

impl Deck {
    /// Maximum number of packs in one deck.
    pub const MAX_PACKS: usize = 6;

    /// Creates an empty deck that will be filled from `template`.
    #[must_use]
    pub const fn new(template: MasterTemplate) -> Self {
        Self {
            template,
            cards: Vec::new(),
        }
    }

    /// Creates a deck holding exactly `cards`, the last card on top.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            template: MasterTemplate::standard(),
            cards,
        }
    }

    /// Number of cards a deck of `packs` packs holds after initialization.
    ///
    /// `packs` is clamped to `1..=MAX_PACKS`.
    #[must_use]
    pub const fn size_for(packs: usize) -> usize {
        PACK_SIZE * Self::clamp_packs(packs) + JOKER_SLOTS
    }

    const fn clamp_packs(packs: usize) -> usize {
        if packs == 0 {
            1
        } else if packs > Self::MAX_PACKS {
            Self::MAX_PACKS
        } else {
            packs
        }
    }

    /// Refills the deck for `packs` packs by cycling the template.
    ///
    /// The pack count is clamped to `1..=MAX_PACKS`.
    pub fn initialize(&mut self, packs: usize) {
        let size = Self::size_for(packs);
        self.cards.clear();
        self.cards
            .extend(self.template.cards().iter().copied().cycle().take(size));
    }

    /// Shuffles the deck in place.
    ///
    /// Every position is swapped with a uniformly chosen position other than
    /// itself.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let len = self.cards.len();
        if len < 2 {
            return;
        }
        for i in 0..len {
            let mut j = rng.random_range(0..len - 1);
            if j >= i {
                j += 1;
            }
            self.cards.swap(i, j);
        }
    }

    /// Deals the top card.
    ///
    /// Returns [`Card::INVALID`] when the deck is empty.
    pub fn deal_card(&mut self) -> Card {
        self.cards.pop().into()
    }

    /// Returns a copy of the card at `index`, counted from the bottom.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::IndexOutOfRange`] if `index` is not below
    /// [`Deck::len`].
    pub fn inspect_card(&self, index: usize) -> Result<Card, DeckError> {
        let card = self
            .cards
            .get(index)
            .copied()
            .ok_or(DeckError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            })?;
        Ok(if card.is_valid() { card } else { Card::INVALID })
    }

    /// Removes the first card equal to `card`, scanning from the bottom.
    ///
    /// Returns `false` if no card matched.
    pub fn remove_card(&mut self, card: &Card) -> bool {
        match self.cards.iter().position(|c| c == card) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns the cards remaining, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(MasterTemplate::standard())
    }
}
