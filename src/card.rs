//! Card types and the rank table.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in template order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Lowercase name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "spades",
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Clubs => "clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank, in rank-table order.
///
/// The discriminant is the rank position used by the adjacency rule and by
/// hand sorting: the joker is 0, the ace is 13.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Joker, the wildcard.
    Joker = 0,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

/// Number of entries in the rank table.
pub const RANK_COUNT: usize = 14;

impl Rank {
    /// The rank table, lowest first.
    pub const ALL: [Self; RANK_COUNT] = [
        Self::Joker,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Symbols matching [`Rank::ALL`].
    pub const SYMBOLS: [char; RANK_COUNT] = [
        'X', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A',
    ];

    /// Position of this rank in the rank table.
    #[must_use]
    pub const fn position(self) -> usize {
        self as usize
    }

    /// Single-character symbol of this rank.
    #[must_use]
    pub const fn symbol(self) -> char {
        Self::SYMBOLS[self.position()]
    }

    /// Looks up a rank by its table symbol.
    ///
    /// Returns `None` for any character outside the table.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::SYMBOLS
            .iter()
            .position(|&s| s == symbol)
            .map(|i| Self::ALL[i])
    }

    /// Returns whether this is the wildcard rank.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Self::Joker)
    }
}

/// A playing card.
///
/// A card is either valid, with a rank from the rank table, or the invalid
/// sentinel [`Card::INVALID`]. Invalid cards are never equal to anything,
/// themselves included, so `Card` implements `PartialEq` but not `Eq`.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    rank: Rank,
    suit: Option<Suit>,
    valid: bool,
}

impl Card {
    /// The invalid card returned wherever a lookup has nothing to give.
    pub const INVALID: Self = Self {
        rank: Rank::Joker,
        suit: None,
        valid: false,
    };

    /// Creates a valid card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit: Some(suit),
            valid: true,
        }
    }

    /// Creates a suitless joker.
    #[must_use]
    pub const fn joker() -> Self {
        Self {
            rank: Rank::Joker,
            suit: None,
            valid: true,
        }
    }

    /// Creates a card from a rank symbol.
    ///
    /// A symbol outside the rank table yields [`Card::INVALID`] instead of
    /// failing.
    #[must_use]
    pub fn from_symbol(symbol: char, suit: Suit) -> Self {
        Rank::from_symbol(symbol).map_or(Self::INVALID, |rank| Self::new(rank, suit))
    }

    /// The rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// The suit of the card, `None` for a suitless joker or an invalid card.
    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        self.suit
    }

    /// Returns whether the card is valid.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns whether the card is a valid joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        self.valid && self.rank.is_joker()
    }

    /// Position of the card's rank in the rank table.
    ///
    /// The invalid card reports 0.
    #[must_use]
    pub const fn rank_position(&self) -> usize {
        if self.valid { self.rank.position() } else { 0 }
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::INVALID
    }
}

impl From<Option<Card>> for Card {
    fn from(card: Option<Card>) -> Self {
        card.unwrap_or(Self::INVALID)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.valid && other.valid && self.rank == other.rank && self.suit == other.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.valid {
            return f.write_str("[ invalid ]");
        }
        match self.suit {
            Some(suit) => write!(f, "{} of {suit}", self.rank.symbol()),
            None => write!(f, "{}", self.rank.symbol()),
        }
    }
}
