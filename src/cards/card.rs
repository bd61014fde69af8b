//! Card values.
//!
//! A `Card` is an immutable value: rank, suit and the index of the deck it
//! came from. Two cards with the same rank and suit from different decks are
//! interchangeable for every rule in this crate; `deck` only exists so a
//! double deck has 104 distinct values.

use serde::{Deserialize, Serialize};

/// Card rank. Aces are low.
pub type Rank = u8;

pub const ACE: Rank = 1;
pub const JACK: Rank = 11;
pub const QUEEN: Rank = 12;
pub const KING: Rank = 13;

/// Card suit. The discriminant is the suit index (0..3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs = 0,
    Spades = 1,
    Hearts = 2,
    Diamonds = 3,
}

impl Suit {
    /// All suits in index order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Spades, Suit::Hearts, Suit::Diamonds];

    /// Get a suit from its index.
    ///
    /// Panics if `index > 3`.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index]
    }

    /// Get the suit index (0..3).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color derived from the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Hearts | Suit::Diamonds => Color::Red,
        }
    }

    fn symbol(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
        }
    }
}

/// Card color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

/// A playing card.
///
/// ## Example
///
/// ```
/// use gallery_solitaire::cards::{Card, Suit, Color, ACE};
///
/// let card = Card::new(ACE, Suit::Hearts);
/// assert_eq!(card.color(), Color::Red);
/// assert_eq!(card.to_string(), "AH");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Rank, `ACE` (1) to `KING` (13).
    pub rank: Rank,
    /// Suit.
    pub suit: Suit,
    /// Which copy of the deck this card belongs to.
    pub deck: u8,
}

impl Card {
    /// Create a card from the first deck.
    #[must_use]
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self::with_deck(rank, suit, 0)
    }

    /// Create a card from a specific deck copy.
    #[must_use]
    pub fn with_deck(rank: Rank, suit: Suit, deck: u8) -> Self {
        assert!((ACE..=KING).contains(&rank), "Rank must be 1-13, got {rank}");
        Self { rank, suit, deck }
    }

    /// Color of this card.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub fn is_ace(self) -> bool {
        self.rank == ACE
    }

    /// Same suit and rank differing by exactly `step` in either direction.
    #[must_use]
    pub fn pairs_with(self, other: Card, step: u8) -> bool {
        self.suit == other.suit && self.rank.abs_diff(other.rank) == step
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.rank {
            ACE => write!(f, "A")?,
            10 => write!(f, "T")?,
            JACK => write!(f, "J")?,
            QUEEN => write!(f, "Q")?,
            KING => write!(f, "K")?,
            r => write!(f, "{r}")?,
        }
        write!(f, "{}", self.suit.symbol())
    }
}
