//! Card values and deck construction.
//!
//! ## Key Types
//!
//! - `Card`: rank, suit and deck copy; color is derived from the suit
//! - `Suit` / `Color`: suit index 0..3, black for clubs and spades
//! - `DeckSpec`: number of decks plus an optional rank subset
//!
//! Ranks are `u8` with `ACE = 1` and `KING = 13`.

pub mod card;
pub mod deck;

pub use card::{Card, Color, Rank, Suit, ACE, JACK, KING, QUEEN};
pub use deck::{move_to_top, DeckSpec};
