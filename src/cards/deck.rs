//! Deck construction and shuffle hooks.
//!
//! Decks are plain `Vec<Card>` with the top of the talon at the end of the
//! vec, matching how the talon pile stores its cards.

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit, ACE, KING};

/// Which cards make up a game's deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSpec {
    /// Number of full decks shuffled together.
    pub decks: u8,
    /// Ranks present in each suit. Games may drop ranks (e.g. no Kings).
    pub ranks: Vec<Rank>,
}

impl DeckSpec {
    /// Full decks with all thirteen ranks.
    #[must_use]
    pub fn new(decks: u8) -> Self {
        Self {
            decks,
            ranks: (ACE..=KING).collect(),
        }
    }

    /// Restrict the deck to a subset of ranks.
    #[must_use]
    pub fn with_ranks(mut self, ranks: impl IntoIterator<Item = Rank>) -> Self {
        self.ranks = ranks.into_iter().collect();
        self
    }

    /// Total number of cards.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.decks as usize * Suit::ALL.len() * self.ranks.len()
    }

    /// Build the unshuffled deck, ordered by deck, suit, rank.
    #[must_use]
    pub fn build(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.card_count());
        for deck in 0..self.decks {
            for suit in Suit::ALL {
                for &rank in &self.ranks {
                    cards.push(Card::with_deck(rank, suit, deck));
                }
            }
        }
        cards
    }
}

/// Lift the cards matching `select` to the top of the deck.
///
/// Lifted cards are dealt in ascending `key` order; the relative order of
/// the remaining cards is preserved.
pub fn move_to_top<K, P, F>(deck: &mut Vec<Card>, select: P, key: F)
where
    K: Ord,
    P: Fn(&Card) -> bool,
    F: Fn(&Card) -> K,
{
    let (mut lifted, rest): (Vec<Card>, Vec<Card>) = deck.iter().partition(|c| select(c));
    // Top of the talon is the end of the vec, so the first card to deal goes last.
    lifted.sort_by(|a, b| key(b).cmp(&key(a)));
    *deck = rest;
    deck.extend(lifted);
}
