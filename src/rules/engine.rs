//! Rules engine trait for solitaire variants.
//!
//! Variants implement `RulesEngine` to define their rules:
//! - Table layout and deck
//! - Deal sequence and talon behavior
//! - Refill behavior when a pile empties
//! - Win condition and match highlighting
//!
//! Which cards a pile accepts is not part of the trait: it is data on each
//! pile (`AcceptRule` + `Capability`) chosen at layout time.

use crate::cards::{Card, DeckSpec};
use crate::core::config::{Layout, PileId};
use crate::core::state::GameState;
use crate::hint::{self, HintSet};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `start_game`: forced deals; runs with the state in `StateMode::Deal`
/// - `fill_stack`: must return immediately unless the state is in
///   `StateMode::Play`, and must enter `StateMode::Fill` for any forced
///   moves it makes
/// - `is_won`: must depend only on pile contents
pub trait RulesEngine {
    /// Display name.
    fn name(&self) -> &'static str;

    /// Cards used by this variant.
    fn deck(&self) -> DeckSpec;

    /// Piles and stack groups. Called once per game.
    fn layout(&self) -> Layout;

    /// Reorder the shuffled deck before the deal. Top of the talon is the
    /// end of the vec.
    fn shuffle_hook(&self, _deck: &mut Vec<Card>) {}

    /// Deal the opening position from a loaded talon.
    fn start_game(&self, state: &mut GameState);

    /// Are there cards the talon can still deal?
    fn can_deal(&self, state: &GameState) -> bool {
        !state.talon().is_empty()
    }

    /// Deal from the talon. Returns the number of cards that left the talon.
    fn deal(&self, state: &mut GameState) -> usize;

    /// Called after a player action for a pile that lost cards.
    fn fill_stack(&self, state: &mut GameState, pile: PileId);

    /// Is the game won?
    fn is_won(&self, state: &GameState) -> bool;

    /// Should these two cards be highlighted as related?
    fn highlight_match(&self, a: Card, b: Card) -> bool;

    /// Hint cascade for the current position.
    fn compute_hints(&self, state: &GameState, level: u8) -> HintSet {
        hint::compute_hints(self, state, level)
    }
}
