//! Great Wheel.
//!
//! Picture Gallery played without Kings: two tableau rows pinned to 3s and
//! 2s build up in suit by twos, the Ace foundation alternates colors, and
//! the talon turns one card at a time onto a waste in a single pass. An
//! emptied row is topped back up with four cards through the waste, and
//! the waste is turned up again afterwards.

use tracing::{debug, info};

use super::layout::{GalleryTable, FOUNDATION_CARDS};
use crate::cards::{Card, DeckSpec, ACE, QUEEN};
use crate::catalog::{GameCatalog, GameInfo};
use crate::core::config::{Layout, PileId};
use crate::core::state::{GameState, StateMode};
use crate::piles::AcceptRule;
use crate::rules::RulesEngine;

pub const ID: u32 = 397;

/// Cards a refill tries to put on an emptied row.
pub const ROW_REFILL: usize = 4;

/// Rows dealt at the start.
const START_ROWS: usize = 4;

const TABLE: GalleryTable = GalleryTable {
    tableau_bases: &[3, 2],
    dir: 2,
    waste: true,
    foundation_rule: AcceptRule::AlternateColorFoundation,
    row_rule: AcceptRule::WheelRow,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct GreatWheel;

impl RulesEngine for GreatWheel {
    fn name(&self) -> &'static str {
        "Great Wheel"
    }

    fn deck(&self) -> DeckSpec {
        DeckSpec::new(2).with_ranks(ACE..=QUEEN)
    }

    fn layout(&self) -> Layout {
        TABLE.layout()
    }

    fn start_game(&self, state: &mut GameState) {
        let rows = state.groups.rows.clone();
        for _ in 0..START_ROWS {
            state.deal_row(&rows);
        }
        state.deal_to_waste();
        info!(talon = state.talon().len(), "great wheel dealt");
    }

    fn deal(&self, state: &mut GameState) -> usize {
        usize::from(state.deal_to_waste())
    }

    fn fill_stack(&self, state: &mut GameState, pile: PileId) {
        if state.mode() != StateMode::Play {
            return;
        }
        let Some(waste) = state.groups.waste else {
            return;
        };

        if pile == waste && state.pile(waste).is_empty() {
            state.deal_to_waste();
        }

        let has_stock = !state.talon().is_empty() || !state.pile(waste).is_empty();
        if !has_stock || !state.groups.rows.contains(&pile) || !state.pile(pile).is_empty() {
            return;
        }

        let mut guard = state.enter_state(StateMode::Fill);
        let mut filled = 0;
        for _ in 0..ROW_REFILL {
            if guard.pile(waste).is_empty() {
                guard.deal_to_waste();
            }
            if !guard.pile(waste).is_empty() {
                filled += guard.move_cards(waste, pile, 1);
            }
        }
        // The waste never sits empty while the talon has cards.
        if guard.pile(waste).is_empty() {
            guard.deal_to_waste();
        }
        debug!(%pile, filled, "refilled row");
    }

    fn is_won(&self, state: &GameState) -> bool {
        let foundation = state.groups.foundations[0];
        state.pile(foundation).len() == FOUNDATION_CARDS
            && state.talon().is_empty()
            && state.waste().map_or(true, |w| w.is_empty())
            && state.groups.rows.iter().all(|&id| state.pile(id).is_empty())
    }

    fn highlight_match(&self, a: Card, b: Card) -> bool {
        !a.is_ace() && !b.is_ace() && a.pairs_with(b, 2)
    }
}

pub fn register(catalog: &mut GameCatalog) {
    catalog.register(GameInfo::new(ID, "Great Wheel").with_ranks(ACE..=QUEEN), engine);
}

fn engine() -> Box<dyn RulesEngine> {
    Box::new(GreatWheel)
}
