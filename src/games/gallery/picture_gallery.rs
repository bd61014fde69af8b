//! Picture Gallery.
//!
//! Three rows of eight tableaux pinned to 4s, 3s and 2s build up in suit by
//! threes (4-7-10-K, 3-6-9-Q, 2-5-8-J). Aces go to a single foundation. Each
//! deal puts one card on every row; rows only take cards back once the
//! talon is empty.

use tracing::info;

use super::layout::{GalleryTable, FOUNDATION_CARDS};
use crate::cards::{Card, DeckSpec};
use crate::catalog::{GameCatalog, GameInfo};
use crate::core::config::{Layout, PileId};
use crate::core::state::GameState;
use crate::games::refill_row_from_talon;
use crate::piles::AcceptRule;
use crate::rules::RulesEngine;

pub const ID: u32 = 7;

/// Cards on a finished tableau.
const TABLEAU_CARDS: usize = 4;

const TABLE: GalleryTable = GalleryTable {
    tableau_bases: &[4, 3, 2],
    dir: 3,
    waste: false,
    foundation_rule: AcceptRule::RankFoundation,
    row_rule: AcceptRule::GalleryRow,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct PictureGallery;

impl RulesEngine for PictureGallery {
    fn name(&self) -> &'static str {
        "Picture Gallery"
    }

    fn deck(&self) -> DeckSpec {
        DeckSpec::new(2)
    }

    fn layout(&self) -> Layout {
        TABLE.layout()
    }

    fn start_game(&self, state: &mut GameState) {
        let tableaux = state.groups.tableaux.clone();
        state.deal_row(&tableaux);
        self.deal(state);
        info!(talon = state.talon().len(), "picture gallery dealt");
    }

    fn deal(&self, state: &mut GameState) -> usize {
        let rows = state.groups.rows.clone();
        state.deal_row(&rows)
    }

    fn fill_stack(&self, state: &mut GameState, pile: PileId) {
        refill_row_from_talon(state, pile);
    }

    fn is_won(&self, state: &GameState) -> bool {
        let foundation = state.groups.foundations[0];
        state.pile(foundation).len() == FOUNDATION_CARDS
            && state
                .groups
                .tableaux
                .iter()
                .all(|&id| state.pile(id).len() == TABLEAU_CARDS)
    }

    fn highlight_match(&self, a: Card, b: Card) -> bool {
        !a.is_ace() && !b.is_ace() && a.pairs_with(b, 3)
    }
}

pub fn register(catalog: &mut GameCatalog) {
    catalog.register(
        GameInfo::new(ID, "Picture Gallery").with_alt_names(["Die Bildgallerie", "Mod-3"]),
        engine,
    );
}

fn engine() -> Box<dyn RulesEngine> {
    Box::new(PictureGallery)
}
