//! Game implementations.
//!
//! Each variant implements `RulesEngine` and registers itself with a
//! `GameCatalog` through `register_all`.

pub mod gallery;
pub mod olympus;

use tracing::debug;

use crate::catalog::GameCatalog;
use crate::core::config::PileId;
use crate::core::state::{GameState, StateMode};

pub use gallery::{GreatWheel, PictureGallery};
pub use olympus::MountOlympus;

/// Register every game in this crate.
pub fn register_all(catalog: &mut GameCatalog) {
    gallery::picture_gallery::register(catalog);
    gallery::great_wheel::register(catalog);
    olympus::register(catalog);
}

/// Deal one talon card onto `pile` if it is an empty row.
///
/// Does nothing unless the state is in play mode.
pub(crate) fn refill_row_from_talon(state: &mut GameState, pile: PileId) {
    if state.mode() != StateMode::Play {
        return;
    }
    if state.talon().is_empty() || !state.groups.rows.contains(&pile) || !state.pile(pile).is_empty() {
        return;
    }
    let mut guard = state.enter_state(StateMode::Fill);
    let dealt = guard.deal_row(&[pile]);
    debug!(%pile, dealt, "refilled row");
}
