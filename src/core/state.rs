//! Game state: the table and the internal mode flag.
//!
//! ## GameState
//!
//! - Every pile, in layout order, with its cards
//! - Stack groups (foundations, tableaux, rows, talon, waste, drop sources)
//! - `StateMode`: whether a forced deal or refill is in progress
//! - Action history
//!
//! Pile contents only change through the forced primitives here
//! (`deal_row`, `deal_to_waste`, `move_cards`), always as whole runs off the
//! top of a pile. Player moves are validated by the session before they get
//! this far.
//!
//! ## StateGuard
//!
//! `enter_state` returns a guard that derefs to the state and puts the
//! previous mode back when dropped, so leaving a guarded section cannot be
//! forgotten on an early return.

use std::ops::{Deref, DerefMut};

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::action::{Action, ActionRecord};
use super::config::{Layout, PileGroups, PileId, PileKind};
use crate::cards::Card;
use crate::error::SnapshotError;
use crate::piles::{AcceptContext, Pile};

/// What the controller is doing right now.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateMode {
    /// Waiting for, or applying, a player action.
    #[default]
    Play,
    /// Dealing the initial layout.
    Deal,
    /// Refilling an emptied pile. Refill callbacks must not re-enter.
    Fill,
}

/// Full game state.
///
/// Uses `im` persistent data structures, so `clone()` is O(1) and snapshots
/// for undo or lookahead are cheap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    piles: Vector<Pile>,

    /// Stack groups, in declaration order.
    pub groups: PileGroups,

    mode: StateMode,

    history: Vector<ActionRecord>,
}

impl GameState {
    /// Create the table for a layout. All piles start empty.
    #[must_use]
    pub fn new(layout: &Layout) -> Self {
        let piles = layout
            .piles
            .iter()
            .enumerate()
            .map(|(i, config)| Pile::new(PileId::new(i as u16), config))
            .collect();

        Self {
            piles,
            groups: layout.groups.clone(),
            mode: StateMode::Play,
            history: Vector::new(),
        }
    }

    // === Piles ===

    /// Get a pile. Panics on an ID that is not part of this layout.
    #[must_use]
    pub fn pile(&self, id: PileId) -> &Pile {
        &self.piles[id.index()]
    }

    /// Get a pile if the ID is part of this layout.
    #[must_use]
    pub fn get_pile(&self, id: PileId) -> Option<&Pile> {
        self.piles.get(id.index())
    }

    fn pile_mut(&mut self, id: PileId) -> &mut Pile {
        &mut self.piles[id.index()]
    }

    /// Iterate over all piles in layout order.
    pub fn piles(&self) -> impl Iterator<Item = &Pile> {
        self.piles.iter()
    }

    /// Number of piles.
    #[must_use]
    pub fn pile_count(&self) -> usize {
        self.piles.len()
    }

    #[must_use]
    pub fn talon(&self) -> &Pile {
        self.pile(self.groups.talon)
    }

    #[must_use]
    pub fn waste(&self) -> Option<&Pile> {
        self.groups.waste.map(|id| self.pile(id))
    }

    /// Total cards on the table.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.piles.iter().map(Pile::len).sum()
    }

    /// Cards held by piles of one category.
    #[must_use]
    pub fn cards_in(&self, kind: PileKind) -> usize {
        self.piles.iter().filter(|p| p.kind == kind).map(Pile::len).sum()
    }

    // === Acceptance ===

    /// Table-wide facts for the acceptance rules.
    #[must_use]
    pub fn accept_context(&self) -> AcceptContext {
        AcceptContext {
            talon_empty: self.talon().is_empty(),
        }
    }

    /// Would `target` accept `run` coming from `source`?
    #[must_use]
    pub fn accepts_cards(&self, target: PileId, source: Option<PileId>, run: &[Card]) -> bool {
        self.pile(target).accepts(source, run, self.accept_context())
    }

    // === Forced primitives ===

    /// Put a deck into the talon. The last card is the top.
    pub fn load_talon(&mut self, deck: Vec<Card>) {
        let talon = self.groups.talon;
        self.pile_mut(talon).set_cards(deck);
    }

    /// Deal one card from the talon onto each pile in `targets`, in order.
    ///
    /// Stops early when the talon runs out. Returns the number dealt.
    pub fn deal_row(&mut self, targets: &[PileId]) -> usize {
        let talon = self.groups.talon;
        let mut dealt = 0;
        for &target in targets {
            let Some(card) = self.pile_mut(talon).pop() else {
                break;
            };
            self.pile_mut(target).push(card);
            dealt += 1;
        }
        trace!(dealt, piles = targets.len(), "dealt row");
        dealt
    }

    /// Turn the top talon card onto the waste. Returns false if the talon is
    /// empty or the layout has no waste.
    pub fn deal_to_waste(&mut self) -> bool {
        let Some(waste) = self.groups.waste else {
            return false;
        };
        let talon = self.groups.talon;
        match self.pile_mut(talon).pop() {
            Some(card) => {
                self.pile_mut(waste).push(card);
                true
            }
            None => false,
        }
    }

    /// Move the top `n` cards of `source` onto `target` without any rule
    /// check. Returns the number of cards moved.
    pub fn move_cards(&mut self, source: PileId, target: PileId, n: usize) -> usize {
        debug_assert_ne!(source, target, "move onto the same pile");
        debug_assert_ne!(
            self.pile(source).kind,
            PileKind::Foundation,
            "foundations only grow"
        );
        let run = self.pile_mut(source).take_top(n);
        let moved = run.len();
        self.pile_mut(target).append(run);
        moved
    }

    // === Mode ===

    #[must_use]
    pub fn mode(&self) -> StateMode {
        self.mode
    }

    /// Enter `mode` until the returned guard is dropped.
    #[must_use = "the previous mode is restored when the guard drops"]
    pub fn enter_state(&mut self, mode: StateMode) -> StateGuard<'_> {
        let previous = std::mem::replace(&mut self.mode, mode);
        StateGuard {
            state: self,
            previous,
        }
    }

    // === History ===

    /// Record a completed player action.
    pub fn record(&mut self, action: Action, cards_moved: usize) {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord::new(action, sequence, cards_moved));
    }

    /// Action history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Number of player actions taken.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    // === Snapshots ===

    /// Encode the state with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a state produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let state: Self = bincode::deserialize(bytes)?;
        if state.get_pile(state.groups.talon).is_none() {
            return Err(SnapshotError::Inconsistent("talon id out of range"));
        }
        let groups = &state.groups;
        let in_range = groups
            .foundations
            .iter()
            .chain(&groups.tableaux)
            .chain(&groups.rows)
            .chain(&groups.drop_sources)
            .chain(groups.waste.iter())
            .all(|&id| state.get_pile(id).is_some());
        if !in_range {
            return Err(SnapshotError::Inconsistent("pile id out of range"));
        }
        if state.mode != StateMode::Play {
            return Err(SnapshotError::Inconsistent("snapshot taken outside play mode"));
        }
        Ok(state)
    }
}

/// Scoped mode change. Derefs to the game state.
pub struct StateGuard<'a> {
    state: &'a mut GameState,
    previous: StateMode,
}

impl StateGuard<'_> {
    /// Mode that will be restored on drop.
    #[must_use]
    pub fn previous(&self) -> StateMode {
        self.previous
    }
}

impl Deref for StateGuard<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.state
    }
}

impl DerefMut for StateGuard<'_> {
    fn deref_mut(&mut self) -> &mut GameState {
        self.state
    }
}

impl Drop for StateGuard<'_> {
    fn drop(&mut self) {
        self.state.mode = self.previous;
    }
}
