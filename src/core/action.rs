//! Player actions.
//!
//! A solitaire turn is either a move of a contiguous run from one pile to
//! another, or a deal from the talon. Forced moves made by a variant while
//! dealing or refilling are not actions; they happen inside the action that
//! triggered them.

use serde::{Deserialize, Serialize};

use super::config::PileId;

/// A complete player action.
///
/// ## Example
///
/// ```
/// use gallery_solitaire::core::{Action, PileId};
///
/// let mv = Action::move_one(PileId::new(3), PileId::new(0));
/// assert_eq!(mv.source(), Some(PileId::new(3)));
/// assert!(!Action::Deal.is_move());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Relocate the top `count` cards of `source` onto `target`.
    Move {
        source: PileId,
        target: PileId,
        count: usize,
    },
    /// Deal from the talon.
    Deal,
}

impl Action {
    /// Move a single card.
    #[must_use]
    pub fn move_one(source: PileId, target: PileId) -> Self {
        Action::Move {
            source,
            target,
            count: 1,
        }
    }

    #[must_use]
    pub fn is_move(&self) -> bool {
        matches!(self, Action::Move { .. })
    }

    #[must_use]
    pub fn source(&self) -> Option<PileId> {
        match self {
            Action::Move { source, .. } => Some(*source),
            Action::Deal => None,
        }
    }

    #[must_use]
    pub fn target(&self) -> Option<PileId> {
        match self {
            Action::Move { target, .. } => Some(*target),
            Action::Deal => None,
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Sequence number within the game, starting at 0.
    pub sequence: u32,

    /// Cards that changed pile as a result, forced moves included.
    pub cards_moved: usize,
}

impl ActionRecord {
    #[must_use]
    pub fn new(action: Action, sequence: u32, cards_moved: usize) -> Self {
        Self {
            action,
            sequence,
            cards_moved,
        }
    }
}
