//! Caller-facing errors.
//!
//! Acceptance checks are plain booleans and never fail. These errors only
//! cover requests coming from outside the rules core: a player asking for an
//! illegal move, an unknown game id, or a corrupt state snapshot.

use thiserror::Error;

use crate::core::PileId;

/// Why a requested move or deal was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("{0} is not part of this layout")]
    UnknownPile(PileId),

    #[error("cannot move {0} onto itself")]
    SamePile(PileId),

    #[error("{pile} has {available} movable card(s), {requested} requested")]
    NotMovable {
        pile: PileId,
        requested: usize,
        available: usize,
    },

    #[error("{to} does not accept the card(s) from {from}")]
    Rejected { from: PileId, to: PileId },

    #[error("no cards left to deal")]
    NothingToDeal,

    #[error("the game is already won")]
    GameOver,

    #[error("nothing to undo")]
    NothingToUndo,
}

/// Game catalog lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("no game with id {0}")]
    UnknownId(u32),

    #[error("no game named {0:?}")]
    UnknownName(String),
}

/// State snapshot encode/decode failures.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot codec: {0}")]
    Codec(#[from] bincode::Error),

    #[error("snapshot is inconsistent: {0}")]
    Inconsistent(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_messages() {
        let err = MoveError::Rejected {
            from: PileId::new(3),
            to: PileId::new(0),
        };
        assert_eq!(err.to_string(), "Pile(0) does not accept the card(s) from Pile(3)");

        let err = MoveError::NotMovable {
            pile: PileId::new(1),
            requested: 2,
            available: 1,
        };
        assert_eq!(err.to_string(), "Pile(1) has 1 movable card(s), 2 requested");
    }

    #[test]
    fn test_catalog_error_messages() {
        assert_eq!(CatalogError::UnknownId(12).to_string(), "no game with id 12");
        assert_eq!(
            CatalogError::UnknownName("Klondike".into()).to_string(),
            "no game named \"Klondike\""
        );
    }
}
