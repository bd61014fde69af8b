//! # gallery-solitaire
//!
//! Rules and hint engine for the Picture Gallery family of two-deck
//! solitaires: Picture Gallery, Great Wheel, Mount Olympus and Zeus.
//!
//! ## Design Principles
//!
//! 1. **Piles are data**: a pile's behavior is its `AcceptRule` and
//!    `Capability`, fixed at layout time. Acceptance is a pure function of
//!    a pile snapshot.
//!
//! 2. **Headless**: no rendering, animation or persistence. Deals complete
//!    synchronously.
//!
//! 3. **Cheap snapshots**: piles store cards in `im` persistent vectors, so
//!    cloning the table for undo is O(1).
//!
//! ## Modules
//!
//! - `cards`: Card values and deck construction
//! - `core`: Layout configuration, game state, actions, RNG
//! - `piles`: Runtime piles and acceptance predicates
//! - `rules`: RulesEngine trait for variant implementations
//! - `hint`: Prioritized one-ply hint cascade
//! - `games`: The four variants
//! - `catalog`: Game registry by id and name
//! - `session`: Player-facing controller with undo
//!
//! ## Example
//!
//! ```
//! use gallery_solitaire::{GameCatalog, SessionConfig};
//!
//! let catalog = GameCatalog::builtin();
//! let mut game = catalog.start(397, SessionConfig::default().with_seed(3)).unwrap();
//!
//! for hint in game.hints().iter() {
//!     assert_ne!(Some(hint.source), hint.target);
//! }
//! let outcome = game.deal().unwrap();
//! assert_eq!(outcome.cards_moved, 1);
//! ```

pub mod cards;
pub mod catalog;
pub mod core;
pub mod error;
pub mod games;
pub mod hint;
pub mod piles;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::cards::{Card, Color, DeckSpec, Rank, Suit};

pub use crate::core::{
    Action, ActionRecord,
    Capability, Layout, LayoutBuilder, PileConfig, PileGroups, PileId, PileKind,
    GameRng,
    GameState, StateGuard, StateMode,
};

pub use crate::piles::{AcceptContext, AcceptRule, Pile, PileView};

pub use crate::rules::RulesEngine;

pub use crate::hint::{compute_hints, HintSet, HintTier, MoveCandidate};

pub use crate::games::{GreatWheel, MountOlympus, PictureGallery};

pub use crate::catalog::{GameCatalog, GameInfo, GameType, SkillLevel};

pub use crate::session::{MoveOutcome, SessionConfig, Solitaire};

pub use crate::error::{CatalogError, MoveError, SnapshotError};
