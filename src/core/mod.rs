//! Core engine types: layout configuration, state, actions, RNG.
//!
//! This module is variant-agnostic. Variants describe their table through
//! `Layout` and drive the state through its forced primitives.

pub mod action;
pub mod config;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{Capability, Layout, LayoutBuilder, PileConfig, PileGroups, PileId, PileKind, UNLIMITED};
pub use rng::GameRng;
pub use state::{GameState, StateGuard, StateMode};
