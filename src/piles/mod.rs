//! Pile system: runtime piles and acceptance predicates.
//!
//! Piles are **layout-configured**: a variant declares each pile's category,
//! capability and acceptance rule once, and the pile keeps them for the whole
//! game. Behavior differences between variants are data (`AcceptRule`), not
//! subclasses.
//!
//! ## Key Types
//!
//! - `Pile`: category, capability, rule and cards
//! - `AcceptRule`: which acceptance algorithm applies
//! - `PileView`: immutable snapshot the predicates run against
//! - `AcceptContext`: table-wide facts (talon exhausted)

pub mod accept;
pub mod pile;

pub use accept::{accepts, AcceptContext, AcceptRule, PileView};
pub use pile::{Pile, Run};

// Re-export pile types from core for convenience
pub use crate::core::config::{Capability, PileConfig, PileId, PileKind};
