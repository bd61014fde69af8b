//! Hint engine.
//!
//! `compute_hints` reads a `GameState` and returns scored move candidates.
//! It never mutates the table. Higher scores are better; the deal
//! pseudo-move scores below every real move.

pub mod candidate;
pub mod engine;

pub use candidate::{HintSet, HintTier, MoveCandidate, SCORE_DEAL};
pub use engine::{compute_hints, DEAL_HINT_LEVEL};
