//! Rules engine trait for variant implementations.
//!
//! Variants implement `RulesEngine` to define:
//! - How the table is laid out and dealt
//! - What happens when a pile empties
//! - When the game is won
//!
//! The session calls into `RulesEngine` but never interprets
//! variant-specific concepts directly.

pub mod engine;

pub use engine::RulesEngine;
