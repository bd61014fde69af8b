//! Playing a game: the `Solitaire` controller and its configuration.
//!
//! The controller is the only place player requests are validated. It
//! returns `MoveError` for anything the rules refuse.

pub mod config;
pub mod controller;

pub use config::SessionConfig;
pub use controller::{MoveOutcome, Solitaire};
