//! Game catalog: descriptors and lookup.
//!
//! ## Key Types
//!
//! - `GameInfo`: id, names, deck and classification for one game
//! - `GameCatalog`: explicit registry queried by id or name

pub mod info;
pub mod registry;

pub use info::{GameInfo, GameType, SkillLevel};
pub use registry::{EngineFactory, GameCatalog};
