//! Game catalog for lookup by id or name.
//!
//! The `GameCatalog` is built once at startup by explicit `register` calls
//! from each variant module. There is no global registry.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::info::GameInfo;
use crate::error::CatalogError;
use crate::rules::RulesEngine;
use crate::session::{SessionConfig, Solitaire};

/// Builds a fresh rules engine for a game.
pub type EngineFactory = fn() -> Box<dyn RulesEngine>;

#[derive(Clone, Debug)]
struct Entry {
    info: GameInfo,
    factory: EngineFactory,
}

/// Registry of playable games.
///
/// ## Example
///
/// ```
/// use gallery_solitaire::catalog::GameCatalog;
/// use gallery_solitaire::session::SessionConfig;
///
/// let catalog = GameCatalog::builtin();
/// let info = catalog.find_by_name("mod-3").unwrap();
/// assert_eq!(info.id, 7);
///
/// let game = catalog.start(info.id, SessionConfig::default().with_seed(11)).unwrap();
/// assert!(!game.is_won());
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameCatalog {
    games: FxHashMap<u32, Entry>,
}

impl GameCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with every game this crate ships.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        crate::games::register_all(&mut catalog);
        catalog
    }

    /// Register a game.
    ///
    /// Panics if a game with the same id already exists.
    pub fn register(&mut self, info: GameInfo, factory: EngineFactory) {
        if self.games.contains_key(&info.id) {
            panic!("Game with id {} already registered", info.id);
        }
        debug!(id = info.id, name = %info.name, "registered game");
        self.games.insert(info.id, Entry { info, factory });
    }

    /// Get a game's metadata by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&GameInfo> {
        self.games.get(&id).map(|e| &e.info)
    }

    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.games.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Find a game by name or alternate name, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Result<&GameInfo, CatalogError> {
        self.iter()
            .find(|info| info.matches_name(name))
            .ok_or_else(|| CatalogError::UnknownName(name.to_string()))
    }

    /// All games, sorted by id.
    pub fn iter(&self) -> impl Iterator<Item = &GameInfo> {
        let mut infos: Vec<_> = self.games.values().map(|e| &e.info).collect();
        infos.sort_by_key(|info| info.id);
        infos.into_iter()
    }

    /// Build a fresh rules engine for a game.
    pub fn engine(&self, id: u32) -> Result<Box<dyn RulesEngine>, CatalogError> {
        self.games
            .get(&id)
            .map(|e| (e.factory)())
            .ok_or(CatalogError::UnknownId(id))
    }

    /// Deal a new game.
    pub fn start(&self, id: u32, config: SessionConfig) -> Result<Solitaire, CatalogError> {
        let engine = self.engine(id)?;
        Ok(Solitaire::new(engine, config))
    }
}
