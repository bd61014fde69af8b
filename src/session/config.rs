//! Session configuration parameters.

use serde::{Deserialize, Serialize};

/// Session configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Game number. Same seed, same deal.
    pub seed: u64,

    /// Heuristic level for `hints` (0 = moves only, 2+ also suggests dealing).
    pub hint_level: u8,

    /// Drop cards to the foundations automatically after every action.
    pub auto_drop: bool,

    /// Number of undo steps kept (0 = undo disabled).
    pub undo_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            hint_level: 0,
            auto_drop: false,
            undo_limit: 256,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_hint_level(mut self, level: u8) -> Self {
        self.hint_level = level;
        self
    }

    #[must_use]
    pub fn with_auto_drop(mut self, enabled: bool) -> Self {
        self.auto_drop = enabled;
        self
    }

    #[must_use]
    pub fn with_undo_limit(mut self, limit: usize) -> Self {
        self.undo_limit = limit;
        self
    }
}
