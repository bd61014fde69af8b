//! Table layout configuration.
//!
//! Variants describe their table at startup by providing:
//! - `Capability`: the rule descriptor for a pile (base rank, step, limits)
//! - `PileConfig`: a pile's category, capability and acceptance rule
//! - `Layout`: every pile plus the stack groups the hint engine scans
//!
//! Piles are created once from the layout and persist for the whole game.

use serde::{Deserialize, Serialize};

use crate::cards::{Rank, Suit};
use crate::piles::AcceptRule;

/// No limit on a capability count.
pub const UNLIMITED: usize = usize::MAX;

/// Pile identifier. Index into the table's pile list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PileId(pub u16);

impl PileId {
    /// Create a new pile ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pile({})", self.0)
    }
}

/// Pile category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    /// Accumulates cards in completed-set order; only grows.
    Foundation,
    /// Pinned to a fixed base rank for its lifetime.
    Tableau,
    /// General playable pile, unlocked under variant rules.
    Row,
    /// Undealt cards.
    Talon,
    /// Holding pile between talon and rows.
    Waste,
}

/// Rule descriptor for a pile.
///
/// `dir` is the rank step between consecutive cards (negative builds down,
/// zero builds by equal rank). `None` for `suit` or `base_rank` means any.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    pub suit: Option<Suit>,
    pub base_rank: Option<Rank>,
    pub dir: i8,
    /// Longest run the pile accepts in one move.
    pub max_accept: usize,
    /// Longest run that may be moved off the pile.
    pub max_move: usize,
    /// Most cards the pile may ever hold.
    pub max_cards: usize,
}

impl Default for Capability {
    fn default() -> Self {
        Self {
            suit: None,
            base_rank: None,
            dir: 0,
            max_accept: 1,
            max_move: 1,
            max_cards: UNLIMITED,
        }
    }
}

impl Capability {
    /// Foundation defaults: nothing moves off, at most one suit's worth of cards.
    #[must_use]
    pub fn foundation() -> Self {
        Self {
            max_move: 0,
            max_cards: 13,
            ..Self::default()
        }
    }

    /// Talon defaults: accepts nothing, moves nothing.
    #[must_use]
    pub fn talon() -> Self {
        Self {
            max_accept: 0,
            max_move: 0,
            ..Self::default()
        }
    }

    /// Waste defaults: accepts nothing from players, top card moves.
    #[must_use]
    pub fn waste() -> Self {
        Self {
            max_accept: 0,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_suit(mut self, suit: Suit) -> Self {
        self.suit = Some(suit);
        self
    }

    #[must_use]
    pub fn with_base_rank(mut self, rank: Rank) -> Self {
        self.base_rank = Some(rank);
        self
    }

    #[must_use]
    pub fn with_dir(mut self, dir: i8) -> Self {
        self.dir = dir;
        self
    }

    #[must_use]
    pub fn with_max_accept(mut self, max: usize) -> Self {
        self.max_accept = max;
        self
    }

    #[must_use]
    pub fn with_max_move(mut self, max: usize) -> Self {
        self.max_move = max;
        self
    }

    #[must_use]
    pub fn with_max_cards(mut self, max: usize) -> Self {
        self.max_cards = max;
        self
    }
}

/// Configuration for a single pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileConfig {
    pub kind: PileKind,
    pub cap: Capability,
    pub rule: AcceptRule,
}

impl PileConfig {
    /// Create a pile config with the default capability.
    #[must_use]
    pub fn new(kind: PileKind, rule: AcceptRule) -> Self {
        Self {
            kind,
            cap: Capability::default(),
            rule,
        }
    }

    /// Set the capability.
    #[must_use]
    pub fn with_cap(mut self, cap: Capability) -> Self {
        self.cap = cap;
        self
    }
}

/// Named stack groups over the pile list.
///
/// Group order is declaration order, which the hint engine relies on for
/// first-fit target selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileGroups {
    pub foundations: Vec<PileId>,
    pub tableaux: Vec<PileId>,
    pub rows: Vec<PileId>,
    pub talon: PileId,
    pub waste: Option<PileId>,
    /// Piles whose top card may be dropped or moved by the hint engine.
    pub drop_sources: Vec<PileId>,
}

/// Complete table layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub piles: Vec<PileConfig>,
    pub groups: PileGroups,
}

/// Builder that assigns pile IDs in declaration order.
///
/// ## Example
///
/// ```
/// use gallery_solitaire::core::{LayoutBuilder, PileConfig, PileKind, Capability};
/// use gallery_solitaire::piles::AcceptRule;
///
/// let mut builder = LayoutBuilder::new();
/// let row = builder.add(PileConfig::new(PileKind::Row, AcceptRule::GalleryRow));
/// builder.add(PileConfig::new(PileKind::Talon, AcceptRule::Never).with_cap(Capability::talon()));
/// let layout = builder.build();
///
/// assert_eq!(layout.groups.rows, vec![row]);
/// assert_eq!(layout.groups.drop_sources, vec![row]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LayoutBuilder {
    piles: Vec<PileConfig>,
}

impl LayoutBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pile and return its ID.
    pub fn add(&mut self, pile: PileConfig) -> PileId {
        let id = PileId::new(self.piles.len() as u16);
        self.piles.push(pile);
        id
    }

    /// Build the layout. Drop sources are tableaux, then rows, then waste.
    ///
    /// Panics if the layout has no talon or more than one talon/waste.
    #[must_use]
    pub fn build(self) -> Layout {
        let ids_of = |kind: PileKind| -> Vec<PileId> {
            self.piles
                .iter()
                .enumerate()
                .filter(|(_, p)| p.kind == kind)
                .map(|(i, _)| PileId::new(i as u16))
                .collect()
        };

        let talons = ids_of(PileKind::Talon);
        assert!(talons.len() == 1, "Layout needs exactly one talon");
        let wastes = ids_of(PileKind::Waste);
        assert!(wastes.len() <= 1, "Layout supports at most one waste");

        let tableaux = ids_of(PileKind::Tableau);
        let rows = ids_of(PileKind::Row);
        let waste = wastes.first().copied();

        let mut drop_sources = tableaux.clone();
        drop_sources.extend(&rows);
        drop_sources.extend(waste);

        let groups = PileGroups {
            foundations: ids_of(PileKind::Foundation),
            tableaux,
            rows,
            talon: talons[0],
            waste,
            drop_sources,
        };

        Layout {
            piles: self.piles,
            groups,
        }
    }
}
