//! Table shared by Picture Gallery and Great Wheel.
//!
//! One Ace foundation, eight tableaux per pinned base rank, eight rows, a
//! talon and an optional waste.

use crate::cards::{Rank, ACE};
use crate::core::config::{Capability, Layout, LayoutBuilder, PileConfig, PileKind};
use crate::piles::AcceptRule;

/// Piles per tableau row and number of rows.
pub const COLUMNS: usize = 8;

/// Aces the foundation holds when complete.
pub const FOUNDATION_CARDS: usize = 8;

#[derive(Clone, Copy, Debug)]
pub struct GalleryTable {
    /// Base rank of each tableau row, top row first.
    pub tableau_bases: &'static [Rank],
    /// Rank step on the tableaux.
    pub dir: i8,
    pub waste: bool,
    pub foundation_rule: AcceptRule,
    pub row_rule: AcceptRule,
}

impl GalleryTable {
    #[must_use]
    pub fn layout(&self) -> Layout {
        let mut builder = LayoutBuilder::new();

        builder.add(
            PileConfig::new(PileKind::Foundation, self.foundation_rule).with_cap(
                Capability::foundation()
                    .with_base_rank(ACE)
                    .with_dir(0)
                    .with_max_cards(FOUNDATION_CARDS),
            ),
        );

        for &base in self.tableau_bases {
            for _ in 0..COLUMNS {
                builder.add(
                    PileConfig::new(PileKind::Tableau, AcceptRule::PinnedTableau).with_cap(
                        Capability::default()
                            .with_base_rank(base)
                            .with_dir(self.dir)
                            .with_max_accept(1),
                    ),
                );
            }
        }

        for _ in 0..COLUMNS {
            builder.add(
                PileConfig::new(PileKind::Row, self.row_rule)
                    .with_cap(Capability::default().with_max_accept(1)),
            );
        }

        builder.add(PileConfig::new(PileKind::Talon, AcceptRule::Never).with_cap(Capability::talon()));
        if self.waste {
            builder.add(PileConfig::new(PileKind::Waste, AcceptRule::Never).with_cap(Capability::waste()));
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_row_table() {
        let layout = GalleryTable {
            tableau_bases: &[4, 3, 2],
            dir: 3,
            waste: false,
            foundation_rule: AcceptRule::RankFoundation,
            row_rule: AcceptRule::GalleryRow,
        }
        .layout();

        let g = &layout.groups;
        assert_eq!(g.foundations.len(), 1);
        assert_eq!(g.tableaux.len(), 24);
        assert_eq!(g.rows.len(), 8);
        assert!(g.waste.is_none());
        assert_eq!(g.drop_sources.len(), 32);
        assert_eq!(layout.piles[g.tableaux[0].index()].cap.base_rank, Some(4));
        assert_eq!(layout.piles[g.tableaux[23].index()].cap.base_rank, Some(2));
    }

    #[test]
    fn test_waste_is_drop_source() {
        let layout = GalleryTable {
            tableau_bases: &[3, 2],
            dir: 2,
            waste: true,
            foundation_rule: AcceptRule::AlternateColorFoundation,
            row_rule: AcceptRule::WheelRow,
        }
        .layout();

        let g = &layout.groups;
        assert_eq!(g.tableaux.len(), 16);
        assert_eq!(g.drop_sources.last().copied(), g.waste);
    }
}
