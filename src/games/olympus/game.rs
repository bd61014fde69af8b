//! Mount Olympus and Zeus.

use tracing::info;

use crate::cards::{move_to_top, Card, DeckSpec, Suit, ACE};
use crate::catalog::{GameCatalog, GameInfo};
use crate::core::config::{Capability, Layout, LayoutBuilder, PileConfig, PileId, PileKind};
use crate::core::state::GameState;
use crate::games::refill_row_from_talon;
use crate::piles::AcceptRule;
use crate::rules::RulesEngine;

pub const MOUNT_OLYMPUS_ID: u32 = 398;
pub const ZEUS_ID: u32 = 399;

/// Foundations per base rank: one per suit per deck.
const FOUNDATIONS_PER_BASE: usize = 8;
const ROWS: usize = 9;

/// Builds up and down in suit by twos.
const STEP: i8 = 2;

/// Mount Olympus family rules.
///
/// Sixteen foundations, one per suit per deck for each of Ace and Two, build
/// up in suit by twos (odd and even ranks). Nine rows build down in suit by
/// twos. The talon deals one card to every row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountOlympus {
    /// Rows dealt after the foundations.
    start_rows: usize,
    name: &'static str,
}

impl MountOlympus {
    #[must_use]
    pub const fn mount_olympus() -> Self {
        Self {
            start_rows: 1,
            name: "Mount Olympus",
        }
    }

    /// Zeus: same table, four rows dealt at the start.
    #[must_use]
    pub const fn zeus() -> Self {
        Self {
            start_rows: 4,
            name: "Zeus",
        }
    }
}

impl Default for MountOlympus {
    fn default() -> Self {
        Self::mount_olympus()
    }
}

impl RulesEngine for MountOlympus {
    fn name(&self) -> &'static str {
        self.name
    }

    fn deck(&self) -> DeckSpec {
        DeckSpec::new(2)
    }

    fn layout(&self) -> Layout {
        let mut builder = LayoutBuilder::new();
        for base in [ACE, ACE + 1] {
            for i in 0..FOUNDATIONS_PER_BASE {
                builder.add(
                    PileConfig::new(PileKind::Foundation, AcceptRule::SuitFoundation).with_cap(
                        Capability::foundation()
                            .with_suit(Suit::from_index(i / 2))
                            .with_base_rank(base)
                            .with_dir(STEP),
                    ),
                );
            }
        }
        for _ in 0..ROWS {
            builder.add(
                PileConfig::new(PileKind::Row, AcceptRule::SuitRow)
                    .with_cap(Capability::default().with_dir(-STEP)),
            );
        }
        builder.add(PileConfig::new(PileKind::Talon, AcceptRule::Never).with_cap(Capability::talon()));
        builder.build()
    }

    /// Aces and Twos go on top, dealt in (rank, suit) order so each lands on
    /// its own foundation.
    fn shuffle_hook(&self, deck: &mut Vec<Card>) {
        move_to_top(deck, |c| c.rank <= ACE + 1, |c| (c.rank, c.suit));
    }

    fn start_game(&self, state: &mut GameState) {
        let foundations = state.groups.foundations.clone();
        state.deal_row(&foundations);
        for _ in 0..self.start_rows {
            self.deal(state);
        }
        info!(game = self.name, talon = state.talon().len(), "dealt");
    }

    fn deal(&self, state: &mut GameState) -> usize {
        let rows = state.groups.rows.clone();
        state.deal_row(&rows)
    }

    fn fill_stack(&self, state: &mut GameState, pile: PileId) {
        refill_row_from_talon(state, pile);
    }

    fn is_won(&self, state: &GameState) -> bool {
        state.cards_in(PileKind::Foundation) == state.card_count()
    }

    fn highlight_match(&self, a: Card, b: Card) -> bool {
        !a.is_ace() && !b.is_ace() && a.pairs_with(b, STEP.unsigned_abs())
    }
}

pub fn register(catalog: &mut GameCatalog) {
    catalog.register(GameInfo::new(MOUNT_OLYMPUS_ID, "Mount Olympus"), mount_olympus);
    catalog.register(GameInfo::new(ZEUS_ID, "Zeus"), zeus);
}

fn mount_olympus() -> Box<dyn RulesEngine> {
    Box::new(MountOlympus::mount_olympus())
}

fn zeus() -> Box<dyn RulesEngine> {
    Box::new(MountOlympus::zeus())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    fn dealt(game: MountOlympus, seed: u64) -> GameState {
        let mut deck = game.deck().build();
        GameRng::new(seed).shuffle(&mut deck);
        game.shuffle_hook(&mut deck);
        let mut state = GameState::new(&game.layout());
        state.load_talon(deck);
        game.start_game(&mut state);
        state
    }

    #[test]
    fn test_foundations_get_aces_and_twos() {
        let state = dealt(MountOlympus::mount_olympus(), 3);

        assert_eq!(state.cards_in(PileKind::Foundation), 16);
        for (i, &id) in state.groups.foundations.iter().enumerate() {
            let pile = state.pile(id);
            let card = pile.top().unwrap();
            assert_eq!(pile.len(), 1);
            assert_eq!(card.rank, if i < 8 { ACE } else { ACE + 1 });
            assert_eq!(Some(card.suit), pile.cap.suit);
        }
        assert!(state.groups.rows.iter().all(|&id| state.pile(id).len() == 1));
        assert_eq!(state.talon().len(), 104 - 16 - 9);
    }

    #[test]
    fn test_zeus_deals_four_rows() {
        let state = dealt(MountOlympus::zeus(), 3);
        assert!(state.groups.rows.iter().all(|&id| state.pile(id).len() == 4));
        assert_eq!(state.talon().len(), 104 - 16 - 36);
    }

    #[test]
    fn test_foundation_builds_by_two_in_suit() {
        let state = dealt(MountOlympus::mount_olympus(), 9);
        let ace_clubs = state.groups.foundations[0];
        let two_clubs = state.groups.foundations[8];

        assert!(state.accepts_cards(ace_clubs, None, &[Card::new(3, Suit::Clubs)]));
        assert!(!state.accepts_cards(ace_clubs, None, &[Card::new(3, Suit::Spades)]));
        assert!(!state.accepts_cards(ace_clubs, None, &[Card::new(4, Suit::Clubs)]));
        assert!(state.accepts_cards(two_clubs, None, &[Card::new(4, Suit::Clubs)]));
    }

    #[test]
    fn test_not_won_with_cards_in_play() {
        let state = dealt(MountOlympus::mount_olympus(), 1);
        assert!(!MountOlympus::mount_olympus().is_won(&state));
    }
}
