//! Greedy one-ply hint cascade.
//!
//! Five move classes are tried in priority order. The first class that
//! produces anything ends the search:
//!
//! 1. Drop a card onto a foundation
//! 2. Move a singleton onto a tableau
//! 3. Move a singleton from a tableau to a row
//! 4. Move a singleton between rows
//! 5. Deal (heuristic level 2 and up)
//!
//! Targets are first-fit in declaration order. No lookahead.

use tracing::trace;

use super::candidate::{HintSet, HintTier, MoveCandidate, SCORE_DEAL};
use crate::cards::{Card, KING};
use crate::core::config::{PileId, PileKind};
use crate::core::state::GameState;
use crate::piles::{AcceptContext, Pile};
use crate::rules::RulesEngine;

const DROP_BASE: i32 = 90_000;
const TABLEAU_BASE: i32 = 80_000;
const ROW_BASE: i32 = 70_000;
const SHUFFLE_BASE: i32 = 60_000;

/// Minimum heuristic level at which dealing is suggested.
pub const DEAL_HINT_LEVEL: u8 = 2;

/// Compute the hints for `state`.
///
/// Reads the state only.
#[must_use]
pub fn compute_hints<E: RulesEngine + ?Sized>(engine: &E, state: &GameState, level: u8) -> HintSet {
    let ctx = state.accept_context();
    let mut hints = HintSet::new();

    drop_hints(state, ctx, &mut hints);

    if hints.is_empty() {
        let sources = state.groups.drop_sources.iter().copied();
        singleton_hints(state, ctx, sources, &state.groups.tableaux, HintTier::ToTableau, &mut hints);
    }

    if hints.is_empty() {
        let sources = state.groups.tableaux.iter().copied();
        singleton_hints(state, ctx, sources, &state.groups.rows, HintTier::TableauToRow, &mut hints);
    }

    if hints.is_empty() {
        row_shuffle_hints(state, ctx, &mut hints);
    }

    if hints.is_empty() && level >= DEAL_HINT_LEVEL && engine.can_deal(state) {
        trace!("suggesting deal");
        hints.add(MoveCandidate {
            score: SCORE_DEAL,
            auto: false,
            source: state.groups.talon,
            target: None,
            count: 0,
            tier: HintTier::Deal,
        });
    }

    hints
}

/// Tier 1: every drop source whose top card some foundation takes.
fn drop_hints(state: &GameState, ctx: AcceptContext, hints: &mut HintSet) {
    for &source in &state.groups.drop_sources {
        let pile = state.pile(source);
        if pile.cap.max_move == 0 {
            continue;
        }
        let Some(card) = pile.top() else {
            continue;
        };
        let run = [card];
        let Some(target) = first_accepting(state, ctx, source, &state.groups.foundations, &run) else {
            continue;
        };
        let score = DROP_BASE + tableau_bonus(pile) + rank_term(card);
        trace!(%source, %target, %card, score, "drop hint");
        hints.add(single(score, source, target, HintTier::Drop));
    }
}

/// Tiers 2 and 3: singletons that are not already home, onto the first
/// accepting target.
fn singleton_hints(
    state: &GameState,
    ctx: AcceptContext,
    sources: impl Iterator<Item = PileId>,
    targets: &[PileId],
    tier: HintTier,
    hints: &mut HintSet,
) {
    for source in sources {
        let pile = state.pile(source);
        let Some(card) = singleton(pile) else {
            continue;
        };
        let run = [card];
        let from_tableau = pile.kind == PileKind::Tableau;
        if from_tableau && pile.accepts_without_top(1, &run, ctx) {
            // already in place
            continue;
        }
        let Some(target) = first_accepting(state, ctx, source, targets, &run) else {
            continue;
        };
        let base = match tier {
            HintTier::ToTableau => TABLEAU_BASE + tableau_bonus(pile),
            _ => ROW_BASE,
        };
        let score = base + rank_term(card);
        trace!(%source, %target, %card, score, ?tier, "singleton hint");
        hints.add(single(score, source, target, tier));
    }
}

/// Tier 4: move a row's top card to another row, unless it is the row's only card.
fn row_shuffle_hints(state: &GameState, ctx: AcceptContext, hints: &mut HintSet) {
    for &source in &state.groups.rows {
        let pile = state.pile(source);
        let Some(card) = singleton(pile) else {
            continue;
        };
        if pile.len() == 1 {
            continue;
        }
        let run = [card];
        let Some(target) = first_accepting(state, ctx, source, &state.groups.rows, &run) else {
            continue;
        };
        let score = SHUFFLE_BASE + rank_term(card);
        trace!(%source, %target, %card, score, "row shuffle hint");
        hints.add(single(score, source, target, HintTier::RowShuffle));
    }
}

fn first_accepting(
    state: &GameState,
    ctx: AcceptContext,
    source: PileId,
    targets: &[PileId],
    run: &[Card],
) -> Option<PileId> {
    targets
        .iter()
        .copied()
        .filter(|&target| target != source)
        .find(|&target| state.pile(target).accepts(Some(source), run, ctx))
}

/// The pile's movable run if it is exactly one card.
fn singleton(pile: &Pile) -> Option<Card> {
    match pile.movable_run().as_slice() {
        [card] => Some(*card),
        _ => None,
    }
}

/// Lower pinned base ranks score a little higher.
fn tableau_bonus(pile: &Pile) -> i32 {
    match (pile.kind, pile.cap.base_rank) {
        (PileKind::Tableau, Some(base)) => 5 - i32::from(base),
        _ => 0,
    }
}

fn rank_term(card: Card) -> i32 {
    100 * (i32::from(KING) - i32::from(card.rank))
}

fn single(score: i32, source: PileId, target: PileId, tier: HintTier) -> MoveCandidate {
    debug_assert_ne!(source, target, "hint onto its own source");
    MoveCandidate {
        score,
        auto: true,
        source,
        target: Some(target),
        count: 1,
        tier,
    }
}
