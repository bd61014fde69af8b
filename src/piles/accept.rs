//! Stack-acceptance predicates.
//!
//! Every pile carries an `AcceptRule` selecting one algorithm from a closed
//! set. All rules run the shared base check first and reject if it fails, so
//! each rule is a strict refinement of the base check.
//!
//! Predicates work on a `PileView` rather than the pile itself. A view is an
//! immutable snapshot of the few things the rules look at (length, bottom
//! card, top card), which also lets callers ask "would this pile accept its
//! own top card if that card were not there" without building a shadow pile.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::config::Capability;

/// Acceptance algorithm for a pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AcceptRule {
    /// Talon and waste: players never drop cards here.
    Never,
    /// Build by rank step regardless of suit (Aces-only foundation with `dir = 0`).
    RankFoundation,
    /// `RankFoundation` where each card must differ in color from the one below.
    AlternateColorFoundation,
    /// Build in suit by `dir`.
    SuitFoundation,
    /// Build in suit by `dir`, and the bottom card must be the pinned base rank.
    PinnedTableau,
    /// Accepts only while empty, and only once the talon is exhausted.
    GalleryRow,
    /// Once the talon is exhausted: empty, or one rank below the top card in suit.
    WheelRow,
    /// Build in suit by `dir`; any card on an empty pile unless a base rank is set.
    SuitRow,
}

/// Immutable snapshot of a pile's contents as seen by the acceptance rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PileView {
    pub len: usize,
    pub bottom: Option<Card>,
    pub top: Option<Card>,
}

impl PileView {
    /// View of the full pile.
    #[must_use]
    pub fn of(cards: &Vector<Card>) -> Self {
        Self::without_top(cards, 0)
    }

    /// View of the pile as if its top `n` cards were removed.
    #[must_use]
    pub fn without_top(cards: &Vector<Card>, n: usize) -> Self {
        let len = cards.len().saturating_sub(n);
        if len == 0 {
            return Self::default();
        }
        Self {
            len,
            bottom: cards.front().copied(),
            top: cards.get(len - 1).copied(),
        }
    }

    /// View of a slice of cards, bottom first.
    #[must_use]
    pub fn of_slice(cards: &[Card]) -> Self {
        Self {
            len: cards.len(),
            bottom: cards.first().copied(),
            top: cards.last().copied(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Table-wide facts some rules depend on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AcceptContext {
    /// Talon has no cards left to deal.
    pub talon_empty: bool,
}

/// Would a pile with this capability, rule and contents accept `run`?
///
/// `from_self` is true when the run would come off the same pile; such a move
/// is never accepted. Pure: depends only on its arguments.
#[must_use]
pub fn accepts(
    cap: &Capability,
    rule: AcceptRule,
    view: PileView,
    from_self: bool,
    run: &[Card],
    ctx: AcceptContext,
) -> bool {
    if rule == AcceptRule::Never || !basic_accepts(cap, view, from_self, run) {
        return false;
    }
    let first = run[0];

    match rule {
        AcceptRule::Never => false,
        AcceptRule::RankFoundation => builds_by_rank(cap, view, run),
        AcceptRule::AlternateColorFoundation => {
            builds_by_rank(cap, view, run)
                && view.top.map_or(true, |top| top.color() != first.color())
        }
        AcceptRule::SuitFoundation | AcceptRule::SuitRow => builds_in_suit(cap, view, run),
        AcceptRule::PinnedTableau => {
            builds_in_suit(cap, view, run)
                && view.bottom.map_or(true, |bottom| Some(bottom.rank) == cap.base_rank)
        }
        AcceptRule::GalleryRow => view.is_empty() && ctx.talon_empty,
        AcceptRule::WheelRow => {
            ctx.talon_empty
                && view.top.map_or(true, |top| {
                    top.suit == first.suit && top.rank == first.rank + 1
                })
        }
    }
}

/// Checks shared by every rule: run size, pile size, fixed suit, base rank.
fn basic_accepts(cap: &Capability, view: PileView, from_self: bool, run: &[Card]) -> bool {
    let Some(&first) = run.first() else {
        return false;
    };
    if from_self || run.len() > cap.max_accept {
        return false;
    }
    if view.len.saturating_add(run.len()) > cap.max_cards {
        return false;
    }
    if cap.suit.is_some_and(|suit| first.suit != suit) {
        return false;
    }
    if view.is_empty() && cap.base_rank.is_some_and(|base| first.rank != base) {
        return false;
    }
    true
}

fn steps(lower: Card, upper: Card, dir: i8) -> bool {
    i16::from(lower.rank) + i16::from(dir) == i16::from(upper.rank)
}

/// Each card is `dir` ranks from the one below it, suits ignored.
fn builds_by_rank(cap: &Capability, view: PileView, run: &[Card]) -> bool {
    view.top
        .into_iter()
        .chain(run.iter().copied())
        .collect::<Vec<_>>()
        .windows(2)
        .all(|w| steps(w[0], w[1], cap.dir))
}

/// Each card is `dir` ranks from the one below it, in the same suit.
fn builds_in_suit(cap: &Capability, view: PileView, run: &[Card]) -> bool {
    view.top
        .into_iter()
        .chain(run.iter().copied())
        .collect::<Vec<_>>()
        .windows(2)
        .all(|w| w[0].suit == w[1].suit && steps(w[0], w[1], cap.dir))
}
