//! Hint candidates and the result set.

use serde::{Deserialize, Serialize};

use crate::core::{Action, PileId};

/// Score of the "deal" pseudo-move. Lower than any real move.
pub const SCORE_DEAL: i32 = 0;

/// Priority class a candidate came from, highest priority first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HintTier {
    /// Drop a card onto a foundation.
    Drop = 1,
    /// Move a singleton onto a tableau.
    ToTableau = 2,
    /// Move a singleton from a tableau to a row.
    TableauToRow = 3,
    /// Move a singleton between rows.
    RowShuffle = 4,
    /// Deal from the talon.
    Deal = 5,
}

/// A proposed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveCandidate {
    pub score: i32,
    /// Safe to play without asking the player.
    pub auto: bool,
    pub source: PileId,
    /// `None` for a deal.
    pub target: Option<PileId>,
    /// Cards in the run; 0 for a deal.
    pub count: usize,
    pub tier: HintTier,
}

impl MoveCandidate {
    /// The action that carries out this candidate.
    #[must_use]
    pub fn action(&self) -> Action {
        match self.target {
            Some(target) => Action::Move {
                source: self.source,
                target,
                count: self.count,
            },
            None => Action::Deal,
        }
    }

    #[must_use]
    pub fn is_deal(&self) -> bool {
        self.target.is_none()
    }
}

/// Hints in the order they were found.
///
/// Only the highest score is authoritative; among equal scores the earliest
/// candidate wins.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintSet {
    hints: Vec<MoveCandidate>,
}

impl HintSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, candidate: MoveCandidate) {
        self.hints.push(candidate);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hints.len()
    }

    /// Highest-scoring candidate, earliest on ties.
    #[must_use]
    pub fn best(&self) -> Option<&MoveCandidate> {
        self.hints
            .iter()
            .reduce(|best, h| if h.score > best.score { h } else { best })
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveCandidate> {
        self.hints.iter()
    }

    /// Candidates by descending score, ties in discovery order.
    #[must_use]
    pub fn ranked(&self) -> Vec<MoveCandidate> {
        let mut ranked = self.hints.clone();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }
}

impl IntoIterator for HintSet {
    type Item = MoveCandidate;
    type IntoIter = std::vec::IntoIter<MoveCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.hints.into_iter()
    }
}
