//! Runtime pile: configuration plus its cards.
//!
//! Cards are stored bottom first, so the top card is the last element.
//! Contents live in an `im::Vector`, making a whole-table clone O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::config::{Capability, PileConfig, PileId, PileKind};

use super::accept::{accepts, AcceptContext, AcceptRule, PileView};

/// A run of cards being moved. Runs are almost always a single card.
pub type Run = SmallVec<[Card; 4]>;

/// A pile on the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    pub id: PileId,
    pub kind: PileKind,
    pub cap: Capability,
    pub rule: AcceptRule,
    cards: Vector<Card>,
}

impl Pile {
    /// Create an empty pile from its config.
    #[must_use]
    pub fn new(id: PileId, config: &PileConfig) -> Self {
        Self {
            id,
            kind: config.kind,
            cap: config.cap,
            rule: config.rule,
            cards: Vector::new(),
        }
    }

    /// Cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    #[must_use]
    pub fn bottom(&self) -> Option<Card> {
        self.cards.front().copied()
    }

    /// Snapshot for the acceptance rules.
    #[must_use]
    pub fn view(&self) -> PileView {
        PileView::of(&self.cards)
    }

    /// The run a player may pick up from the top of this pile.
    ///
    /// Empty when the pile is empty or nothing may move off it.
    #[must_use]
    pub fn movable_run(&self) -> Run {
        let n = self.cap.max_move.min(self.cards.len());
        self.cards.skip(self.cards.len() - n).into_iter().collect()
    }

    /// Would this pile accept `run` coming from `source`?
    #[must_use]
    pub fn accepts(&self, source: Option<PileId>, run: &[Card], ctx: AcceptContext) -> bool {
        accepts(&self.cap, self.rule, self.view(), source == Some(self.id), run, ctx)
    }

    /// Would this pile, minus its own top `n` cards, accept `run`?
    ///
    /// Used to tell whether a card is already where it belongs.
    #[must_use]
    pub fn accepts_without_top(&self, n: usize, run: &[Card], ctx: AcceptContext) -> bool {
        let view = PileView::without_top(&self.cards, n);
        accepts(&self.cap, self.rule, view, false, run, ctx)
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    pub(crate) fn pop(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Remove the top `n` cards, keeping their order.
    pub(crate) fn take_top(&mut self, n: usize) -> Vector<Card> {
        let keep = self.cards.len().saturating_sub(n);
        self.cards.split_off(keep)
    }

    pub(crate) fn append(&mut self, run: Vector<Card>) {
        self.cards.append(run);
    }

    pub(crate) fn set_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards = cards.into_iter().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    const OPEN: AcceptContext = AcceptContext { talon_empty: true };

    fn row() -> Pile {
        let config = PileConfig::new(PileKind::Row, AcceptRule::SuitRow)
            .with_cap(Capability::default().with_dir(-1));
        Pile::new(PileId::new(3), &config)
    }

    #[test]
    fn test_push_pop_top() {
        let mut pile = row();
        assert!(pile.is_empty());
        assert_eq!(pile.top(), None);

        pile.push(Card::new(9, Suit::Clubs));
        pile.push(Card::new(8, Suit::Clubs));

        assert_eq!(pile.len(), 2);
        assert_eq!(pile.top(), Some(Card::new(8, Suit::Clubs)));
        assert_eq!(pile.bottom(), Some(Card::new(9, Suit::Clubs)));
        assert_eq!(pile.pop(), Some(Card::new(8, Suit::Clubs)));
        assert_eq!(pile.len(), 1);
    }

    #[test]
    fn test_movable_run() {
        let mut pile = row();
        assert!(pile.movable_run().is_empty());

        pile.push(Card::new(9, Suit::Clubs));
        pile.push(Card::new(8, Suit::Clubs));
        assert_eq!(pile.movable_run().as_slice(), &[Card::new(8, Suit::Clubs)]);

        pile.cap.max_move = 0;
        assert!(pile.movable_run().is_empty());
    }

    #[test]
    fn test_take_top_and_append() {
        let mut pile = row();
        pile.set_cards([
            Card::new(9, Suit::Clubs),
            Card::new(8, Suit::Clubs),
            Card::new(7, Suit::Clubs),
        ]);

        let taken = pile.take_top(2);
        assert_eq!(taken.len(), 2);
        assert_eq!(taken.front(), Some(&Card::new(8, Suit::Clubs)));
        assert_eq!(pile.len(), 1);

        pile.append(taken);
        assert_eq!(pile.top(), Some(Card::new(7, Suit::Clubs)));
    }

    #[test]
    fn test_accepts_rejects_self() {
        let mut pile = row();
        pile.push(Card::new(9, Suit::Clubs));
        let run = [Card::new(8, Suit::Clubs)];

        assert!(pile.accepts(Some(PileId::new(0)), &run, OPEN));
        assert!(pile.accepts(None, &run, OPEN));
        assert!(!pile.accepts(Some(pile.id), &run, OPEN));
    }

    #[test]
    fn test_accepts_without_top() {
        let mut pile = row();
        pile.push(Card::new(9, Suit::Clubs));
        pile.push(Card::new(8, Suit::Clubs));

        // The eight already sits where it belongs.
        assert!(pile.accepts_without_top(1, &[Card::new(8, Suit::Clubs)], OPEN));
        assert!(!pile.accepts_without_top(1, &[Card::new(7, Suit::Clubs)], OPEN));
    }
}
