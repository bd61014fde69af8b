//! Player-facing game controller.
//!
//! `Solitaire` owns a rules engine and the table. It validates player
//! requests, applies them, runs the variant's refill logic and keeps undo
//! snapshots. Snapshots are `im`-backed clones of the whole state, so each
//! one costs O(1).

use std::collections::VecDeque;

use tracing::{debug, info};

use super::config::SessionConfig;
use crate::cards::Card;
use crate::core::{Action, GameRng, GameState, PileId, StateMode};
use crate::error::{MoveError, SnapshotError};
use crate::hint::{HintSet, HintTier, MoveCandidate, DEAL_HINT_LEVEL};
use crate::rules::RulesEngine;

/// Result of a successful move or deal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Cards the player's action moved (dealt cards for a deal).
    pub cards_moved: usize,
    /// Cards dropped to the foundations automatically afterwards.
    pub auto_dropped: usize,
    /// The game is won after this action.
    pub won: bool,
}

/// A game in progress.
///
/// Generic over the rules engine; defaults to a boxed engine from the
/// catalog.
pub struct Solitaire<E: RulesEngine + ?Sized = dyn RulesEngine> {
    engine: Box<E>,
    config: SessionConfig,
    state: GameState,
    undo: VecDeque<GameState>,
}

impl<E: RulesEngine + ?Sized> Solitaire<E> {
    /// Shuffle and deal a new game.
    pub fn new(engine: Box<E>, config: SessionConfig) -> Self {
        let layout = engine.layout();
        let mut deck = engine.deck().build();
        GameRng::new(config.seed).for_context("shuffle").shuffle(&mut deck);
        engine.shuffle_hook(&mut deck);

        let mut state = GameState::new(&layout);
        state.load_talon(deck);
        {
            let mut guard = state.enter_state(StateMode::Deal);
            engine.start_game(&mut guard);
        }
        info!(game = engine.name(), seed = config.seed, "game started");

        let mut game = Self {
            engine,
            config,
            state,
            undo: VecDeque::new(),
        };
        if game.config.auto_drop {
            game.drop_all();
        }
        game
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.engine.is_won(&self.state)
    }

    #[must_use]
    pub fn highlight_match(&self, a: Card, b: Card) -> bool {
        self.engine.highlight_match(a, b)
    }

    /// Move the movable card of `source` onto `target`.
    pub fn move_cards(&mut self, source: PileId, target: PileId) -> Result<MoveOutcome, MoveError> {
        self.ensure_playing()?;
        let snapshot = self.state.clone();
        let cards_moved = self.apply_move(source, target)?;
        self.push_undo(snapshot);
        Ok(self.finish(cards_moved))
    }

    /// Deal from the talon.
    pub fn deal(&mut self) -> Result<MoveOutcome, MoveError> {
        self.ensure_playing()?;
        if !self.engine.can_deal(&self.state) {
            return Err(MoveError::NothingToDeal);
        }
        let snapshot = self.state.clone();
        let dealt = self.engine.deal(&mut self.state);
        self.state.record(Action::Deal, dealt);
        self.push_undo(snapshot);
        debug!(dealt, talon = self.state.talon().len(), "deal");
        Ok(self.finish(dealt))
    }

    /// Hints for the current position at the configured level.
    #[must_use]
    pub fn hints(&self) -> HintSet {
        self.engine.compute_hints(&self.state, self.config.hint_level)
    }

    #[must_use]
    pub fn best_hint(&self) -> Option<MoveCandidate> {
        self.hints().best().copied()
    }

    /// Play a hint.
    pub fn apply_hint(&mut self, hint: &MoveCandidate) -> Result<MoveOutcome, MoveError> {
        match hint.target {
            Some(target) => self.move_cards(hint.source, target),
            None => self.deal(),
        }
    }

    /// Play the best available move, dealing when nothing else is left.
    ///
    /// Returns the move played, or `None` when the game is won or stuck.
    pub fn demo_step(&mut self) -> Option<MoveCandidate> {
        if self.is_won() {
            return None;
        }
        let level = self.config.hint_level.max(DEAL_HINT_LEVEL);
        let hint = self.engine.compute_hints(&self.state, level).best().copied()?;
        self.apply_hint(&hint).ok()?;
        Some(hint)
    }

    /// Drop every card the hint engine would send to a foundation.
    ///
    /// Returns the number of cards dropped. One undo step covers all of them.
    pub fn auto_drop(&mut self) -> usize {
        let snapshot = self.state.clone();
        let dropped = self.drop_all();
        if dropped > 0 {
            self.push_undo(snapshot);
        }
        dropped
    }

    /// Take back the last action.
    pub fn undo(&mut self) -> Result<(), MoveError> {
        let previous = self.undo.pop_back().ok_or(MoveError::NothingToUndo)?;
        self.state = previous;
        debug!(moves = self.state.move_count(), "undo");
        Ok(())
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Encode the table for saving.
    pub fn save(&self) -> Result<Vec<u8>, SnapshotError> {
        self.state.to_bytes()
    }

    /// Replace the table with a saved one. Clears undo history.
    pub fn restore(&mut self, bytes: &[u8]) -> Result<(), SnapshotError> {
        let state = GameState::from_bytes(bytes)?;
        if state.pile_count() != self.state.pile_count() || state.groups != self.state.groups {
            return Err(SnapshotError::Inconsistent("layout does not match this game"));
        }
        self.state = state;
        self.undo.clear();
        Ok(())
    }

    fn ensure_playing(&self) -> Result<(), MoveError> {
        if self.is_won() {
            return Err(MoveError::GameOver);
        }
        Ok(())
    }

    /// Validate and apply a player move, then refill the source.
    fn apply_move(&mut self, source: PileId, target: PileId) -> Result<usize, MoveError> {
        let from = self.state.get_pile(source).ok_or(MoveError::UnknownPile(source))?;
        self.state.get_pile(target).ok_or(MoveError::UnknownPile(target))?;
        if source == target {
            return Err(MoveError::SamePile(source));
        }

        let run = from.movable_run();
        if run.is_empty() {
            return Err(MoveError::NotMovable {
                pile: source,
                requested: 1,
                available: 0,
            });
        }
        if !self.state.accepts_cards(target, Some(source), &run) {
            return Err(MoveError::Rejected { from: source, to: target });
        }

        let count = self.state.move_cards(source, target, run.len());
        self.state.record(Action::Move { source, target, count }, count);
        debug!(%source, %target, count, "move");

        self.engine.fill_stack(&mut self.state, source);
        Ok(count)
    }

    fn drop_all(&mut self) -> usize {
        let mut dropped = 0;
        while let Some((source, target)) = self.next_drop() {
            if self.apply_move(source, target).is_err() {
                break;
            }
            dropped += 1;
        }
        dropped
    }

    fn next_drop(&self) -> Option<(PileId, PileId)> {
        let hints = self.engine.compute_hints(&self.state, 0);
        let best = hints.best()?;
        if best.tier != HintTier::Drop || !best.auto {
            return None;
        }
        Some((best.source, best.target?))
    }

    fn push_undo(&mut self, snapshot: GameState) {
        if self.config.undo_limit == 0 {
            return;
        }
        self.undo.push_back(snapshot);
        while self.undo.len() > self.config.undo_limit {
            self.undo.pop_front();
        }
    }

    fn finish(&mut self, cards_moved: usize) -> MoveOutcome {
        let auto_dropped = if self.config.auto_drop { self.drop_all() } else { 0 };
        let won = self.is_won();
        if won {
            info!(game = self.engine.name(), moves = self.state.move_count(), "game won");
        }
        MoveOutcome {
            cards_moved,
            auto_dropped,
            won,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{GreatWheel, MountOlympus, PictureGallery};

    fn gallery(seed: u64) -> Solitaire<PictureGallery> {
        Solitaire::new(Box::new(PictureGallery), SessionConfig::default().with_seed(seed))
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = gallery(5);
        let b = gallery(5);
        let c = gallery(6);
        assert_eq!(a.state(), b.state());
        assert_ne!(a.state(), c.state());
        assert_eq!(a.state().mode(), StateMode::Play);
    }

    #[test]
    fn test_invalid_moves_rejected() {
        let mut game = gallery(1);
        let row = game.state().groups.rows[0];
        let foundation = game.state().groups.foundations[0];
        let talon = game.state().groups.talon;

        assert_eq!(game.move_cards(row, row), Err(MoveError::SamePile(row)));
        assert_eq!(
            game.move_cards(PileId::new(999), row),
            Err(MoveError::UnknownPile(PileId::new(999)))
        );
        assert!(matches!(
            game.move_cards(talon, row),
            Err(MoveError::NotMovable { .. })
        ));
        // Rows never accept while the talon has cards.
        let tableau = game.state().groups.tableaux[0];
        assert_eq!(
            game.move_cards(tableau, row),
            Err(MoveError::Rejected { from: tableau, to: row })
        );
        assert!(game.state().pile(foundation).is_empty());
        assert!(!game.can_undo());
    }

    #[test]
    fn test_deal_and_undo() {
        let mut game = gallery(2);
        let before = game.state().clone();

        let outcome = game.deal().unwrap();
        assert_eq!(outcome.cards_moved, 8);
        assert_eq!(game.state().move_count(), 1);

        game.undo().unwrap();
        assert_eq!(game.state(), &before);
        assert_eq!(game.undo(), Err(MoveError::NothingToUndo));
    }

    #[test]
    fn test_undo_limit_zero_disables_undo() {
        let config = SessionConfig::default().with_undo_limit(0);
        let mut game = Solitaire::new(Box::new(PictureGallery), config);
        game.deal().unwrap();
        assert!(!game.can_undo());
    }

    #[test]
    fn test_deal_until_empty() {
        let mut game = gallery(3);
        while game.deal().is_ok() {}
        assert!(game.state().talon().is_empty());
        assert_eq!(game.deal(), Err(MoveError::NothingToDeal));
    }

    #[test]
    fn test_demo_makes_progress() {
        let mut game = Solitaire::new(Box::new(GreatWheel), SessionConfig::default().with_seed(9));
        let talon = game.state().talon().len();

        let mut steps = 0;
        while steps < 50 && game.demo_step().is_some() {
            steps += 1;
        }

        assert!(steps > 0);
        assert_eq!(game.state().move_count(), steps);
        assert!(game.state().talon().len() <= talon);
    }

    #[test]
    fn test_auto_drop_on_start() {
        let config = SessionConfig::default().with_seed(4).with_auto_drop(true);
        let game = Solitaire::new(Box::new(MountOlympus::zeus()), config);
        // Nothing left on a row that a foundation would take.
        assert!(game
            .hints()
            .iter()
            .all(|hint| hint.tier != HintTier::Drop));
    }

    #[test]
    fn test_save_restore() {
        let mut game = gallery(8);
        let saved = game.save().unwrap();
        game.deal().unwrap();

        game.restore(&saved).unwrap();

        assert_eq!(game.state().move_count(), 0);
        assert!(!game.can_undo());
    }

    #[test]
    fn test_restore_rejects_other_layout() {
        let other = Solitaire::new(Box::new(GreatWheel), SessionConfig::default());
        let mut game = gallery(8);
        assert!(matches!(
            game.restore(&other.save().unwrap()),
            Err(SnapshotError::Inconsistent(_))
        ));
    }
}
