//! Deal sequences and win conditions of the four variants.

use gallery_solitaire::cards::{Card, Suit, ACE, KING};
use gallery_solitaire::core::{GameState, PileId, PileKind};
use gallery_solitaire::games::{GreatWheel, MountOlympus, PictureGallery};
use gallery_solitaire::rules::RulesEngine;
use gallery_solitaire::session::{SessionConfig, Solitaire};

fn place(state: &mut GameState, pile: PileId, cards: &[Card]) {
    for &card in cards {
        state.load_talon(vec![card]);
        state.deal_row(&[pile]);
    }
}

fn aces() -> Vec<Card> {
    (0..2)
        .flat_map(|deck| Suit::ALL.map(|suit| Card::with_deck(ACE, suit, deck)))
        .collect()
}

fn won_picture_gallery() -> GameState {
    let mut state = GameState::new(&PictureGallery.layout());
    let foundation = state.groups.foundations[0];
    place(&mut state, foundation, &aces());

    let tableaux = state.groups.tableaux.clone();
    for (i, &id) in tableaux.iter().enumerate() {
        let base = [4, 3, 2][i / 8];
        let suit = Suit::from_index(i % 4);
        let cards: Vec<Card> = (0..4).map(|k| Card::new(base + 3 * k, suit)).collect();
        place(&mut state, id, &cards);
    }
    state
}

fn won_mount_olympus() -> GameState {
    let mut state = GameState::new(&MountOlympus::mount_olympus().layout());
    let foundations = state.groups.foundations.clone();
    for (i, &id) in foundations.iter().enumerate() {
        let base = if i < 8 { ACE } else { ACE + 1 };
        let suit = Suit::from_index((i % 8) / 2);
        let cards: Vec<Card> = (base..=KING).step_by(2).map(|r| Card::new(r, suit)).collect();
        place(&mut state, id, &cards);
    }
    state
}

#[test]
fn test_picture_gallery_win() {
    let state = won_picture_gallery();
    assert_eq!(state.card_count(), 8 + 24 * 4);
    assert!(PictureGallery.is_won(&state));
}

#[test]
fn test_picture_gallery_needs_every_tableau() {
    let mut state = won_picture_gallery();
    let tableau = state.groups.tableaux[5];
    let row = state.groups.rows[0];
    state.move_cards(tableau, row, 1);
    assert!(!PictureGallery.is_won(&state));
}

#[test]
fn test_great_wheel_win() {
    let mut state = GameState::new(&GreatWheel.layout());
    let foundation = state.groups.foundations[0];
    place(&mut state, foundation, &aces());
    // Tableau cards do not matter; rows, talon and waste must be empty.
    let tableau = state.groups.tableaux[0];
    place(&mut state, tableau, &[Card::new(3, Suit::Clubs)]);
    assert!(GreatWheel.is_won(&state));

    let row = state.groups.rows[0];
    place(&mut state, row, &[Card::new(7, Suit::Clubs)]);
    assert!(!GreatWheel.is_won(&state));
}

#[test]
fn test_mount_olympus_win() {
    let state = won_mount_olympus();
    assert_eq!(state.card_count(), 104);
    assert_eq!(state.cards_in(PileKind::Foundation), 104);
    assert!(MountOlympus::mount_olympus().is_won(&state));
    assert!(MountOlympus::zeus().is_won(&state));
}

/// A won state stays won through a save and load.
#[test]
fn test_win_survives_snapshot() {
    let cases: Vec<(Box<dyn RulesEngine>, GameState)> = vec![
        (Box::new(PictureGallery), won_picture_gallery()),
        (Box::new(MountOlympus::mount_olympus()), won_mount_olympus()),
    ];

    for (engine, state) in cases {
        assert!(engine.is_won(&state));
        let bytes = state.to_bytes().unwrap();
        let restored = GameState::from_bytes(&bytes).unwrap();
        assert_eq!(restored, state);
        assert!(engine.is_won(&restored), "{}", engine.name());
        assert!(engine.is_won(&state));
    }
}

/// The shuffle hook lifts Aces and Twos so the foundation deal uses
/// exactly sixteen cards before any row is dealt.
#[test]
fn test_mount_olympus_deal_order() {
    for seed in [0, 1, 99, 12345] {
        let game = Solitaire::new(
            Box::new(MountOlympus::mount_olympus()),
            SessionConfig::default().with_seed(seed),
        );
        let state = game.state();

        assert_eq!(state.cards_in(PileKind::Foundation), 16);
        for &id in &state.groups.foundations {
            let pile = state.pile(id);
            assert_eq!(pile.len(), 1);
            assert_eq!(pile.bottom().map(|c| c.rank), pile.cap.base_rank);
            assert_eq!(pile.bottom().map(|c| c.suit), pile.cap.suit);
        }
        // Rows only hold cards above Two.
        for &id in &state.groups.rows {
            assert!(state.pile(id).cards().iter().all(|c| c.rank > 2));
        }
        assert_eq!(state.card_count(), 104);
    }
}

#[test]
fn test_zeus_deal() {
    let game = Solitaire::new(Box::new(MountOlympus::zeus()), SessionConfig::default());
    let state = game.state();
    assert_eq!(state.cards_in(PileKind::Foundation), 16);
    assert_eq!(state.cards_in(PileKind::Row), 36);
    assert_eq!(state.talon().len(), 52);
}

#[test]
fn test_picture_gallery_deal() {
    let game = Solitaire::new(Box::new(PictureGallery), SessionConfig::default().with_seed(2));
    let state = game.state();
    assert_eq!(state.cards_in(PileKind::Tableau), 24);
    assert_eq!(state.cards_in(PileKind::Row), 8);
    assert_eq!(state.talon().len(), 72);
    assert_eq!(state.move_count(), 0);
}

#[test]
fn test_great_wheel_has_no_kings() {
    let game = Solitaire::new(Box::new(GreatWheel), SessionConfig::default().with_seed(2));
    let state = game.state();
    assert_eq!(state.card_count(), 96);
    assert!(state.piles().all(|p| p.cards().iter().all(|c| c.rank != KING)));
    assert_eq!(state.cards_in(PileKind::Row), 32);
    assert_eq!(state.cards_in(PileKind::Waste), 1);
}

#[test]
fn test_highlight_steps() {
    let pg = PictureGallery;
    let gw = GreatWheel;
    let mo = MountOlympus::mount_olympus();
    let five = Card::new(5, Suit::Hearts);

    assert!(pg.highlight_match(five, Card::new(8, Suit::Hearts)));
    assert!(!pg.highlight_match(five, Card::new(7, Suit::Hearts)));
    assert!(gw.highlight_match(five, Card::new(7, Suit::Hearts)));
    assert!(mo.highlight_match(five, Card::new(3, Suit::Hearts)));
    assert!(!mo.highlight_match(five, Card::new(3, Suit::Clubs)));
    assert!(!gw.highlight_match(Card::new(ACE, Suit::Hearts), Card::new(3, Suit::Hearts)));
}
