//! Game catalog tests.

use gallery_solitaire::catalog::{GameCatalog, GameInfo, GameType, SkillLevel};
use gallery_solitaire::error::CatalogError;
use gallery_solitaire::games::PictureGallery;
use gallery_solitaire::rules::RulesEngine;
use gallery_solitaire::session::SessionConfig;

#[test]
fn test_builtin_metadata() {
    let catalog = GameCatalog::builtin();
    assert_eq!(catalog.len(), 4);

    for info in catalog.iter() {
        assert_eq!(info.decks, 2);
        assert_eq!(info.redeals, 0);
        assert_eq!(info.game_type, GameType::TwoDeck);
        assert_eq!(info.skill_level, SkillLevel::Balanced);
    }

    let wheel = catalog.get(397).unwrap();
    assert_eq!(wheel.name, "Great Wheel");
    assert_eq!(wheel.ranks.as_ref().map(Vec::len), Some(12));
    assert_eq!(wheel.deck().card_count(), 96);

    let gallery = catalog.get(7).unwrap();
    assert_eq!(gallery.alt_names, vec!["Die Bildgallerie", "Mod-3"]);
}

#[test]
fn test_start_every_game() {
    let catalog = GameCatalog::builtin();
    for info in catalog.iter() {
        let game = catalog.start(info.id, SessionConfig::default().with_seed(5)).unwrap();
        assert_eq!(game.engine().name(), info.name);
        assert_eq!(game.state().card_count(), info.deck().card_count());
        assert!(!game.is_won());
    }
}

#[test]
fn test_unknown_game() {
    let catalog = GameCatalog::builtin();
    assert!(matches!(
        catalog.start(1000, SessionConfig::default()),
        Err(CatalogError::UnknownId(1000))
    ));
}

#[test]
fn test_custom_registration() {
    fn engine() -> Box<dyn RulesEngine> {
        Box::new(PictureGallery)
    }

    let mut catalog = GameCatalog::new();
    assert!(catalog.is_empty());

    catalog.register(GameInfo::new(5007, "Gallery Practice").with_alt_names(["Practice"]), engine);

    assert!(catalog.contains(5007));
    assert_eq!(catalog.find_by_name("practice").map(|i| i.id), Ok(5007));
    let game = catalog.start(5007, SessionConfig::default()).unwrap();
    assert_eq!(game.state().talon().len(), 72);
}

#[test]
fn test_info_serialization() {
    let catalog = GameCatalog::builtin();
    let info = catalog.get(397).unwrap();
    let json = serde_json::to_string(info).unwrap();
    let back: GameInfo = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, info);
}
