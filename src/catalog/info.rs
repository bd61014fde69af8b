//! Game descriptors.

use serde::{Deserialize, Serialize};

use crate::cards::{DeckSpec, Rank};

/// Game family, as shown in game selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameType {
    OneDeck,
    TwoDeck,
}

/// How much a game depends on luck versus play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Luck,
    MostlyLuck,
    Balanced,
    MostlySkill,
    Skill,
}

/// Metadata for one registered game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    pub id: u32,
    pub name: String,
    pub alt_names: Vec<String>,
    pub game_type: GameType,
    pub decks: u8,
    /// Redeals allowed; 0 for a single pass through the talon.
    pub redeals: u8,
    pub skill_level: SkillLevel,
    /// Ranks in the deck when not the full thirteen.
    pub ranks: Option<Vec<Rank>>,
}

impl GameInfo {
    /// A balanced double-deck game with no redeals.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            alt_names: Vec::new(),
            game_type: GameType::TwoDeck,
            decks: 2,
            redeals: 0,
            skill_level: SkillLevel::Balanced,
            ranks: None,
        }
    }

    #[must_use]
    pub fn with_alt_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alt_names = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_ranks(mut self, ranks: impl IntoIterator<Item = Rank>) -> Self {
        self.ranks = Some(ranks.into_iter().collect());
        self
    }

    #[must_use]
    pub fn with_skill_level(mut self, level: SkillLevel) -> Self {
        self.skill_level = level;
        self
    }

    /// Deck this game is played with.
    #[must_use]
    pub fn deck(&self) -> DeckSpec {
        let spec = DeckSpec::new(self.decks);
        match &self.ranks {
            Some(ranks) => spec.with_ranks(ranks.iter().copied()),
            None => spec,
        }
    }

    /// Does `name` match the name or an alternate name, ignoring case?
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        std::iter::once(&self.name)
            .chain(&self.alt_names)
            .any(|n| n.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{ACE, QUEEN};

    #[test]
    fn test_defaults() {
        let info = GameInfo::new(7, "Picture Gallery");
        assert_eq!(info.decks, 2);
        assert_eq!(info.skill_level, SkillLevel::Balanced);
        assert_eq!(info.deck().card_count(), 104);
    }

    #[test]
    fn test_rank_subset_deck() {
        let info = GameInfo::new(397, "Great Wheel").with_ranks(ACE..=QUEEN);
        assert_eq!(info.deck().card_count(), 96);
    }

    #[test]
    fn test_matches_name() {
        let info = GameInfo::new(7, "Picture Gallery").with_alt_names(["Mod-3"]);
        assert!(info.matches_name("picture gallery"));
        assert!(info.matches_name("MOD-3"));
        assert!(!info.matches_name("Zeus"));
    }
}
