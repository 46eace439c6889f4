//! User intents and the output regions they render into.

use std::fmt;

use quakelog_api_client::LogFile;

/// A trimmed, non-empty game identifier taken from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameId(String);

impl GameId {
    /// Returns `None` for empty or whitespace-only input.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Output region an action renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    AllGames,
    GameById,
    Upload,
    DeleteAll,
    PlayerRanking,
}

impl Region {
    pub fn label(self) -> &'static str {
        match self {
            Region::AllGames => "games",
            Region::GameById => "game",
            Region::Upload => "upload",
            Region::DeleteAll => "delete-all",
            Region::PlayerRanking => "ranking",
        }
    }
}

/// One user intent. Raw input is carried as typed; validation happens in
/// the mediator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    LoadAllGames,
    GetGame { id: String },
    DeleteGame { id: String },
    UploadLog { file: Option<LogFile> },
    DeleteAllGames,
    LoadPlayerRanking,
}

impl Action {
    pub fn region(&self) -> Region {
        match self {
            Action::LoadAllGames => Region::AllGames,
            Action::GetGame { .. } | Action::DeleteGame { .. } => Region::GameById,
            Action::UploadLog { .. } => Region::Upload,
            Action::DeleteAllGames => Region::DeleteAll,
            Action::LoadPlayerRanking => Region::PlayerRanking,
        }
    }

    /// Whether a success must be followed by a refresh of the game list.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Action::DeleteGame { .. } | Action::UploadLog { .. } | Action::DeleteAllGames
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_id_trims_input() {
        let id = GameId::parse("  42 ").unwrap();
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn game_id_rejects_blank() {
        assert!(GameId::parse("").is_none());
        assert!(GameId::parse(" \t ").is_none());
    }

    #[test]
    fn mutations_are_flagged() {
        assert!(Action::DeleteGame { id: "1".into() }.is_mutation());
        assert!(Action::UploadLog { file: None }.is_mutation());
        assert!(Action::DeleteAllGames.is_mutation());
        assert!(!Action::LoadAllGames.is_mutation());
        assert!(!Action::GetGame { id: "1".into() }.is_mutation());
        assert!(!Action::LoadPlayerRanking.is_mutation());
    }

    #[test]
    fn actions_map_to_regions() {
        assert_eq!(Action::LoadAllGames.region(), Region::AllGames);
        assert_eq!(Action::GetGame { id: "1".into() }.region(), Region::GameById);
        assert_eq!(Action::DeleteGame { id: "1".into() }.region(), Region::GameById);
        assert_eq!(Action::UploadLog { file: None }.region(), Region::Upload);
        assert_eq!(Action::DeleteAllGames.region(), Region::DeleteAll);
        assert_eq!(Action::LoadPlayerRanking.region(), Region::PlayerRanking);
    }
}
