//! Mediator: turns user actions into API calls and display results.
//!
//! Every action shows a pending message on its region, issues at most one
//! request, and shows exactly one final [`DisplayResult`]. Successful
//! mutations are followed by one `GET /games` refresh of the game list.

use std::sync::Arc;

use quakelog_api_client::LogFile;
use tracing::{debug, info, warn};

use crate::action::{Action, GameId, Region};
use crate::api::GamesApi;
use crate::confirm::Confirm;
use crate::display::{DisplayResult, NO_GAMES_FOUND, NO_RANKING_DATA, format_ranking};
use crate::error::ActionError;
use crate::sink::Outputs;

const ENTER_GAME_ID: &str = "Please enter a Game ID.";
const ENTER_GAME_ID_TO_DELETE: &str = "Please enter a Game ID to delete.";
const SELECT_LOG_FILE: &str = "Please select a log file to upload.";

const GAME_DELETED: &str = "Game deleted successfully.";
const FILE_UPLOADED: &str = "File uploaded successfully.";
const ALL_GAMES_DELETED: &str = "All games deleted successfully.";

const DELETE_ALL_PROMPT: &str =
    "Are you sure you want to delete ALL games? This action cannot be undone.";

/// Mediates between user intents and the game-log backend.
pub struct Mediator {
    api: Arc<dyn GamesApi>,
    confirmer: Box<dyn Confirm>,
    outputs: Outputs,
}

impl Mediator {
    pub fn new(api: Arc<dyn GamesApi>, confirmer: Box<dyn Confirm>, outputs: Outputs) -> Self {
        Self {
            api,
            confirmer,
            outputs,
        }
    }

    /// Runs one user action.
    ///
    /// Returns `None` when the user declined a confirmation; nothing was
    /// sent and no region changed.
    pub async fn dispatch(&self, action: Action) -> Option<DisplayResult> {
        debug!(
            region = action.region().label(),
            mutation = action.is_mutation(),
            "dispatching action"
        );

        match action {
            Action::LoadAllGames => Some(self.load_all_games().await),
            Action::GetGame { id } => Some(self.get_game(&id).await),
            Action::DeleteGame { id } => self.delete_game(&id).await,
            Action::UploadLog { file } => Some(self.upload_log(file.as_ref()).await),
            Action::DeleteAllGames => self.delete_all_games().await,
            Action::LoadPlayerRanking => Some(self.load_player_ranking().await),
        }
    }

    /// Lists every stored game.
    pub async fn load_all_games(&self) -> DisplayResult {
        let result = self.fetch_all_games().await;
        self.show(Region::AllGames, result)
    }

    /// Shows one game by id.
    pub async fn get_game(&self, id: &str) -> DisplayResult {
        let result = self.fetch_game(id).await;
        self.show(Region::GameById, result)
    }

    /// Deletes one game after confirmation, then refreshes the game list.
    pub async fn delete_game(&self, id: &str) -> Option<DisplayResult> {
        let result = self.remove_game(id).await?;
        Some(self.finish_mutation(Region::GameById, result).await)
    }

    /// Uploads a log file, then refreshes the game list.
    ///
    /// `None` means no file was selected.
    pub async fn upload_log(&self, file: Option<&LogFile>) -> DisplayResult {
        let result = self.send_log(file).await;
        self.finish_mutation(Region::Upload, result).await
    }

    /// Deletes every game after confirmation, then refreshes the game list.
    pub async fn delete_all_games(&self) -> Option<DisplayResult> {
        let result = self.remove_all_games().await?;
        Some(self.finish_mutation(Region::DeleteAll, result).await)
    }

    /// Shows the global player ranking.
    pub async fn load_player_ranking(&self) -> DisplayResult {
        let result = self.fetch_ranking().await;
        self.show(Region::PlayerRanking, result)
    }

    /// Shows a mutation's result and, on success, reloads the game list.
    async fn finish_mutation(&self, region: Region, result: DisplayResult) -> DisplayResult {
        let result = self.show(region, result);
        if !result.is_error {
            debug!(region = region.label(), "refreshing game list");
            self.load_all_games().await;
        }
        result
    }

    // -----------------------------------------------------------------------
    // Per-action request and normalization
    // -----------------------------------------------------------------------

    async fn fetch_all_games(&self) -> DisplayResult {
        self.pending(Region::AllGames, "Loading...");
        match self.api.list_games().await {
            Ok(games) if games.is_empty() => DisplayResult::text(NO_GAMES_FOUND),
            Ok(games) => DisplayResult::json(serde_json::Value::Array(games)),
            Err(e) => ActionError::from(e).into(),
        }
    }

    async fn fetch_game(&self, input: &str) -> DisplayResult {
        let Some(id) = GameId::parse(input) else {
            return ActionError::Validation(ENTER_GAME_ID.into()).into();
        };

        self.pending(Region::GameById, "Loading...");
        match self.api.get_game(id.as_str()).await {
            Ok(game) => DisplayResult::json(game),
            Err(e) => ActionError::from(e).into(),
        }
    }

    async fn remove_game(&self, input: &str) -> Option<DisplayResult> {
        let Some(id) = GameId::parse(input) else {
            return Some(ActionError::Validation(ENTER_GAME_ID_TO_DELETE.into()).into());
        };

        let prompt = format!("Are you sure you want to delete game ID: {id}?");
        if !self.confirmer.confirm(&prompt) {
            info!(game_id = %id, "delete cancelled by user");
            return None;
        }

        self.pending(Region::GameById, "Deleting...");
        let result = match self.api.delete_game(id.as_str()).await {
            Ok(resp) => DisplayResult::text(resp.message.unwrap_or_else(|| GAME_DELETED.into())),
            Err(e) => ActionError::from(e).into(),
        };
        Some(result)
    }

    async fn send_log(&self, file: Option<&LogFile>) -> DisplayResult {
        let Some(file) = file else {
            return ActionError::Validation(SELECT_LOG_FILE.into()).into();
        };

        self.pending(Region::Upload, "Uploading...");
        match self.api.upload_log(file).await {
            Ok(resp) => {
                info!(
                    file = %file.file_name,
                    games_processed = resp.games_processed,
                    "log file uploaded"
                );
                DisplayResult::text(resp.message.unwrap_or_else(|| FILE_UPLOADED.into()))
            }
            Err(e) => ActionError::from(e).into(),
        }
    }

    async fn remove_all_games(&self) -> Option<DisplayResult> {
        if !self.confirmer.confirm(DELETE_ALL_PROMPT) {
            info!("delete-all cancelled by user");
            return None;
        }

        self.pending(Region::DeleteAll, "Deleting all...");
        let result = match self.api.delete_all_games().await {
            Ok(resp) => DisplayResult::text(resp.message.unwrap_or_else(|| ALL_GAMES_DELETED.into())),
            Err(e) => ActionError::from(e).into(),
        };
        Some(result)
    }

    async fn fetch_ranking(&self) -> DisplayResult {
        self.pending(Region::PlayerRanking, "Loading ranking...");
        match self.api.players_ranking().await {
            Ok(entries) if entries.is_empty() => DisplayResult::text(NO_RANKING_DATA),
            Ok(entries) => DisplayResult::text(format_ranking(&entries)),
            Err(e) => ActionError::from(e).into(),
        }
    }

    fn pending(&self, region: Region, message: &str) {
        self.outputs.get(region).pending(message);
    }

    fn show(&self, region: Region, result: DisplayResult) -> DisplayResult {
        if result.is_error {
            warn!(region = region.label(), message = %result.render(), "action failed");
        }
        self.outputs.get(region).show(&result);
        result
    }
}
