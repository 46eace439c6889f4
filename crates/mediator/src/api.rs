//! Backend seam.

use std::future::Future;
use std::pin::Pin;

use quakelog_api_client::{Client, Error, LogFile};
use quakelog_protocol::{MessageResponse, RankingEntry, UploadResponse};

/// Boxed future returned by [`GamesApi`] methods.
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, Error>> + Send + 'a>>;

/// Abstract connection to the game-log backend.
///
/// Implemented by [`quakelog_api_client::Client`]; tests substitute a
/// recording double. Each call is exactly one HTTP request.
pub trait GamesApi: Send + Sync {
    /// `GET /games`
    fn list_games(&self) -> ApiFuture<'_, Vec<serde_json::Value>>;

    /// `GET /games/{id}`
    fn get_game<'a>(&'a self, id: &'a str) -> ApiFuture<'a, serde_json::Value>;

    /// `DELETE /games/{id}`
    fn delete_game<'a>(&'a self, id: &'a str) -> ApiFuture<'a, MessageResponse>;

    /// `POST /games/upload`
    fn upload_log<'a>(&'a self, file: &'a LogFile) -> ApiFuture<'a, UploadResponse>;

    /// `DELETE /games`
    fn delete_all_games(&self) -> ApiFuture<'_, MessageResponse>;

    /// `GET /playersranking`
    fn players_ranking(&self) -> ApiFuture<'_, Vec<RankingEntry>>;
}

impl GamesApi for Client {
    fn list_games(&self) -> ApiFuture<'_, Vec<serde_json::Value>> {
        Box::pin(Client::list_games(self))
    }

    fn get_game<'a>(&'a self, id: &'a str) -> ApiFuture<'a, serde_json::Value> {
        Box::pin(Client::get_game(self, id))
    }

    fn delete_game<'a>(&'a self, id: &'a str) -> ApiFuture<'a, MessageResponse> {
        Box::pin(Client::delete_game(self, id))
    }

    fn upload_log<'a>(&'a self, file: &'a LogFile) -> ApiFuture<'a, UploadResponse> {
        Box::pin(Client::upload_log(self, file))
    }

    fn delete_all_games(&self) -> ApiFuture<'_, MessageResponse> {
        Box::pin(Client::delete_all_games(self))
    }

    fn players_ranking(&self) -> ApiFuture<'_, Vec<RankingEntry>> {
        Box::pin(Client::players_ranking(self))
    }
}
