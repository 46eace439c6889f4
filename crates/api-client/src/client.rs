//! Game-log API client.
//!
//! Async HTTP client using `reqwest`. One request per call; no retries and
//! no timeouts beyond what the transport imposes.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::RequestBuilder;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use quakelog_protocol::constants::{
    GAMES_PATH, PLAYERS_RANKING_PATH, UPLOAD_FIELD, UPLOAD_PATH, game_path,
};
use quakelog_protocol::{MessageResponse, RankingEntry, UploadResponse};

use crate::error::{Error, normalize_error};
use crate::upload::LogFile;

/// Game-log API client bound to a single backend base URL.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Creates a client for the given base URL.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("quakelog/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_http(http, base_url))
    }

    /// Creates a client on top of an existing `reqwest::Client`.
    pub fn with_http(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends the request and returns the body of a 2xx response.
    ///
    /// Non-2xx responses are turned into an [`Error`] by
    /// [`normalize_error`].
    async fn send(&self, request: RequestBuilder) -> Result<Vec<u8>, Error> {
        let resp = request.send().await.map_err(|e| {
            warn!(error = %e, "request did not complete");
            Error::Http(e)
        })?;
        let status = resp.status();
        let url = resp.url().clone();
        let body = resp.bytes().await?.to_vec();

        if !status.is_success() {
            let err = normalize_error(status.as_u16(), &body);
            warn!(%url, status = status.as_u16(), error = %err, "request failed");
            return Err(err);
        }

        debug!(%url, status = status.as_u16(), bytes = body.len(), "request succeeded");
        Ok(body)
    }

    /// Lists every stored game report. A `null` body is an empty list.
    pub async fn list_games(&self) -> Result<Vec<serde_json::Value>, Error> {
        let body = self.send(self.http.get(self.url(GAMES_PATH))).await?;
        decode_list(&body)
    }

    /// Returns a single game report.
    pub async fn get_game(&self, id: &str) -> Result<serde_json::Value, Error> {
        let body = self
            .send(self.http.get(self.url(&encoded_game_path(id))))
            .await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Deletes a single game report.
    pub async fn delete_game(&self, id: &str) -> Result<MessageResponse, Error> {
        let body = self
            .send(self.http.delete(self.url(&encoded_game_path(id))))
            .await?;
        decode_or_default(&body)
    }

    /// Uploads a raw server log for parsing and storage.
    pub async fn upload_log(&self, file: &LogFile) -> Result<UploadResponse, Error> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str("application/octet-stream")?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        debug!(file = %file.file_name, bytes = file.bytes.len(), "uploading log file");
        let body = self
            .send(self.http.post(self.url(UPLOAD_PATH)).multipart(form))
            .await?;
        decode_or_default(&body)
    }

    /// Deletes every stored game report.
    pub async fn delete_all_games(&self) -> Result<MessageResponse, Error> {
        let body = self.send(self.http.delete(self.url(GAMES_PATH))).await?;
        decode_or_default(&body)
    }

    /// Returns the global kill ranking in the order the server sent it.
    ///
    /// The backend answers `null` when no games are stored.
    pub async fn players_ranking(&self) -> Result<Vec<RankingEntry>, Error> {
        let body = self
            .send(self.http.get(self.url(PLAYERS_RANKING_PATH)))
            .await?;
        decode_list(&body)
    }
}

fn encoded_game_path(id: &str) -> String {
    game_path(&utf8_percent_encode(id, NON_ALPHANUMERIC).to_string())
}

/// Decodes a JSON array, treating `null` as empty.
fn decode_list<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, Error> {
    let list: Option<Vec<T>> = serde_json::from_slice(body)?;
    Ok(list.unwrap_or_default())
}

/// Decodes a mutation body, treating an empty body as the type's default.
fn decode_or_default<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    Ok(serde_json::from_slice(body)?)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockBackend;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn list_games_returns_records() {
        let json = r#"[{"id":1,"total_kills":0},{"id":2,"total_kills":11}]"#;
        let backend = MockBackend::start(&[("GET /games", 200, json)]).await;

        let client = Client::new(backend.url()).unwrap();
        let games = client.list_games().await.unwrap();

        assert_eq!(games.len(), 2);
        assert_eq!(games[1]["total_kills"], 11);
        assert_eq!(backend.routes(), vec!["GET /games"]);
    }

    #[tokio::test]
    async fn list_games_null_body_is_empty() {
        let backend = MockBackend::start(&[("GET /games", 200, "null")]).await;

        let client = Client::new(backend.url()).unwrap();
        assert!(client.list_games().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_game_requests_id_path() {
        let backend = MockBackend::start(&[("GET /games/7", 200, r#"{"id":7,"players":[]}"#)]).await;

        let client = Client::new(backend.url()).unwrap();
        let game = client.get_game("7").await.unwrap();

        assert_eq!(game["id"], 7);
        assert_eq!(backend.routes(), vec!["GET /games/7"]);
    }

    #[tokio::test]
    async fn get_game_encodes_id() {
        let backend = MockBackend::start(&[(
            "GET /games/a%2Fb",
            400,
            r#"{"error":"Invalid game ID format"}"#,
        )])
        .await;

        let client = Client::new(backend.url()).unwrap();
        let err = client.get_game("a/b").await.unwrap_err();

        assert_eq!(err.to_string(), "Invalid game ID format");
        assert_eq!(backend.routes(), vec!["GET /games/a%2Fb"]);
    }

    #[tokio::test]
    async fn api_error_uses_server_message() {
        let backend = MockBackend::start(&[(
            "GET /games/9",
            404,
            r#"{"error":"Game with ID 9 not found"}"#,
        )])
        .await;

        let client = Client::new(backend.url()).unwrap();
        let err = client.get_game("9").await.unwrap_err();

        assert!(matches!(err, Error::Api { status: 404, .. }));
        assert_eq!(err.to_string(), "Game with ID 9 not found");
    }

    #[tokio::test]
    async fn unparseable_error_body_mentions_status() {
        let backend =
            MockBackend::start(&[("GET /playersranking", 503, "upstream unavailable")]).await;

        let client = Client::new(backend.url()).unwrap();
        let err = client.players_ranking().await.unwrap_err();

        assert_eq!(err.status(), Some(503));
        assert!(err.to_string().contains("503"), "{err}");
    }

    #[tokio::test]
    async fn delete_game_returns_message() {
        let backend = MockBackend::start(&[(
            "DELETE /games/3",
            200,
            r#"{"message":"Game with ID 3 deleted successfully"}"#,
        )])
        .await;

        let client = Client::new(backend.url()).unwrap();
        let resp = client.delete_game("3").await.unwrap();

        assert_eq!(
            resp.message.as_deref(),
            Some("Game with ID 3 deleted successfully")
        );
    }

    #[tokio::test]
    async fn delete_all_tolerates_empty_body() {
        let backend = MockBackend::start(&[("DELETE /games", 200, "")]).await;

        let client = Client::new(backend.url()).unwrap();
        let resp = client.delete_all_games().await.unwrap();

        assert!(resp.message.is_none());
        assert_eq!(backend.routes(), vec!["DELETE /games"]);
    }

    #[tokio::test]
    async fn upload_sends_multipart_log_file() {
        let json = r#"{"message":"Log file processed and 1 game(s) stored successfully.","games_processed":1}"#;
        let backend = MockBackend::start(&[("POST /games/upload", 201, json)]).await;

        let client = Client::new(backend.url()).unwrap();
        let file = LogFile::new("qgames.log", b"0:00 InitGame:".to_vec());
        let resp = client.upload_log(&file).await.unwrap();

        assert_eq!(resp.games_processed, 1);
        let request = backend.requests().remove(0);
        assert!(request.starts_with("POST /games/upload HTTP/1.1"));
        assert!(request.contains("multipart/form-data"));
        assert!(request.contains(r#"name="logFile""#));
        assert!(request.contains(r#"filename="qgames.log""#));
        assert!(request.contains("0:00 InitGame:"));
    }

    #[tokio::test]
    async fn upload_error_uses_server_message() {
        let backend = MockBackend::start(&[(
            "POST /games/upload",
            400,
            r#"{"error":"Error parsing log file: unexpected EOF"}"#,
        )])
        .await;

        let client = Client::new(backend.url()).unwrap();
        let file = LogFile::new("broken.log", b"garbage".to_vec());
        let err = client.upload_log(&file).await.unwrap_err();

        assert!(matches!(err, Error::Api { status: 400, .. }));
        assert_eq!(err.to_string(), "Error parsing log file: unexpected EOF");
    }

    #[tokio::test]
    async fn players_ranking_keeps_server_order() {
        let json = r#"[{"player_name":"Zeh","total_kills":20},{"player_name":"Assasinu Credi","total_kills":13}]"#;
        let backend = MockBackend::start(&[("GET /playersranking", 200, json)]).await;

        let client = Client::new(backend.url()).unwrap();
        let ranking = client.players_ranking().await.unwrap();

        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].player_name, "Zeh");
        assert_eq!(ranking[1].total_kills, 13);
    }

    #[tokio::test]
    async fn players_ranking_null_body_is_empty() {
        let backend = MockBackend::start(&[("GET /playersranking", 200, "null")]).await;

        let client = Client::new(backend.url()).unwrap();
        assert!(client.players_ranking().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn success_with_invalid_json_is_json_error() {
        let backend = MockBackend::start(&[("GET /games", 200, "not json")]).await;

        let client = Client::new(backend.url()).unwrap();
        let err = client.list_games().await.unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[tokio::test]
    async fn connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = Client::new(&format!("http://127.0.0.1:{port}")).unwrap();
        let err = client.list_games().await.unwrap_err();
        assert!(matches!(err, Error::Http(_)));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let client = Client::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/games"), "http://localhost:8080/games");
    }

    #[test]
    fn decode_or_default_whitespace_body() {
        let resp: MessageResponse = decode_or_default(b" \n").unwrap();
        assert_eq!(resp, MessageResponse::default());
    }

    #[test]
    fn decode_list_null_and_array() {
        let empty: Vec<RankingEntry> = decode_list(b"null").unwrap();
        assert!(empty.is_empty());

        let one: Vec<RankingEntry> =
            decode_list(br#"[{"player_name":"Zeh","total_kills":1}]"#).unwrap();
        assert_eq!(one.len(), 1);
    }
}
