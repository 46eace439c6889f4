/// Base URL of a locally running game-log API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Collection of stored game reports (`GET`, `DELETE`).
pub const GAMES_PATH: &str = "/games";

/// Multipart upload endpoint for raw server logs.
pub const UPLOAD_PATH: &str = "/games/upload";

/// Aggregated kill ranking across all stored games.
pub const PLAYERS_RANKING_PATH: &str = "/playersranking";

/// Multipart field name the backend reads the log file from.
pub const UPLOAD_FIELD: &str = "logFile";

/// Returns the path of a single game report.
pub fn game_path(id: &str) -> String {
    format!("{GAMES_PATH}/{id}")
}
