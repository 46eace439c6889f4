use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A player's aggregated kill count from `GET /playersranking`.
///
/// The backend emits `player_name`/`total_kills`. Older frontends read
/// `name`/`score`; those keys are accepted on decode only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    #[serde(alias = "name")]
    pub player_name: String,
    #[serde(alias = "score")]
    pub total_kills: i64,
}

/// A stored per-game report, as produced by the backend's log parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    pub id: i64,
    #[serde(default)]
    pub total_kills: i64,
    #[serde(default)]
    pub players: Vec<String>,
    #[serde(default)]
    pub kills: BTreeMap<String, i64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub kills_by_means: BTreeMap<String, i64>,
}

/// Generic `{ "message": ... }` success body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Success body of `POST /games/upload`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub games_processed: u64,
}

/// Error body carried by non-2xx responses.
///
/// `error` is normally a string, but any JSON value is accepted so callers
/// can decide how to show numbers or objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}
