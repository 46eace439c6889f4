//! Normalized display payloads.

use std::fmt;

use quakelog_protocol::RankingEntry;

use crate::error::ActionError;

/// Shown instead of an empty game list.
pub const NO_GAMES_FOUND: &str = "No games found.";

/// Shown instead of an empty ranking.
pub const NO_RANKING_DATA: &str = "No player ranking data found.";

const RANKING_HEADER: &str = "Player Rankings:";
const RANKING_RULE: &str = "------------------";

/// What an output region shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Structured data, rendered as indented JSON.
    Json(serde_json::Value),
    /// A plain message.
    Text(String),
}

/// The final outcome of an action, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayResult {
    pub payload: Payload,
    pub is_error: bool,
}

impl DisplayResult {
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            payload: Payload::Text(message.into()),
            is_error: false,
        }
    }

    pub fn json(value: serde_json::Value) -> Self {
        Self {
            payload: Payload::Json(value),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            payload: Payload::Text(message.into()),
            is_error: true,
        }
    }

    /// Renders the payload as display text. JSON uses two-space indentation.
    pub fn render(&self) -> String {
        match &self.payload {
            Payload::Text(text) => text.clone(),
            Payload::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
        }
    }
}

impl fmt::Display for DisplayResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<ActionError> for DisplayResult {
    fn from(err: ActionError) -> Self {
        DisplayResult::error(err.to_string())
    }
}

/// Formats the ranking as a header plus one `name: N kills` line per entry,
/// in the order given.
pub fn format_ranking(entries: &[RankingEntry]) -> String {
    let mut out = format!("{RANKING_HEADER}\n{RANKING_RULE}");
    for entry in entries {
        out.push('\n');
        out.push_str(&format!("{}: {} kills", entry.player_name, entry.total_kills));
    }
    out
}
