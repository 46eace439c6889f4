//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "quakelog",
    version,
    about = "Browse, upload and delete Quake game-log reports"
)]
pub struct Cli {
    /// Base URL of the game-log API (overrides config and QUAKELOG_API_URL).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Answer "yes" to confirmation prompts.
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Alternate configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Stored game reports.
    #[command(subcommand)]
    Games(GamesCommand),

    /// Upload a server log for parsing.
    Upload {
        /// Log file to upload.
        path: Option<PathBuf>,
    },

    /// Global kill ranking across all games.
    Ranking,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum GamesCommand {
    /// List every stored game.
    List,

    /// Show one game.
    Show {
        #[arg(default_value = "")]
        id: String,

        /// Print a readable report instead of raw JSON.
        #[arg(long)]
        summary: bool,
    },

    /// Delete one game.
    Delete {
        #[arg(default_value = "")]
        id: String,
    },

    /// Delete every stored game.
    DeleteAll,
}

impl Command {
    /// Whether game records should be rendered as readable reports.
    pub fn wants_summary(&self) -> bool {
        matches!(
            self,
            Command::Games(GamesCommand::Show { summary: true, .. })
        )
    }
}
