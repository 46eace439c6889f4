//! Quake game-log console entry point.

mod cli;
mod config;
mod terminal;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use quakelog_api_client::{Client, LogFile};
use quakelog_mediator::{Action, ActionError, DisplayResult, Mediator, OutputSink, Outputs, Region};

use cli::{Cli, Command, GamesCommand};
use config::Config;
use terminal::TerminalSink;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so rendered output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,quakelog=info")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "quakelog failed");
            eprintln!("quakelog: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = Config::load(cli.config.as_deref())?.with_overrides(
        std::env::var(config::BASE_URL_ENV).ok(),
        cli.base_url.clone(),
        cli.yes,
    );
    tracing::debug!(base_url = %config.base_url, "using game-log API");

    let client = Client::new(&config.base_url)?;
    let outputs = terminal_outputs(cli.command.wants_summary());

    let action = match cli.command {
        Command::Games(GamesCommand::List) => Action::LoadAllGames,
        Command::Games(GamesCommand::Show { id, .. }) => Action::GetGame { id },
        Command::Games(GamesCommand::Delete { id }) => Action::DeleteGame { id },
        Command::Games(GamesCommand::DeleteAll) => Action::DeleteAllGames,
        Command::Ranking => Action::LoadPlayerRanking,
        Command::Upload { path } => {
            let file = match path {
                Some(path) => match LogFile::read(&path).await {
                    Ok(file) => Some(file),
                    Err(e) => {
                        let result: DisplayResult = ActionError::from(e).into();
                        outputs.upload.show(&result);
                        return Ok(ExitCode::FAILURE);
                    }
                },
                None => None,
            };
            Action::UploadLog { file }
        }
    };

    let mediator = if config.assume_yes {
        Mediator::new(Arc::new(client), Box::new(|_: &str| true), outputs)
    } else {
        Mediator::new(
            Arc::new(client),
            Box::new(terminal::prompt_stdin),
            outputs,
        )
    };

    Ok(match mediator.dispatch(action).await {
        Some(result) if result.is_error => ExitCode::FAILURE,
        Some(_) => ExitCode::SUCCESS,
        None => {
            eprintln!("Cancelled.");
            ExitCode::SUCCESS
        }
    })
}

fn terminal_outputs(summary: bool) -> Outputs {
    let sink = |region: Region| -> Arc<dyn OutputSink> {
        Arc::new(TerminalSink::new(region, summary && region == Region::GameById))
    };
    Outputs {
        all_games: sink(Region::AllGames),
        game_by_id: sink(Region::GameById),
        upload: sink(Region::Upload),
        delete_all: sink(Region::DeleteAll),
        player_ranking: sink(Region::PlayerRanking),
    }
}
