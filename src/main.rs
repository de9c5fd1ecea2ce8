//! Tictac Agent - autonomous tic-tac-toe player.
//!
//! Joins a remotely hosted game session, watches state updates over a
//! WebSocket stream, and submits minimax-selected moves on its turn.

use anyhow::Result;
use clap::Parser;
use tictac_agent::cli::{Cli, Command};
use tictac_agent::{AgentConfig, SessionDriver, rest_client, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Command::Serve { host, port } => {
            info!("Starting trigger surface");
            server::serve(config, &host, port).await
        }
        Command::Play { game_id } => run_session(config, &game_id).await,
    }
}

/// Starts the remote session and drives it to completion.
async fn run_session(config: AgentConfig, game_id: &str) -> Result<()> {
    info!(game_id, agent_id = %config.agent_id(), "Playing single session");

    rest_client::start_game(&config, game_id).await?;
    SessionDriver::new(&config).run(game_id).await?;

    info!(game_id, "Session complete");
    Ok(())
}

fn load_config(cli: &Cli) -> Result<AgentConfig> {
    let config = match &cli.config {
        Some(path) => AgentConfig::from_file(path)?,
        None => AgentConfig::from_env()?,
    };

    Ok(match cli.depth {
        Some(depth) => config.with_search_depth(depth),
        None => config,
    })
}
