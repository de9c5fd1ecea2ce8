//! HTTP client for the remote game server's start-session call.

use crate::agent_config::AgentConfig;
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, instrument};

#[derive(Debug, Serialize)]
struct StartGameRequest<'a> {
    #[serde(rename = "userId")]
    user_id: &'a str,
}

/// Asks the remote server to start the session and seat this agent.
///
/// Must complete (or fail) before the game stream is dialed; the response
/// body is not consumed beyond the status check.
#[instrument(skip(config), fields(agent_id = %config.agent_id()))]
pub async fn start_game(config: &AgentConfig, game_id: &str) -> Result<()> {
    let url = format!("{}/api/v1/game/start/{}", config.http_base(), game_id);
    info!(%url, "requesting game start");

    let response = reqwest::Client::new()
        .post(&url)
        .json(&StartGameRequest {
            user_id: config.agent_id(),
        })
        .send()
        .await
        .context("start-game request failed")?;

    let status = response.status();
    debug!(%status, "start-game response");
    if !status.is_success() {
        anyhow::bail!("start-game rejected with status {}", status);
    }

    Ok(())
}
