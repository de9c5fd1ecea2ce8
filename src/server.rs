//! Trigger HTTP surface.
//!
//! Thin glue around the core: `GET /ping` for liveness and
//! `GET /play/{game_id}` to start and drive one session to completion.

use crate::agent_config::AgentConfig;
use crate::rest_client;
use crate::session::SessionDriver;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Builds the trigger router.
pub fn router(config: AgentConfig) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/play/{game_id}", get(play))
        .with_state(Arc::new(config))
}

/// Binds the trigger surface and serves it until the process exits.
pub async fn serve(config: AgentConfig, host: &str, port: u16) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!(host, port, "trigger surface listening");
    axum::serve(listener, router(config)).await?;
    Ok(())
}

#[instrument]
async fn ping() -> &'static str {
    info!("received ping");
    "pong"
}

#[instrument(skip(config))]
async fn play(
    State(config): State<Arc<AgentConfig>>,
    Path(game_id): Path<String>,
) -> Result<String, (StatusCode, String)> {
    info!(%game_id, "received play request");

    rest_client::start_game(&config, &game_id).await.map_err(|e| {
        error!(error = %e, "start-game call failed");
        (StatusCode::BAD_GATEWAY, format!("start-game failed: {e}"))
    })?;

    SessionDriver::new(&config).run(&game_id).await.map_err(|e| {
        error!(error = %e, "session failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("session failed: {e}"),
        )
    })?;

    Ok(format!("session {game_id} complete"))
}
