//! Agent configuration.
//!
//! Loaded once at startup from environment variables or a TOML file and
//! immutable thereafter. Components take the configuration through their
//! constructors; nothing reads the ambient environment in deep call paths.

use crate::game::DEFAULT_SEARCH_DEPTH;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for one agent process.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Identity this agent plays under (matched against snapshot players).
    agent_id: String,

    /// Base URL of the remote game server's HTTP API.
    http_base: String,

    /// Base URL of the remote game server's WebSocket endpoint.
    ws_base: String,

    /// Search depth in plies; >= 9 plays optimally.
    #[serde(default = "default_search_depth")]
    search_depth: u32,
}

fn default_search_depth() -> u32 {
    DEFAULT_SEARCH_DEPTH
}

impl AgentConfig {
    /// Creates a configuration with the default search depth.
    pub fn new(
        agent_id: impl Into<String>,
        http_base: impl Into<String>,
        ws_base: impl Into<String>,
    ) -> Self {
        Self {
            agent_id: agent_id.into(),
            http_base: http_base.into(),
            ws_base: ws_base.into(),
            search_depth: default_search_depth(),
        }
    }

    /// Overrides the search depth.
    pub fn with_search_depth(mut self, depth: u32) -> Self {
        self.search_depth = depth;
        self
    }

    /// Loads configuration from the environment.
    ///
    /// Reads `USER_ID`, `GAME_SERVER`, `WS_GAME_SERVER`, and optionally
    /// `SEARCH_DEPTH`. The caller is expected to have loaded `.env` already
    /// (via dotenvy) if one is in use.
    #[instrument]
    pub fn from_env() -> Result<Self, ConfigError> {
        debug!("Loading config from environment");

        let agent_id = require_var("USER_ID")?;
        let http_base = require_var("GAME_SERVER")?;
        let ws_base = require_var("WS_GAME_SERVER")?;

        let search_depth = match std::env::var("SEARCH_DEPTH") {
            Ok(raw) => raw.parse::<u32>().map_err(|e| {
                ConfigError::new(format!("Invalid SEARCH_DEPTH {raw:?}: {e}"))
            })?,
            Err(_) => default_search_depth(),
        };

        let config = Self::new(agent_id, http_base, ws_base).with_search_depth(search_depth);
        info!(agent_id = %config.agent_id, search_depth, "Config loaded from environment");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(agent_id = %config.agent_id, "Config loaded successfully");
        Ok(config)
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .map_err(|_| ConfigError::new(format!("{} environment variable not set", name)))
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
