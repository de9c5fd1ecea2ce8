//! Tictac Agent library - autonomous tic-tac-toe session player.
//!
//! The agent joins a remotely hosted tic-tac-toe session, observes state
//! snapshots over a WebSocket stream, and submits its own moves when it is
//! its turn.
//!
//! # Architecture
//!
//! - **Game**: board model plus depth-bounded minimax with alpha-beta pruning
//! - **Arbiter**: pure turn decision over inbound snapshots
//! - **Session**: driver state machine owning one stream connection
//! - **Server**: thin axum trigger surface (`/ping`, `/play/{game_id}`)
//!
//! # Example
//!
//! ```no_run
//! use tictac_agent::{AgentConfig, SessionDriver};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = AgentConfig::new("ai-rs", "http://localhost:5000", "ws://localhost:5000");
//! SessionDriver::new(&config).run("game123").await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Module declarations
mod agent_config;
pub mod arbiter;
pub mod cli;
mod game;
pub mod protocol;
pub mod rest_client;
pub mod server;
mod session;

// Crate-level exports - Configuration
pub use agent_config::{AgentConfig, ConfigError};

// Crate-level exports - Game types and search
pub use game::{
    Board, BoardStatus, Cell, DEFAULT_SEARCH_DEPTH, IllegalMove, Mark, Move, SearchResult,
    best_move, evaluate,
};

// Crate-level exports - Session driver
pub use session::{DriverState, Reaction, SessionDriver, SessionError};
