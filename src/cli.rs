//! Command-line interface for tictac_agent.

use clap::{Parser, Subcommand};

/// Tictac Agent - autonomous tic-tac-toe player for remote sessions
#[derive(Parser, Debug)]
#[command(name = "tictac_agent")]
#[command(about = "Autonomous tic-tac-toe player for remote game sessions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file; falls back to environment variables
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Override the search depth in plies (>= 9 plays optimally)
    #[arg(long)]
    pub depth: Option<u32>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the trigger HTTP surface (/ping, /play/{game_id})
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Start and drive a single game session to completion
    Play {
        /// Identifier of the remote game session to join
        game_id: String,
    },
}
