//! Wire protocol for the game session stream.
//!
//! Inbound text frames carry a [`StateUpdate`] wrapping one [`GameSnapshot`];
//! each snapshot supersedes the previous one. The agent answers with a
//! [`MoveMessage`] (`tileClick`) tagged with its own identity.

use crate::game::{Board, Cell, Mark, Move};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a remote session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionStatus {
    /// Game in progress.
    #[serde(rename = "ONGOING")]
    Ongoing,
    /// Game over; the driver closes the stream on sight.
    #[serde(rename = "FINISHED")]
    Finished,
    /// Any other status string (e.g. waiting for players).
    Other,
}

// Unknown status strings map to `Other` instead of failing the frame.
impl<'de> Deserialize<'de> for SessionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "ONGOING" => SessionStatus::Ongoing,
            "FINISHED" => SessionStatus::Finished,
            _ => SessionStatus::Other,
        })
    }
}

/// One inbound message from the session stream.
#[derive(Debug, Clone, Deserialize)]
pub struct StateUpdate {
    /// Message type tag.
    #[serde(rename = "type")]
    pub kind: String,
    /// The session state carried by this message.
    #[serde(rename = "gameState")]
    pub game_state: GameSnapshot,
}

/// The remotely observed state of one session at one point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Session identifier.
    pub id: String,
    /// 3x3 grid of "" / "X" / "O".
    pub board: [[String; 3]; 3],
    /// Identity of the session creator.
    #[serde(rename = "creatorId", default)]
    pub creator_id: String,
    /// Ordered participant identifiers.
    pub players: Vec<String>,
    /// Index into `players` of the participant whose turn it is.
    #[serde(rename = "currentPlayer")]
    pub current_player: usize,
    /// Session lifecycle status.
    pub status: SessionStatus,
    /// Winner identity, when decided.
    #[serde(default)]
    pub winner: Option<String>,
}

impl GameSnapshot {
    /// Converts the wire board into a domain [`Board`].
    pub fn parse_board(&self) -> Result<Board, DecodeError> {
        let mut cells = [[Cell::Empty; 3]; 3];
        for (row, wire_row) in self.board.iter().enumerate() {
            for (col, token) in wire_row.iter().enumerate() {
                cells[row][col] = match token.as_str() {
                    "" => Cell::Empty,
                    "X" => Cell::Taken(Mark::X),
                    "O" => Cell::Taken(Mark::O),
                    other => {
                        return Err(DecodeError::Cell {
                            token: other.to_string(),
                            row,
                            col,
                        });
                    }
                };
            }
        }
        Ok(Board::from_cells(cells))
    }
}

/// Outbound move message published on the stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveMessage {
    /// Message type tag, always `tileClick`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Identity of the acting agent.
    pub player: String,
    /// Target row (0-2).
    pub row: usize,
    /// Target column (0-2).
    pub col: usize,
}

impl MoveMessage {
    /// Builds a move message for the given agent and move.
    pub fn new(player: impl Into<String>, mv: Move) -> Self {
        Self {
            kind: "tileClick".to_string(),
            player: player.into(),
            row: mv.row,
            col: mv.col,
        }
    }
}

/// Malformed inbound frame.
///
/// Decode failures are absorbed by the session driver: the frame is logged
/// and dropped while the stream stays open.
#[derive(Debug, Display, Error, From)]
pub enum DecodeError {
    /// Frame was not valid JSON for a state update.
    #[display("malformed state update: {_0}")]
    #[from]
    Json(serde_json::Error),
    /// Board carried a token other than "", "X", or "O".
    #[display("unrecognized cell {token:?} at ({row}, {col})")]
    Cell {
        /// The offending token.
        token: String,
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
    },
}

/// Decodes one inbound text frame.
pub fn decode_update(text: &str) -> Result<StateUpdate, DecodeError> {
    Ok(serde_json::from_str(text)?)
}
