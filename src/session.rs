//! Session driver: owns one streaming connection to a remote game session.
//!
//! State machine `Disconnected -> Connecting -> Streaming -> Closed`. The
//! driver dials the stream, decodes each inbound snapshot, asks the turn
//! arbiter whether to act, runs the search engine when it is the agent's
//! turn, and publishes the resulting move. A `FINISHED` snapshot, a peer
//! close, or a read/send failure all end in `Closed`; one driver instance
//! handles exactly one session attempt and never reconnects.

use crate::agent_config::AgentConfig;
use crate::arbiter;
use crate::game::{Mark, best_move};
use crate::protocol::{MoveMessage, SessionStatus, decode_update};
use derive_more::{Display, Error};
use futures::{SinkExt, StreamExt};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, info, instrument, warn};

/// Lifecycle state of a session driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// No connection attempted yet.
    Disconnected,
    /// Dial in progress.
    Connecting,
    /// Connected; inbound messages are processed.
    Streaming,
    /// Terminal; the driver does not reconnect.
    Closed,
}

/// What the driver does in response to one inbound text frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    /// Nothing to do: not our turn, or the frame was dropped.
    Idle,
    /// Publish this move on the stream.
    Reply(MoveMessage),
    /// The session is finished; close the stream.
    Finish,
}

/// Fatal session failure surfaced to the driver's caller.
#[derive(Debug, Display, Error)]
pub enum SessionError {
    /// Dial or handshake failed; fatal to the attempt, no retry.
    #[display("connection failed: {_0}")]
    Connect(tokio_tungstenite::tungstenite::Error),
    /// Outbound move could not be sent; the session closes.
    #[display("send failed: {_0}")]
    Send(tokio_tungstenite::tungstenite::Error),
    /// The stream failed mid-session.
    #[display("stream read failed: {_0}")]
    Read(tokio_tungstenite::tungstenite::Error),
}

/// Drives one game session end-to-end.
#[derive(Debug)]
pub struct SessionDriver {
    agent_id: String,
    ws_base: String,
    search_depth: u32,
    state: DriverState,
}

impl SessionDriver {
    /// Creates a driver from the agent configuration.
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            agent_id: config.agent_id().clone(),
            ws_base: config.ws_base().clone(),
            search_depth: *config.search_depth(),
            state: DriverState::Disconnected,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Dials the session stream and processes it to completion.
    ///
    /// Returns `Ok(())` when the stream ends cleanly (finished game or peer
    /// close); connection, send, and read failures are fatal and surface as
    /// [`SessionError`]. Retry policy belongs to the caller.
    #[instrument(skip(self), fields(agent_id = %self.agent_id))]
    pub async fn run(mut self, game_id: &str) -> Result<(), SessionError> {
        let url = format!("{}/game/{}", self.ws_base, game_id);
        info!(%url, "dialing game stream");
        self.state = DriverState::Connecting;

        let (stream, _) = connect_async(url.as_str()).await.map_err(|e| {
            self.state = DriverState::Closed;
            SessionError::Connect(e)
        })?;
        self.state = DriverState::Streaming;
        info!("subscribed to game events");

        let (mut sink, mut source) = stream.split();

        while let Some(frame) = source.next().await {
            let message = match frame {
                Ok(message) => message,
                Err(e) => {
                    self.state = DriverState::Closed;
                    return Err(SessionError::Read(e));
                }
            };

            match message {
                Message::Text(text) => match self.handle_text(&text) {
                    Reaction::Reply(mv) => {
                        debug!(row = mv.row, col = mv.col, "submitting move");
                        let payload = serde_json::to_string(&mv)
                            .expect("move message serializes");
                        if let Err(e) = sink.send(Message::Text(payload)).await {
                            self.state = DriverState::Closed;
                            return Err(SessionError::Send(e));
                        }
                    }
                    Reaction::Finish => {
                        let _ = sink.send(Message::Close(None)).await;
                        break;
                    }
                    Reaction::Idle => {}
                },
                Message::Binary(bytes) => {
                    debug!(len = bytes.len(), "ignoring binary frame");
                }
                Message::Close(_) => {
                    info!("stream closed by peer");
                    break;
                }
                // Ping/pong are answered by the protocol layer.
                _ => {}
            }
        }

        self.state = DriverState::Closed;
        info!("session closed");
        Ok(())
    }

    /// Processes one inbound text frame and decides the reaction.
    ///
    /// Synchronous and side-effect-free apart from logging and the state
    /// transition on a finished game, which makes the dispatch logic
    /// testable without a live stream. Undecodable frames are dropped: one
    /// bad frame is not the whole session.
    pub fn handle_text(&mut self, text: &str) -> Reaction {
        let update = match decode_update(text) {
            Ok(update) => update,
            Err(e) => {
                warn!(error = %e, "dropping undecodable frame");
                return Reaction::Idle;
            }
        };
        let snapshot = update.game_state;

        if snapshot.status == SessionStatus::Finished {
            info!(
                session_id = %snapshot.id,
                winner = snapshot.winner.as_deref().unwrap_or("none"),
                "game finished"
            );
            self.state = DriverState::Closed;
            return Reaction::Finish;
        }

        if !arbiter::should_act(&snapshot, &self.agent_id) {
            return Reaction::Idle;
        }

        let board = match snapshot.parse_board() {
            Ok(board) => board,
            Err(e) => {
                warn!(error = %e, "dropping frame with unreadable board");
                return Reaction::Idle;
            }
        };

        let mark = arbiter::mark_for_turn(snapshot.current_player);
        let result = best_move(&board, mark, mark == Mark::X, self.search_depth);

        match result.best {
            Some(mv) => {
                info!(
                    session_id = %snapshot.id,
                    %mark,
                    score = result.score,
                    %mv,
                    "move selected"
                );
                Reaction::Reply(MoveMessage::new(self.agent_id.clone(), mv))
            }
            None => {
                // Reachable only if the snapshot claims an ongoing game on a
                // terminal board; nothing sensible to send.
                warn!(session_id = %snapshot.id, "search returned no move");
                Reaction::Idle
            }
        }
    }
}
