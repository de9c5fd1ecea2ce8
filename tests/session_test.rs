//! Tests for the session driver: frame dispatch and the live stream loop.

use futures::{SinkExt, StreamExt};
use tictac_agent::protocol::MoveMessage;
use tictac_agent::{AgentConfig, DriverState, Reaction, SessionDriver};
use tokio_tungstenite::tungstenite::Message;

const AGENT: &str = "ai-rs";

fn config(ws_base: impl Into<String>) -> AgentConfig {
    AgentConfig::new(AGENT, "http://unused", ws_base)
}

fn update(board: &str, current_player: usize, status: &str) -> String {
    format!(
        r#"{{
            "type": "gameState",
            "gameState": {{
                "id": "game123",
                "board": {board},
                "creatorId": "human",
                "players": ["human", "{AGENT}"],
                "currentPlayer": {current_player},
                "status": "{status}",
                "winner": null
            }}
        }}"#
    )
}

const EMPTY_BOARD: &str = r#"[["", "", ""], ["", "", ""], ["", "", ""]]"#;

#[test]
fn decode_failure_keeps_the_session_alive() {
    let mut driver = SessionDriver::new(&config("ws://unused"));

    // First frame is garbage and must be dropped without closing anything.
    assert_eq!(driver.handle_text("{ not json"), Reaction::Idle);
    assert_ne!(driver.state(), DriverState::Closed);

    // The next valid, actionable frame still produces a move.
    let reaction = driver.handle_text(&update(EMPTY_BOARD, 1, "ONGOING"));
    match reaction {
        Reaction::Reply(mv) => {
            assert_eq!(mv.kind, "tileClick");
            assert_eq!(mv.player, AGENT);
            assert!(mv.row <= 2 && mv.col <= 2);
        }
        other => panic!("expected a move, got {other:?}"),
    }
}

#[test]
fn finished_snapshot_closes_without_a_move() {
    let mut driver = SessionDriver::new(&config("ws://unused"));
    let reaction = driver.handle_text(&update(EMPTY_BOARD, 1, "FINISHED"));
    assert_eq!(reaction, Reaction::Finish);
    assert_eq!(driver.state(), DriverState::Closed);
}

#[test]
fn opponents_turn_is_idle() {
    let mut driver = SessionDriver::new(&config("ws://unused"));
    let reaction = driver.handle_text(&update(EMPTY_BOARD, 0, "ONGOING"));
    assert_eq!(reaction, Reaction::Idle);
}

#[test]
fn unreadable_board_is_dropped() {
    let mut driver = SessionDriver::new(&config("ws://unused"));
    let board = r#"[["Z", "", ""], ["", "", ""], ["", "", ""]]"#;
    assert_eq!(driver.handle_text(&update(board, 1, "ONGOING")), Reaction::Idle);
    assert_ne!(driver.state(), DriverState::Closed);
}

#[test]
fn move_respects_the_index_to_mark_convention() {
    // Agent seated first: index 0 plays O. X already threatens the top row,
    // so O must block at (0, 2).
    let mut driver = SessionDriver::new(&AgentConfig::new(
        AGENT,
        "http://unused",
        "ws://unused",
    ));
    let text = format!(
        r#"{{
            "type": "gameState",
            "gameState": {{
                "id": "game123",
                "board": [["X", "X", ""], ["", "O", ""], ["", "", ""]],
                "creatorId": "{AGENT}",
                "players": ["{AGENT}", "human"],
                "currentPlayer": 0,
                "status": "ONGOING",
                "winner": null
            }}
        }}"#
    );
    match driver.handle_text(&text) {
        Reaction::Reply(mv) => assert_eq!((mv.row, mv.col), (0, 2)),
        other => panic!("expected a move, got {other:?}"),
    }
}

#[tokio::test]
async fn dial_failure_is_fatal() {
    // Nothing listens on this port.
    let driver = SessionDriver::new(&config("ws://127.0.0.1:1"));
    let err = driver.run("game123").await.unwrap_err();
    assert!(err.to_string().contains("connection failed"));
}

/// End-to-end: an in-process server feeds the driver one malformed frame,
/// one actionable snapshot, and a finished snapshot; the driver must answer
/// exactly one tileClick and then close.
#[tokio::test]
async fn driver_plays_one_session_over_a_live_stream() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let ws = tokio_tungstenite::accept_async(stream).await.unwrap();
        let (mut sink, mut source) = ws.split();

        sink.send(Message::Text("{ not json".to_string())).await.unwrap();
        sink.send(Message::Text(session_update(1, "ONGOING"))).await.unwrap();

        let reply = source.next().await.unwrap().unwrap();
        let mv: MoveMessage = serde_json::from_str(reply.to_text().unwrap()).unwrap();

        sink.send(Message::Text(session_update(1, "FINISHED"))).await.unwrap();

        // Only control frames may follow; another move would be a bug.
        while let Some(Ok(frame)) = source.next().await {
            assert!(!frame.is_text(), "unexpected outbound frame after finish");
        }

        mv
    });

    let driver = SessionDriver::new(&config(format!("ws://{addr}")));
    driver.run("game123").await.unwrap();

    let mv = server.await.unwrap();
    assert_eq!(mv.kind, "tileClick");
    assert_eq!(mv.player, AGENT);
    assert!(mv.row <= 2 && mv.col <= 2);
}

fn session_update(current_player: usize, status: &str) -> String {
    format!(
        r#"{{
            "type": "gameState",
            "gameState": {{
                "id": "game123",
                "board": [["", "", ""], ["", "", ""], ["", "", ""]],
                "creatorId": "human",
                "players": ["human", "{AGENT}"],
                "currentPlayer": {current_player},
                "status": "{status}",
                "winner": null
            }}
        }}"#
    )
}
