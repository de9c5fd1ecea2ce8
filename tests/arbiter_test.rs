//! Tests for turn arbitration.

use tictac_agent::Mark;
use tictac_agent::arbiter::{mark_for_turn, should_act};
use tictac_agent::protocol::{GameSnapshot, SessionStatus};

const AGENT: &str = "ai-rs";

fn snapshot(players: &[&str], current_player: usize, status: SessionStatus) -> GameSnapshot {
    GameSnapshot {
        id: "game123".to_string(),
        board: Default::default(),
        creator_id: "human".to_string(),
        players: players.iter().map(|p| p.to_string()).collect(),
        current_player,
        status,
        winner: None,
    }
}

#[test]
fn acts_when_ongoing_and_its_turn() {
    let snap = snapshot(&["human", AGENT], 1, SessionStatus::Ongoing);
    assert!(should_act(&snap, AGENT));
}

#[test]
fn never_acts_when_finished() {
    // Even when the turn index points at the agent.
    let snap = snapshot(&["human", AGENT], 1, SessionStatus::Finished);
    assert!(!should_act(&snap, AGENT));

    let snap = snapshot(&[AGENT, "human"], 0, SessionStatus::Finished);
    assert!(!should_act(&snap, AGENT));
}

#[test]
fn never_acts_on_unknown_status() {
    let snap = snapshot(&["human", AGENT], 1, SessionStatus::Other);
    assert!(!should_act(&snap, AGENT));
}

#[test]
fn does_not_act_on_opponents_turn() {
    let snap = snapshot(&["human", AGENT], 0, SessionStatus::Ongoing);
    assert!(!should_act(&snap, AGENT));
}

#[test]
fn does_not_act_when_not_seated() {
    let snap = snapshot(&["human", "other"], 1, SessionStatus::Ongoing);
    assert!(!should_act(&snap, AGENT));
}

#[test]
fn out_of_range_turn_index_is_not_our_turn() {
    let snap = snapshot(&["human", AGENT], 2, SessionStatus::Ongoing);
    assert!(!should_act(&snap, AGENT));
}

#[test]
fn index_zero_plays_o() {
    assert_eq!(mark_for_turn(0), Mark::O);
}

#[test]
fn nonzero_index_plays_x() {
    assert_eq!(mark_for_turn(1), Mark::X);
    assert_eq!(mark_for_turn(2), Mark::X);
}
