//! Turn arbitration: decides when the agent acts and which side it plays.

use crate::game::Mark;
use crate::protocol::{GameSnapshot, SessionStatus};
use tracing::debug;

/// Returns true iff the agent should compute and submit a move.
///
/// Pure function of its inputs: the session must be ongoing and the
/// participant at `current_player` must be this agent. An out-of-range
/// index yields false rather than a panic.
pub fn should_act(snapshot: &GameSnapshot, agent_id: &str) -> bool {
    if snapshot.status != SessionStatus::Ongoing {
        return false;
    }
    let is_turn = snapshot
        .players
        .get(snapshot.current_player)
        .is_some_and(|player| player == agent_id);
    debug!(
        session_id = %snapshot.id,
        current_player = snapshot.current_player,
        is_turn,
        "checked turn"
    );
    is_turn
}

/// Maps the current-player index to the mark that index plays.
///
/// Fixed convention: index 0 plays O, any nonzero index plays X. Both the
/// arbiter and the search invocation rely on this single mapping.
pub fn mark_for_turn(current_player: usize) -> Mark {
    if current_player == 0 { Mark::O } else { Mark::X }
}
