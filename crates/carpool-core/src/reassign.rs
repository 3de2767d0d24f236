//! Manual ride overrides.
//!
//! Moving a player by hand replaces that one player's assignment and
//! nothing else. Capacity and eligibility are not checked here; a manual
//! override may overfill a car and the ride board flags it.

use tracing::debug;

use crate::models::{Assignment, RideDriver};

/// Put `player_id` in `target` for `event_id`, returning the new list.
///
/// Any existing assignment for the player in that event is removed and the
/// new one is appended. Every other record is returned unchanged and in
/// its original order.
pub fn reassign_player(
    event_id: &str,
    player_id: &str,
    target: RideDriver,
    current: &[Assignment],
) -> Vec<Assignment> {
    let mut assignments: Vec<Assignment> = current
        .iter()
        .filter(|a| !a.is_for(event_id, player_id))
        .cloned()
        .collect();
    let removed = current.len() - assignments.len();

    debug!(
        event_id,
        player_id,
        target = %target,
        removed,
        "Manual reassignment"
    );
    assignments.push(Assignment::new(event_id, player_id, target));
    assignments
}
