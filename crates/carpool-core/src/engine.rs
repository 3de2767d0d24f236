//! Greedy ride assignment.
//!
//! One pass, no backtracking:
//!
//! 1. Build a capacity bucket for every driver marked as driving.
//! 2. Collect candidates: players who are going and need a ride.
//! 3. Move players who need a child seat to the front (stable).
//! 4. For each candidate, pick the feasible bucket with the highest
//!    score. The first bucket wins ties.
//! 5. Seat the candidate there, or record them as unassigned.
//!
//! The output replaces whatever assignments the event had before. Running
//! twice on the same input gives the same output.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::bucket::{Bucket, BucketArena};
use crate::eligibility::EligibilityTable;
use crate::error::CarpoolError;
use crate::models::{
    Assignment, Driver, EligibilityRule, Event, EventAttendance, EventDriverAvailability, Player,
    PlayerId, RideDriver,
};
use crate::scoring::ScoringWeights;

/// Result of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// Full replacement assignment list for the event, one per candidate
    pub assignments: Vec<Assignment>,
    /// Candidates no driver could take, in processing order
    pub unassigned_player_ids: Vec<PlayerId>,
}

impl GenerationResult {
    pub fn unassigned_count(&self) -> usize {
        self.unassigned_player_ids.len()
    }

    pub fn assigned_count(&self) -> usize {
        self.assignments
            .len()
            .saturating_sub(self.unassigned_count())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generator {
    weights: ScoringWeights,
}

impl Generator {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Assign every candidate of `event` to a driver or to unassigned.
    ///
    /// Inputs are expected to be already filtered to this event. Fails
    /// with `NoDriversAvailable` before touching any candidate when no
    /// known driver is marked as driving.
    pub fn generate(
        &self,
        event: &Event,
        players: &[Player],
        attendance: &[EventAttendance],
        availabilities: &[EventDriverAvailability],
        drivers: &[Driver],
        rules: &[EligibilityRule],
    ) -> Result<GenerationResult, CarpoolError> {
        let mut arena = BucketArena::from_availability(availabilities, drivers);
        if arena.is_empty() {
            warn!(event_id = %event.id, "No drivers available, nothing assigned");
            return Err(CarpoolError::NoDriversAvailable {
                event_id: event.id.clone(),
            });
        }

        let eligibility = EligibilityTable::new(rules);
        let ordered = child_seat_first(candidates(players, attendance));

        let mut result = GenerationResult::default();
        for player in ordered {
            let mut driver = RideDriver::Unassigned;
            if let Some(bucket) = self
                .best_bucket(&arena, &eligibility, player)
                .and_then(|position| arena.get_mut(position))
            {
                if bucket.take(&player.id, player.needs_child_seat) {
                    driver = RideDriver::Assigned(bucket.driver_id.clone());
                }
            }

            if !driver.is_assigned() {
                debug!(player_id = %player.id, "No feasible driver");
                result.unassigned_player_ids.push(player.id.clone());
            }
            result
                .assignments
                .push(Assignment::new(&event.id, &player.id, driver));
        }

        info!(
            event_id = %event.id,
            drivers = arena.len(),
            assigned = result.assigned_count(),
            unassigned = result.unassigned_count(),
            "Generated ride assignments"
        );
        Ok(result)
    }

    /// Position of the highest scoring bucket that can take `player`
    fn best_bucket(
        &self,
        arena: &BucketArena,
        eligibility: &EligibilityTable<'_>,
        player: &Player,
    ) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (position, bucket) in arena.iter().enumerate() {
            if let Some(score) = self.score(bucket, eligibility, player) {
                // Strictly greater, so earlier buckets keep ties
                if best.map_or(true, |(_, top)| score > top) {
                    best = Some((position, score));
                }
            }
        }
        best.map(|(position, _)| position)
    }

    /// Score for seating `player` in `bucket`, or None if infeasible
    fn score(
        &self,
        bucket: &Bucket,
        eligibility: &EligibilityTable<'_>,
        player: &Player,
    ) -> Option<u32> {
        if !bucket.has_room(player.needs_child_seat) {
            return None;
        }
        let pair = eligibility.resolve(&bucket.driver_id, &player.id);
        if !pair.allowed {
            return None;
        }
        Some(self.weights.score(pair.preference))
    }
}

/// Generate assignments with the default scoring weights.
pub fn generate_assignments(
    event: &Event,
    players: &[Player],
    attendance: &[EventAttendance],
    availabilities: &[EventDriverAvailability],
    drivers: &[Driver],
    rules: &[EligibilityRule],
) -> Result<GenerationResult, CarpoolError> {
    Generator::default().generate(event, players, attendance, availabilities, drivers, rules)
}

/// Players, in roster order, whose attendance says going and needs a ride.
/// The first attendance record for a player is the one that counts, and
/// so is the first roster row when a player id is listed twice.
fn candidates<'a>(players: &'a [Player], attendance: &[EventAttendance]) -> Vec<&'a Player> {
    let mut by_player: HashMap<&str, &EventAttendance> = HashMap::new();
    for record in attendance {
        by_player.entry(record.player_id.as_str()).or_insert(record);
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut picked = Vec::new();
    for player in players {
        if !seen.insert(player.id.as_str()) {
            debug!(player_id = %player.id, "Skipping duplicate player row");
            continue;
        }
        if by_player
            .get(player.id.as_str())
            .is_some_and(|a| a.wants_ride())
        {
            picked.push(player);
        }
    }

    let unknown = by_player.keys().filter(|id| !seen.contains(*id)).count();
    if unknown > 0 {
        debug!(
            ignored = unknown,
            "Ignoring attendance for players not on the roster"
        );
    }
    picked
}

/// Stable reorder putting child-seat riders first. Child-seat buckets are
/// scarce, so those riders are placed while capacity is still plentiful.
fn child_seat_first(mut players: Vec<&Player>) -> Vec<&Player> {
    players.sort_by_key(|p| !p.needs_child_seat);
    players
}

// ============================================================================
// Tests
// ============================================================================
