//! Roster snapshot loading.
//!
//! A snapshot is one JSON document holding everything the roster and event
//! stores would hand the engine. The CLI plays the part of those stores:
//! it picks one event and filters the per-event records down to it.

use std::path::Path;

use anyhow::{Context, Result};
use carpool_core::{
    Assignment, Driver, EligibilityRule, Event, EventAttendance, EventDriverAvailability, Player,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("Event not found in snapshot: {0}")]
    UnknownEvent(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub events: Vec<Event>,
    pub players: Vec<Player>,
    pub drivers: Vec<Driver>,
    pub eligibility_rules: Vec<EligibilityRule>,
    pub attendance: Vec<EventAttendance>,
    pub availability: Vec<EventDriverAvailability>,
    pub assignments: Vec<Assignment>,
}

/// Per-event records for one event
#[derive(Debug, Clone)]
pub struct EventSlice<'a> {
    pub event: &'a Event,
    pub attendance: Vec<EventAttendance>,
    pub availability: Vec<EventDriverAvailability>,
    pub assignments: Vec<Assignment>,
}

impl Snapshot {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
        let snapshot: Snapshot = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse snapshot: {}", path.display()))?;

        debug!(
            path = %path.display(),
            events = snapshot.events.len(),
            players = snapshot.players.len(),
            drivers = snapshot.drivers.len(),
            "Loaded snapshot"
        );
        Ok(snapshot)
    }

    pub fn for_event(&self, event_id: &str) -> Result<EventSlice<'_>, SnapshotError> {
        let event = self
            .events
            .iter()
            .find(|e| e.id == event_id)
            .ok_or_else(|| SnapshotError::UnknownEvent(event_id.to_string()))?;

        Ok(EventSlice {
            event,
            attendance: self
                .attendance
                .iter()
                .filter(|a| a.event_id == event_id)
                .cloned()
                .collect(),
            availability: self
                .availability
                .iter()
                .filter(|a| a.event_id == event_id)
                .cloned()
                .collect(),
            assignments: self
                .assignments
                .iter()
                .filter(|a| a.event_id == event_id)
                .cloned()
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "events": [
            {"id": "e1", "name": "Away game", "startsAt": "2026-03-14T09:30:00"},
            {"id": "e2", "name": "Practice"}
        ],
        "players": [
            {"id": "p1", "name": "Ava", "needsChildSeat": true},
            {"id": "p2", "name": "Ben"}
        ],
        "drivers": [{"id": "d1", "name": "Sam", "maxSeatsTotal": 3, "maxChildSeats": 1}],
        "attendance": [
            {"eventId": "e1", "playerId": "p1", "isGoing": true, "needsRide": true},
            {"eventId": "e2", "playerId": "p2", "isGoing": true, "needsRide": true}
        ],
        "availability": [{"eventId": "e1", "driverId": "d1", "isDriving": true}],
        "assignments": [
            {"id": "e2:p2", "eventId": "e2", "driverId": "unassigned", "playerId": "p2"}
        ]
    }"#;

    #[test]
    fn test_parse_snapshot() {
        let snapshot: Snapshot =
            serde_json::from_str(SNAPSHOT).expect("Failed to parse snapshot JSON");

        assert_eq!(snapshot.events.len(), 2);
        assert_eq!(snapshot.players.len(), 2);
        assert!(snapshot.eligibility_rules.is_empty());
        assert_eq!(snapshot.assignments[0].driver, carpool_core::RideDriver::Unassigned);
    }

    #[test]
    fn test_for_event_filters_records() {
        let snapshot: Snapshot =
            serde_json::from_str(SNAPSHOT).expect("Failed to parse snapshot JSON");

        let slice = snapshot.for_event("e1").expect("e1 exists");
        assert_eq!(slice.event.name, "Away game");
        assert_eq!(slice.attendance.len(), 1);
        assert_eq!(slice.availability.len(), 1);
        assert!(slice.assignments.is_empty());

        let slice = snapshot.for_event("e2").expect("e2 exists");
        assert!(slice.availability.is_empty());
        assert_eq!(slice.assignments.len(), 1);
    }

    #[test]
    fn test_sample_snapshot_generates() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/sample_snapshot.json");
        let snapshot = Snapshot::load(&path).expect("sample snapshot loads");
        let slice = snapshot.for_event("e-2026-03-14").expect("sample event exists");

        let result = carpool_core::generate_assignments(
            slice.event,
            &snapshot.players,
            &slice.attendance,
            &slice.availability,
            &snapshot.drivers,
            &snapshot.eligibility_rules,
        )
        .expect("sample has drivers");

        let rides: Vec<(&str, Option<&str>)> = result
            .assignments
            .iter()
            .map(|a| (a.player_id.as_str(), a.driver.driver_id()))
            .collect();
        assert_eq!(
            rides,
            vec![
                ("p-ava", Some("d-sam")),
                ("p-dev", Some("d-rita")),
                ("p-ben", Some("d-sam")),
                ("p-cleo", Some("d-rita")),
            ]
        );
        assert_eq!(result.unassigned_count(), 0);
    }

    #[test]
    fn test_for_event_unknown() {
        let snapshot = Snapshot::default();
        let err = snapshot.for_event("nope").expect_err("no events in empty snapshot");
        assert_eq!(err, SnapshotError::UnknownEvent("nope".to_string()));
    }
}
