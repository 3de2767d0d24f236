use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Driver, DriverId, EventId, PlayerId};

/// Which leg of the trip a driver covers.
///
/// Accepted on events and availabilities but not yet used for matching:
/// the engine emits `Both` for every assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    To,
    From,
    #[default]
    Both,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::To => write!(f, "To"),
            Direction::From => write!(f, "From"),
            Direction::Both => write!(f, "Both"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    #[serde(default)]
    pub starts_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub direction: Direction,
}

impl Event {
    /// Formatted start: "Feb 06, 2026 @ 07:00 PM"
    pub fn formatted_date(&self) -> String {
        match &self.starts_at {
            Some(dt) => dt.format("%b %d, %Y @ %I:%M %p").to_string(),
            None => "TBD".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct EventAttendance {
    pub event_id: EventId,
    pub player_id: PlayerId,
    #[serde(default)]
    pub is_going: bool,
    #[serde(default)]
    pub needs_ride: bool,
}

impl EventAttendance {
    /// Toggle attendance the way the roster UI does: a player who stops
    /// going no longer needs a ride, and a player who starts going is
    /// assumed to need one until told otherwise.
    ///
    /// The engine never calls this; it reads both flags as given.
    pub fn set_going(&mut self, going: bool) {
        self.is_going = going;
        self.needs_ride = going;
    }

    /// True when this record makes the player a ride candidate
    pub fn wants_ride(&self) -> bool {
        self.is_going && self.needs_ride
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct EventDriverAvailability {
    pub event_id: EventId,
    pub driver_id: DriverId,
    #[serde(default)]
    pub is_driving: bool,
    #[serde(default)]
    pub direction: Direction,
    // None when the driver was never configured for this event
    #[serde(default)]
    pub available_seats_total: Option<u32>,
    #[serde(default)]
    pub available_child_seats: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl EventDriverAvailability {
    /// Availability record for a driver who was just marked as driving,
    /// seeded from the driver's global seat counts.
    pub fn mark_driving(event_id: impl Into<EventId>, driver: &Driver) -> Self {
        Self {
            event_id: event_id.into(),
            driver_id: driver.id.clone(),
            is_driving: true,
            direction: Direction::Both,
            available_seats_total: Some(driver.max_seats_total),
            available_child_seats: Some(driver.max_child_seats),
            notes: None,
        }
    }

    /// Seats offered for this event, falling back to the driver's maximum
    pub fn seats_total(&self, driver: &Driver) -> u32 {
        self.available_seats_total.unwrap_or(driver.max_seats_total)
    }

    /// Child seats offered for this event, falling back to the driver's maximum
    pub fn child_seats(&self, driver: &Driver) -> u32 {
        self.available_child_seats.unwrap_or(driver.max_child_seats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver() -> Driver {
        Driver {
            id: "d1".to_string(),
            name: "Sam".to_string(),
            has_license: true,
            max_seats_total: 4,
            max_child_seats: 2,
        }
    }

    // -------------------------------------------------------------------------
    // Attendance Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_set_going_forces_needs_ride() {
        let mut attendance = EventAttendance {
            event_id: "e1".to_string(),
            player_id: "p1".to_string(),
            is_going: true,
            needs_ride: false,
        };

        attendance.set_going(false);
        assert!(!attendance.is_going);
        assert!(!attendance.needs_ride);

        attendance.set_going(true);
        assert!(attendance.is_going);
        assert!(attendance.needs_ride);
    }

    #[test]
    fn test_wants_ride_requires_both_flags() {
        let mut attendance = EventAttendance {
            event_id: "e1".to_string(),
            player_id: "p1".to_string(),
            is_going: false,
            needs_ride: true,
        };
        // needs_ride without is_going is ignored
        assert!(!attendance.wants_ride());

        attendance.is_going = true;
        assert!(attendance.wants_ride());

        attendance.needs_ride = false;
        assert!(!attendance.wants_ride());
    }

    // -------------------------------------------------------------------------
    // Availability Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_mark_driving_seeds_from_driver() {
        let availability = EventDriverAvailability::mark_driving("e1", &driver());

        assert!(availability.is_driving);
        assert_eq!(availability.available_seats_total, Some(4));
        assert_eq!(availability.available_child_seats, Some(2));
        assert_eq!(availability.direction, Direction::Both);
    }

    #[test]
    fn test_seat_counts_fall_back_to_driver() {
        let json = r#"{"eventId":"e1","driverId":"d1","isDriving":true,"direction":"to"}"#;
        let availability: EventDriverAvailability =
            serde_json::from_str(json).expect("Failed to parse availability JSON");

        assert_eq!(availability.direction, Direction::To);
        assert_eq!(availability.seats_total(&driver()), 4);
        assert_eq!(availability.child_seats(&driver()), 2);
    }

    #[test]
    fn test_seat_counts_prefer_event_override() {
        let mut availability = EventDriverAvailability::mark_driving("e1", &driver());
        availability.available_seats_total = Some(1);
        availability.available_child_seats = Some(0);

        assert_eq!(availability.seats_total(&driver()), 1);
        assert_eq!(availability.child_seats(&driver()), 0);
    }

    // -------------------------------------------------------------------------
    // Event Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_event_formatted_date() {
        let json = r#"{"id":"e1","name":"Away game","startsAt":"2026-02-06T19:00:00"}"#;
        let event: Event = serde_json::from_str(json).expect("Failed to parse event JSON");

        assert_eq!(event.formatted_date(), "Feb 06, 2026 @ 07:00 PM");
        assert_eq!(event.direction, Direction::Both);
    }

    #[test]
    fn test_event_formatted_date_missing() {
        let event: Event = serde_json::from_str(r#"{"id":"e1","name":"Practice"}"#)
            .expect("Failed to parse event JSON");
        assert_eq!(event.formatted_date(), "TBD");
    }
}
