//! Data models for carpool records.
//!
//! Every record here is a plain value object handed to the engine by a
//! collaborator (roster store, event store, UI) and handed back unchanged
//! or replaced. Nothing in this module holds state between calls.
//!
//! - `Player`, `Driver`: Roster entries
//! - `Event`, `EventAttendance`, `EventDriverAvailability`: Per-event inputs
//! - `EligibilityRule`, `Preference`: Driver/player pairing overrides
//! - `Assignment`, `RideDriver`: Engine output

pub mod assignment;
pub mod event;
pub mod person;
pub mod rule;

pub use assignment::{Assignment, RideDriver};
pub use event::{Direction, Event, EventAttendance, EventDriverAvailability};
pub use person::{Driver, Player};
pub use rule::{EligibilityRule, Preference};

/// Opaque player identifier.
pub type PlayerId = String;

/// Opaque driver identifier.
pub type DriverId = String;

/// Opaque event identifier.
pub type EventId = String;
