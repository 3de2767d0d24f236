//! Carpool core - ride assignment for team events.
//!
//! Given the players who need a ride to an event and the drivers offering
//! seats, the engine assigns each player to a car (or leaves them
//! unassigned) in a single greedy pass that respects seat and child-seat
//! capacity and per-pair eligibility rules, and favours preferred drivers.
//!
//! The two entry points are:
//!
//! - [`generate_assignments`]: build the full assignment list for an event
//! - [`reassign_player`]: move one player by hand afterwards
//!
//! Both are pure functions over in-memory records. Storing, filtering by
//! event and displaying the results is left to the caller; [`RideBoard`]
//! helps with the last part.

pub mod board;
pub mod bucket;
pub mod eligibility;
pub mod engine;
pub mod error;
pub mod models;
pub mod reassign;
pub mod scoring;

pub use board::{CarLoad, RideBoard};
pub use eligibility::{resolve, Eligibility, EligibilityTable};
pub use engine::{generate_assignments, GenerationResult, Generator};
pub use error::CarpoolError;
pub use models::{
    Assignment, Direction, Driver, DriverId, EligibilityRule, Event, EventAttendance,
    EventDriverAvailability, EventId, Player, PlayerId, Preference, RideDriver,
};
pub use reassign::reassign_player;
pub use scoring::ScoringWeights;
