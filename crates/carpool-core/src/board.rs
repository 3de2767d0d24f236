//! Ride board: assignments grouped by car for display.
//!
//! Built from whatever assignment list the consumer holds, whether it came
//! straight from the engine or was edited by hand afterwards. Manual edits
//! can overfill a car, so each car reports whether it is full or over.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::models::{Assignment, Driver, DriverId, EventDriverAvailability, Player, PlayerId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarLoad {
    pub driver_id: DriverId,
    pub driver_name: String,
    pub seats_total: u32,
    pub child_seats: u32,
    pub riders: Vec<PlayerId>,
    pub child_seat_riders: u32,
}

impl CarLoad {
    pub fn assigned(&self) -> u32 {
        self.riders.len() as u32
    }

    /// No seat left (or fewer than none)
    pub fn is_full(&self) -> bool {
        self.assigned() >= self.seats_total
    }

    pub fn is_over_capacity(&self) -> bool {
        self.assigned() > self.seats_total || self.child_seat_riders > self.child_seats
    }

    /// Compact load for list view: "3/4 (1/1 child)"
    pub fn load_display(&self) -> String {
        if self.child_seats == 0 && self.child_seat_riders == 0 {
            format!("{}/{}", self.assigned(), self.seats_total)
        } else {
            format!(
                "{}/{} ({}/{} child)",
                self.assigned(),
                self.seats_total,
                self.child_seat_riders,
                self.child_seats
            )
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RideBoard {
    /// One entry per active driver, in availability order
    pub cars: Vec<CarLoad>,
    pub unassigned: Vec<PlayerId>,
    /// Rides pointing at a driver with no active availability
    pub orphaned: Vec<Assignment>,
}

impl RideBoard {
    pub fn build(
        assignments: &[Assignment],
        availabilities: &[EventDriverAvailability],
        drivers: &[Driver],
        players: &[Player],
    ) -> Self {
        let drivers_by_id: HashMap<&str, &Driver> =
            drivers.iter().map(|d| (d.id.as_str(), d)).collect();
        let child_seat_players: HashSet<&str> = players
            .iter()
            .filter(|p| p.needs_child_seat)
            .map(|p| p.id.as_str())
            .collect();

        let mut board = Self::default();
        let mut index: HashMap<&str, usize> = HashMap::new();
        for availability in availabilities.iter().filter(|a| a.is_driving) {
            let Some(driver) = drivers_by_id.get(availability.driver_id.as_str()) else {
                continue;
            };
            if index.contains_key(driver.id.as_str()) {
                continue;
            }
            index.insert(driver.id.as_str(), board.cars.len());
            board.cars.push(CarLoad {
                driver_id: driver.id.clone(),
                driver_name: driver.name.clone(),
                seats_total: availability.seats_total(driver),
                child_seats: availability.child_seats(driver),
                riders: Vec::new(),
                child_seat_riders: 0,
            });
        }

        for assignment in assignments {
            let Some(driver_id) = assignment.driver.driver_id() else {
                board.unassigned.push(assignment.player_id.clone());
                continue;
            };
            match index.get(driver_id) {
                Some(&i) => {
                    let car = &mut board.cars[i];
                    car.riders.push(assignment.player_id.clone());
                    if child_seat_players.contains(assignment.player_id.as_str()) {
                        car.child_seat_riders += 1;
                    }
                }
                None => board.orphaned.push(assignment.clone()),
            }
        }
        board
    }

    pub fn car(&self, driver_id: &str) -> Option<&CarLoad> {
        self.cars.iter().find(|c| c.driver_id == driver_id)
    }

    pub fn over_capacity(&self) -> impl Iterator<Item = &CarLoad> {
        self.cars.iter().filter(|c| c.is_over_capacity())
    }

    pub fn total_seats(&self) -> u32 {
        self.cars.iter().map(|c| c.seats_total).sum()
    }

    pub fn total_riders(&self) -> u32 {
        self.cars.iter().map(|c| c.assigned()).sum()
    }
}
