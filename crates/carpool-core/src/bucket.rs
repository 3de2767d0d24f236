//! Per-driver capacity buckets for a single engine run.
//!
//! A bucket tracks how many seats a driver still has free while the
//! engine walks the candidate list. Buckets are built fresh on every run
//! and thrown away afterwards; only the assignments derived from them
//! leave the engine.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{Direction, Driver, DriverId, EventDriverAvailability, PlayerId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub driver_id: DriverId,
    pub direction: Direction,
    pub remaining_seats: u32,
    pub remaining_child_seats: u32,
    pub assigned_player_ids: Vec<PlayerId>,
}

impl Bucket {
    pub fn new(availability: &EventDriverAvailability, driver: &Driver) -> Self {
        Self {
            driver_id: availability.driver_id.clone(),
            direction: availability.direction,
            remaining_seats: availability.seats_total(driver),
            remaining_child_seats: availability.child_seats(driver),
            assigned_player_ids: Vec::new(),
        }
    }

    /// Whether there is room for one more rider with the given seat need
    pub fn has_room(&self, needs_child_seat: bool) -> bool {
        self.remaining_seats > 0 && (!needs_child_seat || self.remaining_child_seats > 0)
    }

    /// Seat a rider. Returns false and leaves the bucket untouched when
    /// there is no room, so counters never go below zero.
    pub fn take(&mut self, player_id: &str, needs_child_seat: bool) -> bool {
        if !self.has_room(needs_child_seat) {
            return false;
        }
        self.remaining_seats -= 1;
        if needs_child_seat {
            self.remaining_child_seats -= 1;
        }
        self.assigned_player_ids.push(player_id.to_string());
        true
    }
}

/// Buckets for every active driver, in availability order, with an index
/// by driver id.
#[derive(Debug, Default)]
pub struct BucketArena {
    buckets: Vec<Bucket>,
    index: HashMap<DriverId, usize>,
}

impl BucketArena {
    /// Build one bucket per availability with `is_driving` set.
    ///
    /// Availabilities that reference an unknown driver are skipped, as is
    /// any second availability for a driver that already has a bucket.
    pub fn from_availability(
        availabilities: &[EventDriverAvailability],
        drivers: &[Driver],
    ) -> Self {
        let drivers_by_id: HashMap<&str, &Driver> =
            drivers.iter().map(|d| (d.id.as_str(), d)).collect();

        let mut arena = Self::default();
        for availability in availabilities.iter().filter(|a| a.is_driving) {
            let Some(driver) = drivers_by_id.get(availability.driver_id.as_str()) else {
                debug!(
                    driver_id = %availability.driver_id,
                    "Skipping availability for unknown driver"
                );
                continue;
            };
            if arena.index.contains_key(&availability.driver_id) {
                debug!(driver_id = %availability.driver_id, "Skipping duplicate availability");
                continue;
            }
            arena.index.insert(availability.driver_id.clone(), arena.buckets.len());
            arena.buckets.push(Bucket::new(availability, driver));
        }
        arena
    }

    pub fn get(&self, driver_id: &str) -> Option<&Bucket> {
        self.index.get(driver_id).map(|&i| &self.buckets[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bucket> {
        self.buckets.iter()
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut Bucket> {
        self.buckets.get_mut(position)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
