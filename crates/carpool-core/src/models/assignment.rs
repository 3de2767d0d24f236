use serde::{Deserialize, Serialize};

use super::{Direction, DriverId, EventId, PlayerId};

/// Sentinel stored in place of a driver id when a player has no ride
const UNASSIGNED: &str = "unassigned";

/// Who a player rides with.
///
/// On the wire this is a plain string: the driver id, or `"unassigned"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RideDriver {
    Assigned(DriverId),
    Unassigned,
}

impl RideDriver {
    pub fn driver_id(&self) -> Option<&str> {
        match self {
            RideDriver::Assigned(id) => Some(id),
            RideDriver::Unassigned => None,
        }
    }

    pub fn is_assigned(&self) -> bool {
        matches!(self, RideDriver::Assigned(_))
    }

    /// Parse a stored driver id, where exactly "unassigned" means no driver
    pub fn parse(value: &str) -> Self {
        RideDriver::from(value.to_string())
    }
}

impl From<String> for RideDriver {
    fn from(value: String) -> Self {
        if value == UNASSIGNED {
            RideDriver::Unassigned
        } else {
            RideDriver::Assigned(value)
        }
    }
}

impl From<RideDriver> for String {
    fn from(driver: RideDriver) -> Self {
        match driver {
            RideDriver::Assigned(id) => id,
            RideDriver::Unassigned => UNASSIGNED.to_string(),
        }
    }
}

impl std::fmt::Display for RideDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RideDriver::Assigned(id) => write!(f, "{}", id),
            RideDriver::Unassigned => write!(f, "Unassigned"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub event_id: EventId,
    #[serde(rename = "driverId")]
    #[cfg_attr(feature = "ts", ts(type = "string"))]
    pub driver: RideDriver,
    pub player_id: PlayerId,
    #[serde(default)]
    pub direction: Direction,
}

impl Assignment {
    /// Build an assignment whose id is derived from (event, player).
    /// A player has at most one ride per event, so the id is unique and
    /// regenerating with the same inputs yields the same ids.
    pub fn new(event_id: &str, player_id: &str, driver: RideDriver) -> Self {
        Self {
            id: Self::id_for(event_id, player_id),
            event_id: event_id.to_string(),
            driver,
            player_id: player_id.to_string(),
            direction: Direction::Both,
        }
    }

    pub fn id_for(event_id: &str, player_id: &str) -> String {
        format!("{}:{}", event_id, player_id)
    }

    pub fn is_for(&self, event_id: &str, player_id: &str) -> bool {
        self.event_id == event_id && self.player_id == player_id
    }
}
