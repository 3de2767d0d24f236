use serde::{Deserialize, Serialize};

use super::{DriverId, PlayerId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub needs_child_seat: bool,
    #[serde(default)]
    pub group_ids: Vec<String>,
}

impl Player {
    /// Name with team label for list views: "Ava (U10 Blue)"
    pub fn display_name(&self) -> String {
        if self.team.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.team)
        }
    }

    pub fn in_group(&self, group_id: &str) -> bool {
        self.group_ids.iter().any(|g| g == group_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    #[serde(default)]
    pub has_license: bool,
    // Global defaults; an event availability may override both
    pub max_seats_total: u32,
    #[serde(default)]
    pub max_child_seats: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_parses_camel_case() {
        let json = r#"{
            "id": "p1",
            "name": "Ava",
            "team": "U10 Blue",
            "grade": "4",
            "needsChildSeat": true,
            "groupIds": ["g1"]
        }"#;
        let player: Player = serde_json::from_str(json).expect("Failed to parse player JSON");

        assert!(player.needs_child_seat);
        assert!(player.in_group("g1"));
        assert!(!player.in_group("g2"));
        assert_eq!(player.display_name(), "Ava (U10 Blue)");
    }

    #[test]
    fn test_player_optional_fields_default() {
        let player: Player = serde_json::from_str(r#"{"id":"p2","name":"Ben"}"#)
            .expect("Failed to parse minimal player JSON");

        assert!(!player.needs_child_seat);
        assert!(player.group_ids.is_empty());
        assert_eq!(player.display_name(), "Ben");
    }

    #[test]
    fn test_driver_child_seats_default_to_zero() {
        let driver: Driver = serde_json::from_str(r#"{"id":"d1","name":"Sam","maxSeatsTotal":4}"#)
            .expect("Failed to parse driver JSON");

        assert_eq!(driver.max_seats_total, 4);
        assert_eq!(driver.max_child_seats, 0);
        assert!(!driver.has_license);
    }
}
