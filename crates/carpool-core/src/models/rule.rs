use serde::{Deserialize, Serialize};

use super::{DriverId, PlayerId};

/// Soft weight a rule puts on a driver/player pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    #[default]
    None,
    Prefer,
    Always,
}

impl std::fmt::Display for Preference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Preference::None => write!(f, "None"),
            Preference::Prefer => write!(f, "Prefer"),
            Preference::Always => write!(f, "Always"),
        }
    }
}

/// Override for a single (driver, player) pair. Pairs without a rule are
/// allowed with no preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct EligibilityRule {
    pub driver_id: DriverId,
    pub player_id: PlayerId,
    #[serde(default = "default_allowed")]
    pub allowed: bool,
    #[serde(default)]
    pub preference: Preference,
}

fn default_allowed() -> bool {
    true
}

impl EligibilityRule {
    pub fn matches(&self, driver_id: &str, player_id: &str) -> bool {
        self.driver_id == driver_id && self.player_id == player_id
    }
}
