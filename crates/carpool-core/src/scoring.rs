//! Scoring weights for choosing between feasible drivers.

use serde::{Deserialize, Serialize};

use crate::models::Preference;

/// Base score every feasible driver gets
pub const DEFAULT_BASE_SCORE: u32 = 10;

/// Bonus for a `prefer` rule
pub const DEFAULT_PREFER_BONUS: u32 = 20;

/// Bonus for an `always` rule
pub const DEFAULT_ALWAYS_BONUS: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringWeights {
    pub base: u32,
    pub prefer: u32,
    pub always: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE_SCORE,
            prefer: DEFAULT_PREFER_BONUS,
            always: DEFAULT_ALWAYS_BONUS,
        }
    }
}

impl ScoringWeights {
    pub fn score(&self, preference: Preference) -> u32 {
        let bonus = match preference {
            Preference::None => 0,
            Preference::Prefer => self.prefer,
            Preference::Always => self.always,
        };
        self.base.saturating_add(bonus)
    }
}
