//! Driver/player eligibility lookup.
//!
//! Rules are sparse: a pair with no rule is allowed with no preference.
//! When several rules name the same pair, the first one in input order
//! is used and the rest are ignored.

use std::collections::HashMap;

use tracing::warn;

use crate::models::{EligibilityRule, Preference};

/// Resolved answer for one (driver, player) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eligibility {
    pub allowed: bool,
    pub preference: Preference,
}

impl Default for Eligibility {
    fn default() -> Self {
        Self {
            allowed: true,
            preference: Preference::None,
        }
    }
}

impl From<&EligibilityRule> for Eligibility {
    fn from(rule: &EligibilityRule) -> Self {
        Self {
            allowed: rule.allowed,
            preference: rule.preference,
        }
    }
}

/// Look up a pair in the full, unfiltered rule list.
pub fn resolve(driver_id: &str, player_id: &str, rules: &[EligibilityRule]) -> Eligibility {
    rules
        .iter()
        .find(|r| r.matches(driver_id, player_id))
        .map(Eligibility::from)
        .unwrap_or_default()
}

/// Hash index over a rule list, built once per engine run.
///
/// Answers exactly what [`resolve`] would for the same rules.
#[derive(Debug, Default)]
pub struct EligibilityTable<'a> {
    // driver id -> player id -> answer
    rules: HashMap<&'a str, HashMap<&'a str, Eligibility>>,
    len: usize,
    duplicates: usize,
}

impl<'a> EligibilityTable<'a> {
    pub fn new(rules: &'a [EligibilityRule]) -> Self {
        let mut table = Self::default();
        for rule in rules {
            let by_player = table.rules.entry(rule.driver_id.as_str()).or_default();
            if by_player.contains_key(rule.player_id.as_str()) {
                table.duplicates += 1;
                continue;
            }
            by_player.insert(rule.player_id.as_str(), Eligibility::from(rule));
            table.len += 1;
        }

        if table.duplicates > 0 {
            warn!(
                duplicates = table.duplicates,
                "Duplicate eligibility rules found, using the first rule for each pair"
            );
        }
        table
    }

    pub fn resolve(&self, driver_id: &str, player_id: &str) -> Eligibility {
        self.rules
            .get(driver_id)
            .and_then(|by_player| by_player.get(player_id))
            .copied()
            .unwrap_or_default()
    }

    /// Number of rules skipped because an earlier rule named the same pair
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(driver: &str, player: &str, allowed: bool, preference: Preference) -> EligibilityRule {
        EligibilityRule {
            driver_id: driver.to_string(),
            player_id: player.to_string(),
            allowed,
            preference,
        }
    }

    #[test]
    fn test_resolve_missing_rule_is_permissive() {
        let rules = vec![rule("d1", "p2", false, Preference::None)];
        let result = resolve("d1", "p1", &rules);

        assert!(result.allowed);
        assert_eq!(result.preference, Preference::None);
        assert_eq!(resolve("d9", "p9", &[]), Eligibility::default());
    }

    #[test]
    fn test_resolve_exact_match_only() {
        let rules = vec![
            rule("d1", "p1", true, Preference::Always),
            rule("d2", "p1", false, Preference::None),
        ];

        assert_eq!(resolve("d1", "p1", &rules).preference, Preference::Always);
        assert!(!resolve("d2", "p1", &rules).allowed);
        assert!(resolve("d1", "p2", &rules).allowed);
    }

    #[test]
    fn test_resolve_first_duplicate_wins() {
        let rules = vec![
            rule("d1", "p1", false, Preference::None),
            rule("d1", "p1", true, Preference::Prefer),
        ];

        let result = resolve("d1", "p1", &rules);
        assert!(!result.allowed);
        assert_eq!(result.preference, Preference::None);
    }

    #[test]
    fn test_table_agrees_with_resolve() {
        let rules = vec![
            rule("d1", "p1", true, Preference::Prefer),
            rule("d1", "p1", false, Preference::Always),
            rule("d2", "p2", false, Preference::None),
        ];
        let table = EligibilityTable::new(&rules);

        assert_eq!(table.len(), 2);
        assert_eq!(table.duplicates(), 1);
        for (driver, player) in [("d1", "p1"), ("d2", "p2"), ("d3", "p1")] {
            assert_eq!(table.resolve(driver, player), resolve(driver, player, &rules));
        }
    }

    #[test]
    fn test_empty_table() {
        let table = EligibilityTable::new(&[]);
        assert!(table.is_empty());
        assert_eq!(table.resolve("d1", "p1"), Eligibility::default());
    }
}
