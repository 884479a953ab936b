//! Threshold resolution
//!
//! A threshold is configured either as a single ceiling `N` or as an explicit
//! list of ranks. A ceiling is expanded to the integer range `1..=N` and every
//! number is reverse-looked-up through the level table, so the result is
//! purely rank based. With the table's ordering this means a ceiling of 5
//! admits `debug` but not `warning`.

use relaylog_core_types::Severity;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const MAX_RANK: i64 = 8;

/// Configured threshold value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThresholdSetting {
    /// Record every rank in `1..=N`
    Ceiling(i64),
    /// Record exactly these ranks
    Ranks(Vec<i64>),
}

impl Default for ThresholdSetting {
    fn default() -> Self {
        ThresholdSetting::Ceiling(4)
    }
}

/// Immutable set of severities a logger records
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThresholdSet {
    levels: HashSet<Severity>,
}

impl ThresholdSet {
    /// Resolve a setting into the concrete set of loggable severities
    ///
    /// Unknown ranks are dropped silently.
    pub fn resolve(setting: &ThresholdSetting) -> Self {
        let ranks: Vec<i64> = match setting {
            // Ranks above the table never match, so the range is capped there.
            ThresholdSetting::Ceiling(n) => (1..=(*n).min(MAX_RANK)).collect(),
            ThresholdSetting::Ranks(ranks) => ranks.clone(),
        };

        let levels = ranks.into_iter().filter_map(Severity::from_rank).collect();
        Self { levels }
    }

    /// Membership test
    pub fn contains(&self, level: Severity) -> bool {
        self.levels.contains(&level)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Loggable severities in level-table order
    pub fn iter(&self) -> impl Iterator<Item = Severity> + '_ {
        Severity::ALL.into_iter().filter(|s| self.levels.contains(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(set: &ThresholdSet) -> Vec<&'static str> {
        set.iter().map(|s| s.name()).collect()
    }

    #[test]
    fn test_ceiling_three() {
        let set = ThresholdSet::resolve(&ThresholdSetting::Ceiling(3));
        assert_eq!(names(&set), vec!["emergency", "alert", "critical"]);
    }

    #[test]
    fn test_ceiling_five_includes_debug_not_warning() {
        let set = ThresholdSet::resolve(&ThresholdSetting::Ceiling(5));
        assert!(set.contains(Severity::Debug));
        assert!(!set.contains(Severity::Warning));
        assert!(!set.contains(Severity::Notice));
        assert!(!set.contains(Severity::Info));
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn test_ceiling_zero_and_negative_are_empty() {
        assert!(ThresholdSet::resolve(&ThresholdSetting::Ceiling(0)).is_empty());
        assert!(ThresholdSet::resolve(&ThresholdSetting::Ceiling(-3)).is_empty());
    }

    #[test]
    fn test_ceiling_above_table_saturates() {
        let set = ThresholdSet::resolve(&ThresholdSetting::Ceiling(12));
        assert_eq!(set.len(), Severity::ALL.len());
    }

    #[test]
    fn test_explicit_ranks_drop_unknowns() {
        let set = ThresholdSet::resolve(&ThresholdSetting::Ranks(vec![8, 0, 2, 17, 2]));
        assert_eq!(names(&set), vec!["alert", "info"]);
    }

    #[test]
    fn test_default_is_ceiling_four() {
        let set = ThresholdSet::resolve(&ThresholdSetting::default());
        assert_eq!(names(&set), vec!["emergency", "alert", "critical", "error"]);
    }

    #[test]
    fn test_setting_deserializes_untagged() {
        let ceiling: ThresholdSetting = serde_json::from_str("7").unwrap();
        assert_eq!(ceiling, ThresholdSetting::Ceiling(7));
        let ranks: ThresholdSetting = serde_json::from_str("[1, 5]").unwrap();
        assert_eq!(ranks, ThresholdSetting::Ranks(vec![1, 5]));
    }
}
