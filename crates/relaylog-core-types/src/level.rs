//! Level table: severity names and their fixed numeric ranks
//!
//! Ranks are compatibility-significant and intentionally not ordered by
//! conventional importance: `debug` (5) sits numerically ahead of
//! `warning` (6), `notice` (7) and `info` (8). Threshold arithmetic works
//! on these ranks, so the table must not be "fixed".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A named log severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Emergency,
    Alert,
    Critical,
    Error,
    Debug,
    Warning,
    Notice,
    Info,
}

/// Returned when a severity name is not in the level table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{input} is an invalid log level")]
pub struct UnknownSeverity {
    pub input: String,
}

impl Severity {
    /// Every severity, in level-table order (ascending rank)
    pub const ALL: [Severity; 8] = [
        Severity::Emergency,
        Severity::Alert,
        Severity::Critical,
        Severity::Error,
        Severity::Debug,
        Severity::Warning,
        Severity::Notice,
        Severity::Info,
    ];

    /// Fixed numeric rank of this severity
    pub fn rank(self) -> u8 {
        match self {
            Severity::Emergency => 1,
            Severity::Alert => 2,
            Severity::Critical => 3,
            Severity::Error => 4,
            Severity::Debug => 5,
            Severity::Warning => 6,
            Severity::Notice => 7,
            Severity::Info => 8,
        }
    }

    /// Lowercase table name
    pub fn name(self) -> &'static str {
        match self {
            Severity::Emergency => "emergency",
            Severity::Alert => "alert",
            Severity::Critical => "critical",
            Severity::Error => "error",
            Severity::Debug => "debug",
            Severity::Warning => "warning",
            Severity::Notice => "notice",
            Severity::Info => "info",
        }
    }

    /// Reverse lookup: rank to severity
    ///
    /// Ranks outside the table resolve to `None`.
    pub fn from_rank(rank: i64) -> Option<Severity> {
        Self::ALL.into_iter().find(|s| i64::from(s.rank()) == rank)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sev| sev.name() == s)
            .ok_or_else(|| UnknownSeverity {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_match_table() {
        let expected = [
            ("emergency", 1),
            ("alert", 2),
            ("critical", 3),
            ("error", 4),
            ("debug", 5),
            ("warning", 6),
            ("notice", 7),
            ("info", 8),
        ];
        for (sev, (name, rank)) in Severity::ALL.iter().zip(expected) {
            assert_eq!(sev.name(), name);
            assert_eq!(sev.rank(), rank);
        }
    }

    #[test]
    fn test_ranks_are_unique() {
        let mut ranks: Vec<u8> = Severity::ALL.iter().map(|s| s.rank()).collect();
        ranks.sort_unstable();
        ranks.dedup();
        assert_eq!(ranks.len(), Severity::ALL.len());
    }

    #[test]
    fn test_debug_ranks_ahead_of_warning() {
        assert!(Severity::Debug.rank() < Severity::Warning.rank());
        assert!(Severity::Debug.rank() < Severity::Info.rank());
    }

    #[test]
    fn test_from_rank_round_trips_every_entry() {
        for sev in Severity::ALL {
            assert_eq!(Severity::from_rank(i64::from(sev.rank())), Some(sev));
        }
        assert_eq!(Severity::from_rank(0), None);
        assert_eq!(Severity::from_rank(9), None);
        assert_eq!(Severity::from_rank(-1), None);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!("warning".parse::<Severity>(), Ok(Severity::Warning));
        let err = "WARNING".parse::<Severity>().unwrap_err();
        assert_eq!(err.input, "WARNING");
        assert_eq!(err.to_string(), "WARNING is an invalid log level");
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
        let back: Severity = serde_json::from_str("\"notice\"").unwrap();
        assert_eq!(back, Severity::Notice);
    }
}
