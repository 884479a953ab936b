#![allow(clippy::unwrap_used)]

mod common;

use common::recording_logger;
use proptest::prelude::*;
use relaylog_core::{Context, Severity, ThresholdSet, ThresholdSetting};
use std::collections::HashSet;

proptest! {
    #[test]
    fn ceiling_resolves_to_reverse_lookup_of_range(n in -20i64..40) {
        let set = ThresholdSet::resolve(&ThresholdSetting::Ceiling(n));

        let expected: HashSet<Severity> = (1..=n).filter_map(Severity::from_rank).collect();
        let actual: HashSet<Severity> = set.iter().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn explicit_ranks_keep_only_table_entries(ranks in proptest::collection::vec(-5i64..15, 0..12)) {
        let set = ThresholdSet::resolve(&ThresholdSetting::Ranks(ranks.clone()));

        for sev in Severity::ALL {
            prop_assert_eq!(set.contains(sev), ranks.contains(&i64::from(sev.rank())));
        }
    }

    #[test]
    fn log_returns_membership_of_threshold(n in 0i64..10, rank in 1i64..=8) {
        let (logger, log) = recording_logger(ThresholdSetting::Ceiling(n));
        let level = Severity::from_rank(rank).unwrap();

        let logged = logger.log(level, "probe", &Context::new()).unwrap();

        prop_assert_eq!(logged, rank <= n);
        prop_assert_eq!(log.calls().len(), usize::from(logged));
    }

    #[test]
    fn messages_without_braces_pass_through(text in "[^{}]{0,64}") {
        let (logger, log) = recording_logger(ThresholdSetting::Ceiling(8));
        logger.info(text.as_str(), &Context::new().with("k", "v")).unwrap();
        prop_assert_eq!(&log.calls()[0].message, &text);
    }
}

#[test]
fn test_ceiling_five_admits_debug_before_warning() {
    let set = ThresholdSet::resolve(&ThresholdSetting::Ceiling(5));
    let names: Vec<&str> = set.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["emergency", "alert", "critical", "error", "debug"]);
}
