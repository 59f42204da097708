//! Property tests for pruning-candidate selection.

use std::collections::HashSet;
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use proptest::prelude::*;

use revroot::domain::services::{order_most_recent_first, prune_candidates, RevEntry};
use revroot::RetentionWidth;

fn entries(times: &[u64]) -> Vec<RevEntry> {
    times
        .iter()
        .enumerate()
        .map(|(i, secs)| {
            RevEntry::new(
                PathBuf::from(format!("/srv/revs/r{i}")),
                SystemTime::UNIX_EPOCH + Duration::from_secs(*secs),
            )
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: candidates are never among the newest K nor protected, and
    /// every other entry is a candidate.
    #[test]
    fn property_candidates_partition_entries(
        times in proptest::collection::vec(0u64..1_000, 0..24),
        keep in 1usize..8,
        protected_idx in proptest::collection::vec(0usize..24, 0..3),
    ) {
        let mut ordered = entries(&times);
        order_most_recent_first(&mut ordered);
        let protected: HashSet<OsString> = protected_idx
            .iter()
            .map(|i| OsString::from(format!("r{i}")))
            .collect();

        let candidates: Vec<PathBuf> = prune_candidates(
            ordered.clone(),
            RetentionWidth::new(keep).unwrap(),
            protected.iter().cloned(),
        )
        .collect();

        let kept: HashSet<_> = ordered.iter().take(keep).map(|e| e.path.clone()).collect();
        for path in &candidates {
            prop_assert!(!kept.contains(path));
            let name = path.file_name().unwrap().to_os_string();
            prop_assert!(!protected.contains(&name));
        }

        let expected: Vec<PathBuf> = ordered
            .iter()
            .skip(keep)
            .filter(|e| !protected.contains(e.path.file_name().unwrap()))
            .map(|e| e.path.clone())
            .collect();
        prop_assert_eq!(candidates, expected);
    }

    /// PROPERTY: ordering is newest first regardless of input order.
    #[test]
    fn property_order_is_newest_first(times in proptest::collection::vec(0u64..1_000, 0..24)) {
        let mut ordered = entries(&times);
        order_most_recent_first(&mut ordered);

        for pair in ordered.windows(2) {
            prop_assert!(pair[0].created >= pair[1].created);
        }
    }
}
