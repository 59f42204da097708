//! Property tests for root-relative path resolution.

use std::path::PathBuf;

use proptest::prelude::*;

use revroot::PathSpace;

fn segments() -> impl Strategy<Value = Vec<String>> {
    let segment = proptest::string::string_regex("[A-Za-z0-9_-]{1,12}").unwrap();
    proptest::collection::vec(segment, 0..=4)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `path(segments)` is the root joined with each segment in turn.
    #[test]
    fn property_path_joins_in_order(segs in segments()) {
        let space = PathSpace::new("/srv/app");

        let mut expected = PathBuf::from("/srv/app");
        for seg in &segs {
            expected.push(seg);
        }

        prop_assert_eq!(space.path(&segs), expected);
    }

    /// PROPERTY: scratch paths always live under the temp directory.
    #[test]
    fn property_temp_paths_stay_in_temp_dir(segs in segments()) {
        let space = PathSpace::new("/srv/app");

        prop_assert!(space.temp_path(&segs).starts_with(space.temp_dir()));
    }
}
