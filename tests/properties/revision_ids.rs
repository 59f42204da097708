//! Property tests for revision identifiers.

use proptest::prelude::*;

use revroot::RevisionId;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9.-]{1,16}")
        .unwrap()
        .prop_filter("not a dot segment", |s| s != "." && s != "..")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing arbitrary directory names never panics.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,64}") {
        let _ = RevisionId::parse(&s);
    }

    /// PROPERTY: a compound id round-trips through its directory name.
    #[test]
    fn property_compound_round_trip(
        config in segment(),
        code in proptest::string::string_regex("[A-Za-z0-9._-]{1,16}")
            .unwrap()
            .prop_filter("not a dot segment", |s| s != "." && s != ".."),
    ) {
        let id = RevisionId::compound(config.clone(), code.clone()).unwrap();
        let parsed = RevisionId::parse(&id.dir_name()).unwrap();

        prop_assert_eq!(parsed.config_rev(), Some(config.as_str()));
        prop_assert_eq!(parsed.code_rev(), code.as_str());
        prop_assert_eq!(parsed, id);
    }

    /// PROPERTY: a bare code revision without the separator round-trips.
    #[test]
    fn property_bare_round_trip(code in segment()) {
        let id = RevisionId::code(code).unwrap();
        prop_assert_eq!(RevisionId::parse(&id.to_string()).unwrap(), id);
    }

    /// PROPERTY: names with a path separator are never accepted.
    #[test]
    fn property_slash_is_rejected(a in segment(), b in segment()) {
        let name = format!("{a}/{b}");
        prop_assert!(RevisionId::code(name.clone()).is_err());
        prop_assert!(RevisionId::parse(&name).is_err());
    }
}
