//! Property tests for unit name validation.

use proptest::prelude::*;

use plugdeploy::UnitName;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Validation never panics on arbitrary input.
    #[test]
    fn property_unit_name_never_panics(s in "(?s).{0,128}") {
        let _ = UnitName::new(s);
    }

    /// PROPERTY: Anything containing a path separator is rejected.
    #[test]
    fn property_separators_are_rejected(
        head in "[A-Za-z0-9_.-]{0,12}",
        sep in prop_oneof![Just('/'), Just('\\')],
        tail in "[A-Za-z0-9_.-]{0,12}",
    ) {
        let raw = format!("{head}{sep}{tail}");
        prop_assert!(UnitName::new(raw).is_err());
    }

    /// PROPERTY: Plain identifiers are accepted unchanged.
    #[test]
    fn property_plain_names_round_trip(raw in "[A-Za-z_][A-Za-z0-9_-]{0,31}") {
        let name = UnitName::new(raw.clone()).unwrap();
        prop_assert_eq!(name.as_str(), raw.as_str());
        prop_assert_eq!(name.with_extension("py"), format!("{raw}.py"));
    }
}
