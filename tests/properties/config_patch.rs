//! Property tests for build path patching.

use proptest::prelude::*;

use plugdeploy::application::patch_placeholder;

const PLACEHOLDER: &str = "build/build";

fn base_dir() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9_-]{1,12}").unwrap();
    proptest::collection::vec(segment, 1..=4)
        .prop_map(|segments| format!("/{}", segments.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Content without the placeholder is left untouched.
    #[test]
    fn property_no_placeholder_no_change(
        content in "[a-z :\n]{0,200}",
        base in base_dir(),
    ) {
        let (out, replaced, _) = patch_placeholder(&content, PLACEHOLDER, &base);
        prop_assert_eq!(out, content);
        prop_assert_eq!(replaced, 0);
    }

    /// PROPERTY: Patching twice equals patching once.
    #[test]
    fn property_patch_is_idempotent(
        pieces in proptest::collection::vec("[a-z :\n]{0,20}", 1..6),
        base in base_dir(),
    ) {
        let content = pieces.join(PLACEHOLDER);
        let (once, replaced, _) = patch_placeholder(&content, PLACEHOLDER, &base);
        let (twice, again, _) = patch_placeholder(&once, PLACEHOLDER, &base);
        prop_assert_eq!(replaced, pieces.len() - 1);
        prop_assert_eq!(again, 0);
        prop_assert_eq!(once, twice);
    }
}
