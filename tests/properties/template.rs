//! Property tests for placeholder rendering.

use proptest::prelude::*;

use rowpush::{render, Bindings};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Text without an opening brace pair renders unchanged.
    #[test]
    fn property_plain_text_is_unchanged(text in "[^{]{0,80}") {
        prop_assert_eq!(render(&text, &Bindings::new()).unwrap(), text);
    }

    /// PROPERTY: Bound values are inserted verbatim and never re-scanned.
    #[test]
    fn property_values_are_not_rescanned(
        prefix in "[a-z/]{0,16}",
        value in ".{0,32}",
    ) {
        let bindings = Bindings::from([("target", value.clone())]);
        let out = render(&format!("{prefix}{{{{ .target }}}}.html"), &bindings).unwrap();
        prop_assert_eq!(out, format!("{prefix}{value}.html"));
    }
}
