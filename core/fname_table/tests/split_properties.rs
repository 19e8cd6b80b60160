//! Property tests for trailing-number splitting.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use fname_table::{split_trailing_number, FindName, NameRegistry, NameTableConfig};
use proptest::prelude::*;

proptest! {
    /// Splitting then re-joining reproduces the input exactly.
    #[test]
    fn prop_split_rejoins(base in "[A-Za-z][A-Za-z0-9_]{0,12}", number in 0i32..1_000_000) {
        let text = format!("{base}_{number}");
        let (split_base, split_number) = split_trailing_number(&text).unwrap();
        prop_assert_eq!(format!("{split_base}_{split_number}"), text);
    }

    /// A digit run with a leading zero never splits.
    #[test]
    fn prop_leading_zero_never_splits(base in "[A-Za-z]{1,8}", digits in "0[0-9]{1,6}") {
        let text = format!("{base}_{digits}");
        prop_assert_eq!(split_trailing_number(&text), None);
    }

    /// Names print back exactly as they were written, split or not.
    #[test]
    fn prop_to_string_round_trips(text in "[A-Za-z][A-Za-z0-9_]{0,16}") {
        let registry = NameRegistry::bootstrap(NameTableConfig::compact().with_case_preserving(true)).unwrap();
        let name = registry.find_or_add(&text, FindName::Add);
        prop_assert_eq!(registry.name_string(name), text);
    }
}
