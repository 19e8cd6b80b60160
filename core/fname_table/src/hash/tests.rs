use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_crc32_check_value() {
    assert_eq!(strcrc32("123456789"), 0xCBF4_3926);
    assert_eq!(strcrc32(""), 0);
}

#[test]
fn test_strihash_ignores_ascii_case() {
    assert_eq!(strihash("Foo"), strihash("FOO"));
    assert_eq!(strihash("Foo"), strihash("foo"));
    assert_eq!(strihash("Foo"), strcrc32("foo"));
    assert_ne!(strihash("Foo"), strihash("Bar"));
}

#[test]
fn test_strihash_folds_unicode() {
    assert_eq!(strihash("ÄPFEL"), strihash("äpfel"));
    assert_eq!(strihash("ΣΟΦΙΑ"), strihash("σοφια"));
}

#[test]
fn test_case_sensitive_hash_differs_by_case() {
    assert_ne!(strcrc32("Foo"), strcrc32("FOO"));
}

#[test]
fn test_eq_ignore_case() {
    assert!(eq_ignore_case("AutoTest", "autoTEST"));
    assert!(eq_ignore_case("Größe", "GRÖßE"));
    assert!(!eq_ignore_case("Foo", "Foo_"));
    assert!(!eq_ignore_case("Foo", "Fo"));
}

#[test]
fn test_cmp_ignore_case_orders_like_lowercase() {
    assert_eq!(cmp_ignore_case("apple", "BANANA"), Ordering::Less);
    assert_eq!(cmp_ignore_case("Zed", "alpha"), Ordering::Greater);
    assert_eq!(cmp_ignore_case("SAME", "same"), Ordering::Equal);
    // Underscore sorts before letters once folded to lowercase.
    assert_eq!(cmp_ignore_case("A_b", "Ab"), Ordering::Less);
}

#[test]
fn test_name_case_dispatch() {
    assert!(NameCase::IgnoreCase.matches("Foo", "fOO"));
    assert!(!NameCase::CaseSensitive.matches("Foo", "fOO"));
    assert_eq!(
        NameCase::IgnoreCase.hash("Foo"),
        NameCase::IgnoreCase.hash("fOO")
    );
}

#[test]
fn test_folded() {
    assert_eq!(folded("MiXeD_Case"), "mixed_case");
}

proptest! {
    #[test]
    fn prop_equal_ignoring_case_hash_equal(s in "[a-zA-Z0-9_ äöüÄÖÜ]{0,24}") {
        let upper = s.to_uppercase();
        let lower = s.to_lowercase();
        if eq_ignore_case(&upper, &lower) {
            prop_assert_eq!(strihash(&upper), strihash(&lower));
        }
        prop_assert_eq!(strihash(&s), strcrc32(&folded(&s)));
    }

    #[test]
    fn prop_cmp_consistent_with_eq(a in "[a-zA-Z_]{0,8}", b in "[a-zA-Z_]{0,8}") {
        prop_assert_eq!(
            cmp_ignore_case(&a, &b) == Ordering::Equal,
            eq_ignore_case(&a, &b)
        );
    }
}
