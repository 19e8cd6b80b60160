use super::*;
use crate::name::Name;
use crate::reserved::EName;
use pretty_assertions::assert_eq;

fn registry() -> NameRegistry {
    NameRegistry::bootstrap(NameTableConfig::compact()).unwrap()
}

#[test]
fn test_new_reserves_range_without_populating() {
    let registry = NameRegistry::new(NameTableConfig::compact()).unwrap();
    assert_eq!(registry.len(), EName::MAX_INDEX as usize + 1);
    assert!(!registry.is_sealed());
    assert_eq!(registry.entries().count(), 0);
    assert_eq!(registry.resolve(0), None);
}

#[test]
fn test_first_spellings_case_variants() {
    // Mirrors the classic self-check: three case variants of one name,
    // a find with a fourth spelling, and a different number.
    let reg = registry();
    let auto_test_1 = reg.name("AutoTest_1");
    let lower_1 = reg.name("autoTest_1");
    let mixed_1 = reg.name("autoTeSt_1");
    let found = reg.find("autoTEST_1");
    let auto_test_2 = reg.name("AutoTest_2");
    let auto_test_b_2 = reg.name("AutoTestB_2");
    let null = reg.name_opt(None, FindName::Add);

    assert_ne!(auto_test_1, auto_test_2);
    assert_eq!(auto_test_1, lower_1);
    assert_eq!(auto_test_1, mixed_1);
    assert_eq!(auto_test_1, found);
    assert_eq!(lower_1.comparison_index(), auto_test_2.comparison_index());
    assert_eq!(reg.plain_name(lower_1), reg.plain_name(auto_test_2));
    assert_ne!(reg.plain_name(auto_test_b_2), reg.plain_name(auto_test_2));
    assert_eq!(auto_test_b_2.number(), auto_test_2.number());
    assert_ne!(lower_1.number(), auto_test_2.number());
    assert!(null.is_none());
}

#[test]
fn test_single_bucket_chains() {
    let reg = NameRegistry::bootstrap(NameTableConfig::compact().with_bucket_count(1)).unwrap();
    let names: Vec<Name> = (0..200).map(|i| reg.name(&format!("Chain{i}"))).collect();
    for (i, &name) in names.iter().enumerate() {
        assert_eq!(reg.find(&format!("CHAIN{i}")), name);
        assert_eq!(reg.name_string(name), format!("Chain{i}"));
    }
    assert_eq!(reg.hash_stats().used_bins, 1);
    assert_eq!(reg.hash_stats().longest_chain, EName::ALL.len() + 200);
}

#[test]
fn test_entries_in_index_order() {
    let reg = registry();
    reg.name("Zeta");
    reg.name("Alpha");
    let indices: Vec<u32> = reg.entries().map(NameEntry::index).collect();
    let mut sorted = indices.clone();
    sorted.sort_unstable();
    assert_eq!(indices, sorted);
    assert_eq!(indices.len(), EName::ALL.len() + 2);
}

#[test]
fn test_entry_encoding() {
    let reg = registry();
    let narrow = reg.name("Plain");
    let wide = reg.name("Ñandú");
    assert_eq!(
        reg.entry(narrow.comparison_index()).unwrap().encoding(),
        Encoding::Narrow
    );
    assert_eq!(
        reg.entry(wide.comparison_index()).unwrap().encoding(),
        Encoding::Wide
    );
    assert_eq!(reg.name_counts(), (EName::ALL.len() + 1, 1));
}

#[test]
fn test_wide_spelling_of_narrow_name_shares_entry() {
    let reg = registry();
    let narrow = reg.name("kelvin");
    let before = reg.len();
    let wide = reg.name("\u{212A}elvin");
    assert_eq!(wide, narrow);
    assert_eq!(reg.len(), before);
    assert_eq!(reg.compare(wide, narrow), std::cmp::Ordering::Equal);
    assert_eq!(reg.find("\u{212A}ELVIN"), narrow);
    assert_eq!(reg.name_string(wide), "kelvin");
}

#[test]
fn test_replace_same_length_wide() {
    let reg = registry();
    let wide = reg.name("straße");
    reg.find_or_add("STRAßE", FindName::Replace);
    assert_eq!(reg.name_string(wide), "STRAßE");
    assert_eq!(reg.find("Straße"), wide);
}

#[test]
fn test_replace_refused_on_length_mismatch() {
    let reg = registry();
    // The Kelvin sign folds to 'k' but takes three bytes.
    let name = reg.name("Kilo\u{212A}é");
    let before = reg.len();
    let replaced = reg.find_or_add("kilokÉ", FindName::Replace);
    assert_eq!(replaced, name);
    assert_eq!(reg.len(), before);
    assert_eq!(reg.name_string(name), "Kilo\u{212A}é");
}

#[test]
fn test_replace_is_seen_by_resolve() {
    let reg = registry();
    let name = reg.name("mixed");
    reg.find_or_add("MiXeD", FindName::Replace);
    assert_eq!(reg.resolve(name.comparison_index()), Some("MiXeD"));
    let entry = reg.entry(name.comparison_index()).unwrap();
    assert_eq!(entry.original(), "mixed");
    assert_eq!(reg.entry_text(entry), "MiXeD");
}

#[test]
fn test_display_variants_live_outside_comparison_chains() {
    let reg = NameRegistry::bootstrap(NameTableConfig::compact().with_case_preserving(true)).unwrap();
    let first = reg.name("Thing");
    let variant = reg.name("THING");
    assert_eq!(reg.find("thing").comparison_index(), first.comparison_index());
    assert_eq!(reg.resolve(variant.display_index()), Some("THING"));
    assert_eq!(reg.hash_stats().used_display_bins, 1);
}

#[test]
fn test_display_variants_not_created_by_find() {
    let reg = NameRegistry::bootstrap(NameTableConfig::compact().with_case_preserving(true)).unwrap();
    let first = reg.name("Thing");
    let before = reg.len();
    let found = reg.find("THING");
    assert_eq!(reg.len(), before);
    assert_eq!(found.display_index(), first.comparison_index());
}

#[test]
fn test_register_hardcoded_rejects_empty() {
    let reg = NameRegistry::new(NameTableConfig::compact()).unwrap();
    assert_eq!(
        reg.register_hardcoded(5, ""),
        Err(BootError::EmptyHardcoded { index: 5 })
    );
}

#[test]
fn test_slot_table_capacity_is_config_checked() {
    let err = NameRegistry::new(
        NameTableConfig::compact()
            .with_max_slots(10)
            .with_reserved_slots(20),
    )
    .unwrap_err();
    assert_eq!(
        err,
        BootError::Config(ConfigError::ReservedExceedsCapacity {
            reserved: 20,
            max_slots: 10,
        })
    );
}

#[test]
fn test_concurrent_same_name() {
    let reg = registry();
    let before = reg.len();
    let results: Vec<Name> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let reg = &reg;
                s.spawn(move || {
                    if i % 2 == 0 {
                        reg.name("Shared")
                    } else {
                        reg.name("SHARED")
                    }
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(results.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(reg.len(), before + 1);
}
