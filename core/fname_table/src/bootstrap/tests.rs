use super::*;
use crate::name::Name;
use pretty_assertions::assert_eq;

fn compact() -> NameTableConfig {
    NameTableConfig::compact()
}

#[test]
fn test_reserved_names_at_their_indices() {
    let registry = NameRegistry::bootstrap(compact()).unwrap();
    assert!(registry.is_sealed());
    for &ename in EName::ALL {
        assert_eq!(registry.resolve(ename.index()), Some(ename.as_str()));
    }
    assert_eq!(registry.len(), EName::MAX_INDEX as usize + 1);
}

#[test]
fn test_reserved_names_found_by_text() {
    let registry = NameRegistry::bootstrap(compact()).unwrap();
    assert_eq!(registry.find("Self"), Name::from(EName::SelfName));
    assert_eq!(registry.find("true"), Name::from(EName::True));
    assert_eq!(registry.find("none"), Name::NONE);
    assert_eq!(registry.find("GameUserSettings"), EName::GameUserSettings);
}

#[test]
fn test_gaps_in_reserved_range_stay_empty() {
    let registry = NameRegistry::bootstrap(compact()).unwrap();
    assert!(EName::from_index(24).is_none());
    assert!(registry.entry(24).is_none());
    assert_eq!(registry.resolve(24), None);
}

#[test]
fn test_dynamic_names_start_after_reserved_range() {
    let registry = NameRegistry::bootstrap(compact()).unwrap();
    let name = registry.name("NotHardcoded");
    assert_eq!(name.comparison_index(), EName::MAX_INDEX + 1);
}

#[test]
fn test_extra_hardcoded_names() {
    let registry = NameRegistry::bootstrap_with(compact(), &[(24, "Int32Property")]).unwrap();
    assert_eq!(registry.resolve(24), Some("Int32Property"));
    assert_eq!(registry.find("int32property").comparison_index(), 24);
}

#[test]
fn test_same_text_twice_is_accepted() {
    let registry =
        NameRegistry::bootstrap_with(compact(), &[(EName::Core.index(), "Core")]).unwrap();
    assert_eq!(registry.resolve(EName::Core.index()), Some("Core"));
}

#[test]
fn test_duplicate_index_is_an_error() {
    let err = NameRegistry::bootstrap_with(compact(), &[(EName::Core.index(), "Rocket")]).unwrap_err();
    assert_eq!(
        err,
        BootError::DuplicateHardcoded {
            index: 30,
            existing: "Core".to_string(),
            attempted: "Rocket".to_string(),
        }
    );
    let message = err.to_string();
    assert!(message.contains("Core"));
    assert!(message.contains("Rocket"));
    assert!(message.contains("30"));
}

#[test]
fn test_case_collision_is_an_error() {
    let err = NameRegistry::bootstrap_with(compact(), &[(24, "engine")]).unwrap_err();
    assert_eq!(
        err,
        BootError::CaseCollision {
            first: 24,
            first_text: "engine".to_string(),
            second: 31,
            second_text: "Engine".to_string(),
        }
    );
}

#[test]
fn test_out_of_range_hardcoded_name() {
    let err = NameRegistry::bootstrap_with(compact(), &[(9000, "Far")]).unwrap_err();
    assert!(matches!(err, BootError::HardcodedOutOfRange { index: 9000, .. }));
}

#[test]
fn test_reserved_range_too_small_for_table() {
    let err = NameRegistry::bootstrap(compact().with_reserved_slots(100)).unwrap_err();
    assert!(matches!(
        err,
        BootError::HardcodedOutOfRange { reserved: 100, .. }
    ));
}

#[test]
fn test_watermark_must_fit_reserved_range() {
    let reserved = EName::MAX_INDEX + 1;
    let err =
        NameRegistry::bootstrap(compact().with_network_watermark(reserved)).unwrap_err();
    assert_eq!(
        err,
        BootError::NetworkWatermark {
            watermark: reserved,
            capacity: reserved,
        }
    );
    assert!(err.to_string().contains("must be no greater than 602"));

    let registry =
        NameRegistry::bootstrap(compact().with_network_watermark(EName::MAX_INDEX)).unwrap();
    assert_eq!(registry.config().network_watermark, EName::MAX_INDEX);
}

#[test]
fn test_missing_none_is_an_error() {
    let registry = NameRegistry::new(compact()).unwrap();
    registry.register_hardcoded(1, "ByteProperty").unwrap();
    assert_eq!(registry.verify(), Err(BootError::MissingNone));
}

#[test]
fn test_invalid_config_is_a_boot_error() {
    let err = NameRegistry::bootstrap(compact().with_bucket_count(1000)).unwrap_err();
    assert!(matches!(err, BootError::Config(_)));
}
