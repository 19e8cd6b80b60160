use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_default_is_valid() {
    let config = NameTableConfig::default();
    assert_eq!(config.validate(), Ok(()));
    assert_eq!(config.bucket_count, 65_536);
    assert_eq!(config.page_size, 64 * 1024);
    assert!(!config.case_preserving);
    assert!(config.reserved_slots > config.network_watermark);
}

#[test]
fn test_compact_is_valid() {
    assert_eq!(NameTableConfig::compact().validate(), Ok(()));
}

#[test]
fn test_bucket_count_must_be_power_of_two() {
    let config = NameTableConfig::compact().with_bucket_count(1000);
    assert_eq!(
        config.validate(),
        Err(ConfigError::BucketCountNotPowerOfTwo(1000))
    );
    let config = NameTableConfig::compact().with_bucket_count(0);
    assert_eq!(config.validate(), Err(ConfigError::BucketCountNotPowerOfTwo(0)));
}

#[test]
fn test_zero_sizes_rejected() {
    assert_eq!(
        NameTableConfig::compact().with_page_size(0).validate(),
        Err(ConfigError::ZeroSize("page_size"))
    );
    assert_eq!(
        NameTableConfig::compact().with_slot_block_size(0).validate(),
        Err(ConfigError::ZeroSize("slot_block_size"))
    );
    assert_eq!(
        NameTableConfig::compact().with_reserved_slots(0).validate(),
        Err(ConfigError::ZeroSize("reserved_slots"))
    );
}

#[test]
fn test_reserved_must_fit() {
    let config = NameTableConfig::compact()
        .with_max_slots(100)
        .with_reserved_slots(200);
    assert_eq!(
        config.validate(),
        Err(ConfigError::ReservedExceedsCapacity {
            reserved: 200,
            max_slots: 100,
        })
    );
}

#[test]
fn test_parse_flag() {
    assert_eq!(parse_flag(ENV_CASE_PRESERVING, "1"), Ok(true));
    assert_eq!(parse_flag(ENV_CASE_PRESERVING, " TRUE "), Ok(true));
    assert_eq!(parse_flag(ENV_CASE_PRESERVING, "off"), Ok(false));
    assert_eq!(
        parse_flag(ENV_CASE_PRESERVING, "maybe"),
        Err(ConfigError::InvalidEnv {
            var: ENV_CASE_PRESERVING,
            value: "maybe".to_string(),
        })
    );
}
