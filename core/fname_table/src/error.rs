//! Configuration and bootstrap errors.
//!
//! Nothing on the lookup path returns an error: misses and invalid input
//! resolve to `Name::NONE`. These types only describe static
//! misconfiguration found before the table goes live.

use fname_arena::CapacityError;

/// Inconsistent [`NameTableConfig`](crate::NameTableConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("bucket count {0} is not a power of two")]
    BucketCountNotPowerOfTwo(usize),
    #[error("bucket count {0} does not fit in u32")]
    TooManyBuckets(usize),
    #[error("`{0}` must be non-zero")]
    ZeroSize(&'static str),
    #[error("max_slots {0} leaves no room for u32 slot links")]
    TooManySlots(usize),
    #[error("reserved range of {reserved} slots exceeds max_slots {max_slots}")]
    ReservedExceedsCapacity { reserved: u32, max_slots: usize },
    #[error("environment variable {var} has invalid value {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Failure while registering or validating the reserved names.
///
/// Every variant is a build or configuration mistake. The process-level
/// entry points (`bootstrap_or_abort`, `NameRegistry::global`) never
/// retry; they report and abort.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(
        "hardcoded name '{attempted}' at index {index} was duplicated \
         (or unexpected concurrency); existing entry is '{existing}'"
    )]
    DuplicateHardcoded {
        index: u32,
        existing: String,
        attempted: String,
    },

    #[error("hardcoded name '{text}' uses index {index}, outside the reserved range of {reserved} slots")]
    HardcodedOutOfRange { index: u32, text: String, reserved: u32 },

    #[error("hardcoded name at index {index} is empty")]
    EmptyHardcoded { index: u32 },

    #[error(
        "duplicate hardcoded name: '{first_text}' (index {first}) and \
         '{second_text}' (index {second}) differ only by case"
    )]
    CaseCollision {
        first: u32,
        first_text: String,
        second: u32,
        second_text: String,
    },

    #[error("reserved index 0 is not populated; it backs the None name")]
    MissingNone,

    #[error(
        "network watermark is incorrectly set (currently {watermark}, \
         must be no greater than {})",
        .capacity.saturating_sub(1)
    )]
    NetworkWatermark { watermark: u32, capacity: u32 },

    #[error("the global name registry is already initialized")]
    AlreadyInitialized,

    #[error(transparent)]
    Capacity(#[from] CapacityError),
}
