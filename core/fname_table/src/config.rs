//! Name table configuration.
//!
//! All sizes are fixed when the registry is created. The defaults match a
//! large application: 64K hash buckets, 64 KiB arena pages, room for two
//! million names.

use crate::error::ConfigError;
use crate::reserved::EName;

/// Environment variable enabling the case-preserving display index.
pub const ENV_CASE_PRESERVING: &str = "FNAME_CASE_PRESERVING";

/// Environment variable overriding the hash bucket count.
pub const ENV_BUCKETS: &str = "FNAME_BUCKETS";

/// Highest index that may be sent over the wire as a compact integer.
pub const DEFAULT_NETWORK_WATERMARK: u32 = 410;

/// Longest accepted name, in characters.
pub const DEFAULT_MAX_NAME_LEN: usize = 1024;

/// Sizing and feature switches for a [`NameRegistry`](crate::NameRegistry).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameTableConfig {
    /// Hash buckets per table. Must be a power of two.
    pub bucket_count: usize,
    /// Arena page size in bytes.
    pub page_size: usize,
    /// Slots per slot-table block.
    pub slot_block_size: usize,
    /// Maximum number of slots, reserved range included.
    pub max_slots: usize,
    /// Names longer than this (in characters) resolve to `None`.
    pub max_name_len: usize,
    /// Size of the reserved range `[0, reserved_slots)`.
    pub reserved_slots: u32,
    /// Highest comparison index that may be encoded as a compact integer.
    pub network_watermark: u32,
    /// Keep a case-sensitive display index next to the comparison index.
    pub case_preserving: bool,
}

impl Default for NameTableConfig {
    fn default() -> Self {
        Self {
            bucket_count: 65_536,
            page_size: fname_arena::DEFAULT_PAGE_SIZE,
            slot_block_size: 16_384,
            max_slots: 2 * 1024 * 1024,
            max_name_len: DEFAULT_MAX_NAME_LEN,
            reserved_slots: EName::MAX_INDEX + 1,
            network_watermark: DEFAULT_NETWORK_WATERMARK,
            case_preserving: false,
        }
    }
}

impl NameTableConfig {
    /// Small tables for tests and tools that build many registries.
    pub fn compact() -> Self {
        Self {
            bucket_count: 1024,
            page_size: 4096,
            slot_block_size: 1024,
            max_slots: 64 * 1024,
            ..Self::default()
        }
    }

    /// Defaults overlaid with `FNAME_CASE_PRESERVING` and `FNAME_BUCKETS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(value) = std::env::var(ENV_CASE_PRESERVING) {
            config.case_preserving = parse_flag(ENV_CASE_PRESERVING, &value)?;
        }
        if let Ok(value) = std::env::var(ENV_BUCKETS) {
            config.bucket_count = value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_BUCKETS,
                value: value.clone(),
            })?;
        }
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_bucket_count(mut self, bucket_count: usize) -> Self {
        self.bucket_count = bucket_count;
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub fn with_slot_block_size(mut self, slot_block_size: usize) -> Self {
        self.slot_block_size = slot_block_size;
        self
    }

    #[must_use]
    pub fn with_max_slots(mut self, max_slots: usize) -> Self {
        self.max_slots = max_slots;
        self
    }

    #[must_use]
    pub fn with_max_name_len(mut self, max_name_len: usize) -> Self {
        self.max_name_len = max_name_len;
        self
    }

    #[must_use]
    pub fn with_reserved_slots(mut self, reserved_slots: u32) -> Self {
        self.reserved_slots = reserved_slots;
        self
    }

    #[must_use]
    pub fn with_network_watermark(mut self, network_watermark: u32) -> Self {
        self.network_watermark = network_watermark;
        self
    }

    #[must_use]
    pub fn with_case_preserving(mut self, case_preserving: bool) -> Self {
        self.case_preserving = case_preserving;
        self
    }

    /// Check the sizes for consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.bucket_count.is_power_of_two() {
            return Err(ConfigError::BucketCountNotPowerOfTwo(self.bucket_count));
        }
        if u32::try_from(self.bucket_count).is_err() {
            return Err(ConfigError::TooManyBuckets(self.bucket_count));
        }
        if self.page_size == 0 {
            return Err(ConfigError::ZeroSize("page_size"));
        }
        if self.slot_block_size == 0 {
            return Err(ConfigError::ZeroSize("slot_block_size"));
        }
        if self.max_name_len == 0 {
            return Err(ConfigError::ZeroSize("max_name_len"));
        }
        if self.reserved_slots == 0 {
            return Err(ConfigError::ZeroSize("reserved_slots"));
        }
        // Slot indices are stored as `u32` and chain links as index + 1.
        if self.max_slots >= u32::MAX as usize {
            return Err(ConfigError::TooManySlots(self.max_slots));
        }
        if self.reserved_slots as usize > self.max_slots {
            return Err(ConfigError::ReservedExceedsCapacity {
                reserved: self.reserved_slots,
                max_slots: self.max_slots,
            });
        }
        Ok(())
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidEnv {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests;
