//! fname - process-wide name interning
//!
//! Strings that recur across a process (asset names, property names,
//! object names) are stored once and handed out as small integer handles.
//! A [`Name`] compares, hashes and copies in constant time; turning it back
//! into text is a slot lookup.
//!
//! - Identity is case-insensitive: `"Rocket"` and `"ROCKET"` are one name.
//! - A trailing `_<number>` is split off and stored in the handle, so
//!   `Rocket_1` through `Rocket_9000` share a single string.
//! - A table of hardcoded names ([`EName`]) is registered at fixed indices
//!   during bootstrap, letting low indices travel over the network as plain
//!   integers.
//!
//! # Concurrency
//!
//! Lookups that hit never lock. Inserts are serialized by a single writer
//! lock and published with release ordering, so a handle returned on one
//! thread resolves on every other thread. Entries are never removed.
//!
//! # Failure
//!
//! Lookups do not fail: misses, empty input and over-long input resolve to
//! [`Name::NONE`]. A broken hardcoded table is a [`BootError`]; the
//! process-level entry points report it and abort.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod bootstrap;
mod config;
mod display;
mod entry;
mod error;
pub mod fatal;
mod hash;
mod name;
mod registry;
mod reserved;
mod split;
mod stats;
mod validate;
mod wire;

pub use config::{
    NameTableConfig, DEFAULT_MAX_NAME_LEN, DEFAULT_NETWORK_WATERMARK, ENV_BUCKETS,
    ENV_CASE_PRESERVING,
};
pub use display::to_display_string;
pub use entry::{Encoding, NameEntry};
pub use error::{BootError, ConfigError};
pub use fname_arena::{ArenaStats, CapacityError};
pub use hash::{cmp_ignore_case, eq_ignore_case, strcrc32, strihash};
pub use name::{Name, INVALID_NAME};
pub use registry::{FindName, NameRegistry};
pub use reserved::EName;
pub use split::{split_trailing_number, NAME_NO_NUMBER};
pub use stats::HashStats;
pub use validate::{
    validate_chars, InvalidNameError, INVALID_LONGPACKAGE_CHARACTERS, INVALID_NAME_CHARACTERS,
    INVALID_OBJECTNAME_CHARACTERS,
};
pub use wire::{read_entry_text, write_entry_text, WireError};
