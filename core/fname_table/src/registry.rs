//! The name registry: slot table, hash chains and the writer lock.
//!
//! # Lookup protocol
//!
//! 1. Hash the text case-insensitively and pick a bucket.
//! 2. Walk the bucket's chain without locking.
//! 3. On a miss (and unless only finding), take the writer lock and walk the
//!    chain again: another thread may have inserted the same text between
//!    steps 2 and 3.
//! 4. Still missing: append a slot, copy the text into the arena, publish
//!    the entry into its slot, then make it the new bucket head.
//!
//! # Memory ordering
//!
//! An entry is fully written into its slot (`OnceLock` initialization,
//! release) before the bucket head is swung to it (compare-exchange,
//! release). Readers load the head with acquire, so any entry reachable
//! from a head is complete. Chains are prepend-only and entries are never
//! unlinked, so a lock-free reader can miss a concurrent insert but never
//! sees a torn or freed node. Step 3 turns that miss into a hit.

use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};

use fname_arena::{ArenaStats, BlockList, EntryArena, PublishError};
use parking_lot::Mutex;

use crate::config::NameTableConfig;
use crate::entry::{Encoding, NameEntry};
use crate::error::{BootError, ConfigError};
use crate::fatal;
use crate::hash::NameCase;

/// Slots per block of the replacement-spelling table.
const SPELLING_BLOCK_SIZE: usize = 256;

/// What `find_or_add` does when the text is not interned yet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FindName {
    /// Only look; a miss yields `Name::NONE`.
    Find,
    /// Insert on a miss.
    Add,
    /// Insert on a miss; on a hit, overwrite the stored spelling with this
    /// one (same byte length required).
    ///
    /// Not safe for threading: the caller guarantees that no other thread
    /// is reading that entry's spelling while it is replaced.
    Replace,
}

/// Comparison and display slot of an interned spelling.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NameIndices {
    pub comparison: u32,
    pub display: u32,
}

/// Process-wide name table.
///
/// # Thread Safety
/// - Bootstrap (reserved names) runs on one thread before the registry is
///   shared; see [`NameRegistry::bootstrap`].
/// - After that, any number of threads may look up and insert. Hits never
///   block; inserts serialize on a single writer lock.
pub struct NameRegistry {
    config: NameTableConfig,
    /// Case-insensitive chains: comparison identity.
    buckets: Box<[AtomicU32]>,
    /// Case-sensitive chains for display variants. Empty unless
    /// `case_preserving` is on.
    display_buckets: Box<[AtomicU32]>,
    slots: BlockList<NameEntry>,
    spellings: BlockList<&'static str>,
    /// The writer lock. Guards the arena, slot-table growth and every
    /// bucket-head update.
    writer: Mutex<EntryArena>,
    narrow_names: AtomicUsize,
    wide_names: AtomicUsize,
    entry_bytes: AtomicUsize,
    sealed: AtomicBool,
}

impl NameRegistry {
    /// Create an empty registry with the reserved range allocated but not
    /// populated.
    ///
    /// Most callers want [`NameRegistry::bootstrap`], which also registers
    /// and validates the hardcoded names.
    pub fn new(config: NameTableConfig) -> Result<Self, BootError> {
        config.validate()?;

        let display_bucket_count = if config.case_preserving {
            config.bucket_count
        } else {
            0
        };
        let slots = BlockList::with_capacity(config.slot_block_size, config.max_slots);
        slots.grow(config.reserved_slots as usize)?;

        Ok(Self {
            buckets: new_buckets(config.bucket_count),
            display_buckets: new_buckets(display_bucket_count),
            slots,
            spellings: BlockList::with_capacity(SPELLING_BLOCK_SIZE, config.max_slots),
            writer: Mutex::new(EntryArena::with_page_size(config.page_size)),
            narrow_names: AtomicUsize::new(0),
            wide_names: AtomicUsize::new(0),
            entry_bytes: AtomicUsize::new(0),
            sealed: AtomicBool::new(false),
            config,
        })
    }

    pub fn config(&self) -> &NameTableConfig {
        &self.config
    }

    /// Number of slots in use, the whole reserved range included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot exists. Never true once the reserved range exists.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether bootstrap has completed.
    pub fn is_sealed(&self) -> bool {
        self.sealed.load(Ordering::Acquire)
    }

    pub(crate) fn seal(&self) {
        self.sealed.store(true, Ordering::Release);
    }

    /// Entry stored at `index`, if that slot is populated.
    #[inline]
    pub fn entry(&self, index: u32) -> Option<&NameEntry> {
        self.slots.get(index as usize)
    }

    /// Current spelling of the entry at `index`.
    #[inline]
    pub fn resolve(&self, index: u32) -> Option<&'static str> {
        self.entry(index).map(|entry| self.entry_text(entry))
    }

    /// Current spelling of `entry`, honoring a `Replace`.
    #[inline]
    pub fn entry_text(&self, entry: &NameEntry) -> &'static str {
        match entry.spelling() {
            Some(spelling) => self
                .spellings
                .get(spelling as usize)
                .copied()
                .unwrap_or(entry.original()),
            None => entry.original(),
        }
    }

    /// Populated slots in index order.
    pub fn entries(&self) -> impl Iterator<Item = &NameEntry> + '_ {
        self.slots.iter().map(|(_, entry)| entry)
    }

    /// Find or insert `text` and return its slot indices.
    ///
    /// `text` must be non-empty and already stripped of any number suffix.
    /// Returns `None` only for a `Find` miss.
    pub(crate) fn find_or_add_indices(&self, text: &str, mode: FindName) -> Option<NameIndices> {
        let comparison = self.find_or_add_entry(text, mode, NameCase::IgnoreCase)?;
        let display = if self.config.case_preserving {
            self.display_index(comparison, text, mode)
        } else {
            comparison
        };
        Some(NameIndices {
            comparison,
            display,
        })
    }

    /// Display slot for a spelling whose comparison slot is `comparison`.
    ///
    /// A spelling that differs from the comparison entry only by case gets
    /// its own case-sensitive entry. Failing to find or add that variant
    /// falls back to the comparison slot.
    fn display_index(&self, comparison: u32, text: &str, mode: FindName) -> u32 {
        match self.entry(comparison) {
            Some(entry) if self.entry_text(entry) != text => self
                .find_or_add_entry(text, mode, NameCase::CaseSensitive)
                .unwrap_or(comparison),
            _ => comparison,
        }
    }

    fn find_or_add_entry(&self, text: &str, mode: FindName, case: NameCase) -> Option<u32> {
        let bucket = self.bucket(case, text)?;

        if let Some(index) = self.scan(bucket, text, case) {
            if mode == FindName::Replace {
                self.replace_spelling(index, text);
            }
            return Some(index);
        }

        if mode == FindName::Find {
            return None;
        }

        let mut arena = self.writer.lock();
        // Another thread may have inserted the same text since the scan.
        if let Some(index) = self.scan(bucket, text, case) {
            return Some(index);
        }
        Some(self.insert_locked(&mut arena, bucket, text))
    }

    fn bucket(&self, case: NameCase, text: &str) -> Option<&AtomicU32> {
        let buckets = match case {
            NameCase::IgnoreCase => &self.buckets,
            NameCase::CaseSensitive => &self.display_buckets,
        };
        if buckets.is_empty() {
            return None;
        }
        Some(&buckets[case.hash(text) as usize & (buckets.len() - 1)])
    }

    /// Walk one chain looking for `text`. Lock-free.
    fn scan(&self, bucket: &AtomicU32, text: &str, case: NameCase) -> Option<u32> {
        let mut link = bucket.load(Ordering::Acquire);
        while link != 0 {
            let entry = self.slots.get(link as usize - 1)?;
            if case.matches(self.entry_text(entry), text) {
                return Some(entry.index());
            }
            link = entry.next_link();
        }
        None
    }

    /// Append a new entry for `text` and link it into `bucket`.
    ///
    /// Caller holds the writer lock (`arena` is its guard).
    fn insert_locked(&self, arena: &mut EntryArena, bucket: &AtomicU32, text: &str) -> u32 {
        let head = bucket.load(Ordering::Acquire);
        let index = match self.slots.grow(1) {
            Ok(range) => range.start,
            Err(err) => fatal::abort_runtime(&format!("name slot table is full: {err}")),
        };
        #[expect(
            clippy::cast_possible_truncation,
            reason = "max_slots is validated to fit in u32"
        )]
        let index = index as u32;

        let entry = NameEntry::new(index, arena.alloc_str(text), head);
        if let Err(err) = self.slots.publish(index as usize, entry) {
            fatal::abort_runtime(&format!(
                "fresh name slot {index} could not be published: {}",
                describe_publish_error(&err)
            ));
        }
        self.link(bucket, head, index);
        self.record_entry(index, text);
        tracing::trace!(index, text, "interned name");
        index
    }

    /// Make the entry at `index` the new head of `bucket`.
    ///
    /// Caller holds the writer lock, so the head cannot have moved since
    /// `head` was read.
    fn link(&self, bucket: &AtomicU32, head: u32, index: u32) {
        if bucket
            .compare_exchange(head, index + 1, Ordering::Release, Ordering::Relaxed)
            .is_err()
        {
            fatal::abort_runtime(&format!(
                "bucket head changed under the writer lock while linking slot {index}"
            ));
        }
    }

    fn record_entry(&self, index: u32, text: &str) {
        let counter = match Encoding::of(text) {
            Encoding::Narrow => &self.narrow_names,
            Encoding::Wide => &self.wide_names,
        };
        counter.fetch_add(1, Ordering::Relaxed);
        if let Some(entry) = self.entry(index) {
            self.entry_bytes
                .fetch_add(entry.footprint(), Ordering::Relaxed);
        }
    }

    /// Overwrite the spelling of the entry at `index` with `text`.
    fn replace_spelling(&self, index: u32, text: &str) {
        let Some(entry) = self.entry(index) else {
            return;
        };
        let current = self.entry_text(entry);
        if current == text {
            return;
        }
        if current.len() != text.len() {
            tracing::warn!(
                index,
                current,
                replacement = text,
                "name replace refused: spellings differ in length"
            );
            return;
        }

        let mut arena = self.writer.lock();
        let stored = arena.alloc_str(text);
        match self.spellings.push(stored) {
            Ok(spelling) => {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "spelling table capacity is max_slots, which fits in u32"
                )]
                let spelling = spelling as u32;
                entry.set_spelling(spelling);
                tracing::debug!(index, from = current, to = text, "replaced name spelling");
            }
            Err(err) => tracing::warn!(index, error = %err, "name replace refused"),
        }
    }

    /// Register `text` at the reserved slot `index`.
    ///
    /// Registering the same spelling twice is a no-op. A different spelling
    /// at an occupied slot is an error: the slot's atomic first-writer-wins
    /// publish decides who owns it.
    pub fn register_hardcoded(&self, index: u32, text: &str) -> Result<(), BootError> {
        if text.is_empty() {
            return Err(BootError::EmptyHardcoded { index });
        }
        if index >= self.config.reserved_slots {
            return Err(BootError::HardcodedOutOfRange {
                index,
                text: text.to_string(),
                reserved: self.config.reserved_slots,
            });
        }
        debug_assert!(
            !self.is_sealed(),
            "hardcoded names must be registered before the table is shared"
        );

        let mut arena = self.writer.lock();
        if let Some(existing) = self.entry(index) {
            if existing.original() == text {
                return Ok(());
            }
            return Err(duplicate(index, existing, text));
        }

        let Some(bucket) = self.bucket(NameCase::IgnoreCase, text) else {
            return Err(BootError::Config(ConfigError::ZeroSize("bucket_count")));
        };
        let head = bucket.load(Ordering::Acquire);
        let entry = NameEntry::new(index, arena.alloc_str(text), head);
        match self.slots.publish(index as usize, entry) {
            Ok(_) => {}
            Err(PublishError::Occupied(existing)) => return Err(duplicate(index, existing, text)),
            Err(PublishError::OutOfRange { .. }) => {
                return Err(BootError::HardcodedOutOfRange {
                    index,
                    text: text.to_string(),
                    reserved: self.config.reserved_slots,
                })
            }
        }
        self.link(bucket, head, index);
        self.record_entry(index, text);
        Ok(())
    }

    pub(crate) fn bucket_heads(&self) -> &[AtomicU32] {
        &self.buckets
    }

    pub(crate) fn display_bucket_heads(&self) -> &[AtomicU32] {
        &self.display_buckets
    }

    pub(crate) fn name_counts(&self) -> (usize, usize) {
        (
            self.narrow_names.load(Ordering::Relaxed),
            self.wide_names.load(Ordering::Relaxed),
        )
    }

    pub(crate) fn entry_bytes(&self) -> usize {
        self.entry_bytes.load(Ordering::Relaxed)
    }

    pub(crate) fn arena_stats(&self) -> ArenaStats {
        self.writer.lock().stats()
    }
}

impl std::fmt::Debug for NameRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameRegistry")
            .field("len", &self.len())
            .field("buckets", &self.buckets.len())
            .field("case_preserving", &self.config.case_preserving)
            .field("sealed", &self.is_sealed())
            .finish_non_exhaustive()
    }
}

fn new_buckets(count: usize) -> Box<[AtomicU32]> {
    (0..count).map(|_| AtomicU32::new(0)).collect()
}

fn duplicate(index: u32, existing: &NameEntry, attempted: &str) -> BootError {
    BootError::DuplicateHardcoded {
        index,
        existing: existing.original().to_string(),
        attempted: attempted.to_string(),
    }
}

fn describe_publish_error(err: &PublishError<'_, NameEntry>) -> String {
    match err {
        PublishError::OutOfRange { index, len } => format!("index {index} beyond length {len}"),
        PublishError::Occupied(existing) => format!("occupied by '{}'", existing.original()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap to panic on unexpected state")]
mod tests;
