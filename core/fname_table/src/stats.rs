//! Hash table statistics.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::registry::NameRegistry;

/// Snapshot of registry occupancy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HashStats {
    /// Populated entries, display variants included.
    pub names: usize,
    pub narrow_names: usize,
    pub wide_names: usize,
    /// Comparison buckets with at least one entry.
    pub used_bins: usize,
    pub total_bins: usize,
    /// Longest comparison chain.
    pub longest_chain: usize,
    /// Case-sensitive display buckets in use (zero unless case preserving).
    pub used_display_bins: usize,
    /// Bytes held by entries: the fixed part plus the payload.
    pub entry_bytes: usize,
    pub arena_pages: usize,
    pub arena_bytes_used: usize,
    pub arena_bytes_wasted: usize,
}

impl fmt::Display for HashStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hash: {} names, {}/{} hash bins, Mem in bytes {}",
            self.names, self.used_bins, self.total_bins, self.entry_bytes
        )
    }
}

impl NameRegistry {
    /// Walk every bucket chain and collect occupancy numbers.
    ///
    /// Takes the writer lock briefly for the arena numbers only.
    pub fn hash_stats(&self) -> HashStats {
        let (narrow_names, wide_names) = self.name_counts();
        let heads = self.bucket_heads();
        let longest_chain = heads
            .iter()
            .map(|head| self.chain_len(head))
            .max()
            .unwrap_or(0);
        let arena = self.arena_stats();

        HashStats {
            names: narrow_names + wide_names,
            narrow_names,
            wide_names,
            used_bins: used(heads),
            total_bins: heads.len(),
            longest_chain,
            used_display_bins: used(self.display_bucket_heads()),
            entry_bytes: self.entry_bytes(),
            arena_pages: arena.pages,
            arena_bytes_used: arena.bytes_used,
            arena_bytes_wasted: arena.bytes_wasted,
        }
    }

    fn chain_len(&self, head: &AtomicU32) -> usize {
        let mut len = 0;
        let mut link = head.load(Ordering::Acquire);
        while let Some(entry) = link.checked_sub(1).and_then(|index| self.entry(index)) {
            len += 1;
            link = entry.next_link();
        }
        len
    }
}

fn used(heads: &[AtomicU32]) -> usize {
    heads
        .iter()
        .filter(|head| head.load(Ordering::Acquire) != 0)
        .count()
}
