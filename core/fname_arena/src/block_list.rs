//! Append-only, pointer-stable slot storage.
//!
//! Slots live in fixed-size blocks that are allocated on demand and never
//! reallocated, so a reference to a slot stays valid for the life of the
//! list. Each slot is written at most once; the write is an atomic
//! first-writer-wins operation, so a second writer learns who got there
//! first instead of overwriting.

use std::fmt;
use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Growth request exceeded the fixed block budget.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("block list capacity exceeded: {requested} slots requested, capacity is {capacity}")]
pub struct CapacityError {
    pub requested: usize,
    pub capacity: usize,
}

/// Why [`BlockList::publish`] refused a value.
#[derive(Debug, PartialEq, Eq)]
pub enum PublishError<'a, T> {
    /// The slot has not been handed out by [`BlockList::grow`] yet.
    OutOfRange { index: usize, len: usize },
    /// Another writer published first. Carries the winning value.
    Occupied(&'a T),
}

type Block<T> = Box<[OnceLock<T>]>;

/// Growable table of write-once slots.
///
/// # Thread Safety
/// - `get`, `len`, `iter`: any number of threads, no locking.
/// - `grow`, `push`: one writer at a time. The owner serializes writers.
/// - `publish`: safe from any thread; the first value stored wins.
pub struct BlockList<T> {
    blocks: Box<[OnceLock<Block<T>>]>,
    block_size: usize,
    len: AtomicUsize,
}

impl<T> BlockList<T> {
    /// Create a list of at most `max_blocks` blocks of `block_size` slots.
    pub fn new(block_size: usize, max_blocks: usize) -> Self {
        debug_assert!(block_size > 0, "block size must be non-zero");
        let block_size = block_size.max(1);
        Self {
            blocks: (0..max_blocks).map(|_| OnceLock::new()).collect(),
            block_size,
            len: AtomicUsize::new(0),
        }
    }

    /// Create a list able to hold at least `capacity` slots.
    pub fn with_capacity(block_size: usize, capacity: usize) -> Self {
        let block_size = block_size.max(1);
        Self::new(block_size, capacity.div_ceil(block_size))
    }

    /// Total number of slots the list can ever hold.
    pub fn capacity(&self) -> usize {
        self.blocks.len() * self.block_size
    }

    /// Number of slots handed out so far (populated or not).
    #[inline]
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Acquire)
    }

    /// Whether no slot has been handed out yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of blocks currently allocated.
    pub fn allocated_blocks(&self) -> usize {
        self.blocks.iter().filter(|b| b.get().is_some()).count()
    }

    /// Hand out `additional` fresh, empty slots and return their indices.
    ///
    /// Must not be called concurrently with itself or [`push`](Self::push).
    pub fn grow(&self, additional: usize) -> Result<Range<usize>, CapacityError> {
        let start = self.len.load(Ordering::Relaxed);
        let end = start
            .checked_add(additional)
            .filter(|&end| end <= self.capacity())
            .ok_or(CapacityError {
                requested: start.saturating_add(additional),
                capacity: self.capacity(),
            })?;

        if end > start {
            let first = start / self.block_size;
            let last = (end - 1) / self.block_size;
            for block in &self.blocks[first..=last] {
                block.get_or_init(|| new_block(self.block_size));
            }
        }

        self.len.store(end, Ordering::Release);
        Ok(start..end)
    }

    /// Append `value` in a fresh slot and return its index.
    ///
    /// Must not be called concurrently with itself or [`grow`](Self::grow).
    pub fn push(&self, value: T) -> Result<usize, CapacityError> {
        let index = self.grow(1)?.start;
        if let Some(slot) = self.slot(index) {
            // A slot fresh from `grow` has never been written.
            let _ = slot.set(value);
        }
        Ok(index)
    }

    /// Store `value` in the handed-out slot `index`, unless it is already
    /// populated.
    ///
    /// On success the stored value is visible to every thread that later
    /// observes it through [`get`](Self::get).
    pub fn publish(&self, index: usize, value: T) -> Result<&T, PublishError<'_, T>> {
        let len = self.len();
        let slot = match self.slot(index) {
            Some(slot) if index < len => slot,
            _ => return Err(PublishError::OutOfRange { index, len }),
        };

        let mut won = false;
        let stored = slot.get_or_init(|| {
            won = true;
            value
        });
        if won {
            Ok(stored)
        } else {
            Err(PublishError::Occupied(stored))
        }
    }

    /// Look up a populated slot.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slot(index)?.get()
    }

    /// Iterate populated slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        (0..self.len()).filter_map(move |index| self.get(index).map(|value| (index, value)))
    }

    #[inline]
    fn slot(&self, index: usize) -> Option<&OnceLock<T>> {
        let block = self.blocks.get(index / self.block_size)?.get()?;
        block.get(index % self.block_size)
    }
}

impl<T> fmt::Debug for BlockList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockList")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("block_size", &self.block_size)
            .finish_non_exhaustive()
    }
}

fn new_block<T>(size: usize) -> Block<T> {
    (0..size).map(|_| OnceLock::new()).collect()
}
