//! Bump allocator for name entry payloads.
//!
//! Pages are leaked on allocation, which is what makes the returned buffers
//! `'static`: nothing is ever handed back to the allocator. A request that
//! does not fit in the remainder of the current page starts a new page and
//! abandons the remainder.

use std::fmt;

/// Default page size (64 KiB).
pub const DEFAULT_PAGE_SIZE: usize = 64 * 1024;

/// Bump allocator over leaked pages.
///
/// # Thread Safety
/// Not synchronized. Callers hold an external lock (the name table's writer
/// lock) around every allocation.
pub struct EntryArena {
    page_size: usize,
    /// Unused tail of the current page.
    current: &'static mut [u8],
    pages: usize,
    bytes_used: usize,
    bytes_wasted: usize,
}

/// Allocation counters for an [`EntryArena`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ArenaStats {
    /// Pages requested from the system allocator, dedicated pages included.
    pub pages: usize,
    /// Bytes handed out to callers.
    pub bytes_used: usize,
    /// Page remainders abandoned when a request did not fit.
    pub bytes_wasted: usize,
}

impl EntryArena {
    /// Create an arena with the default 64 KiB page size.
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Create an arena with a custom page size.
    ///
    /// No page is allocated until the first request.
    pub fn with_page_size(page_size: usize) -> Self {
        debug_assert!(page_size > 0, "arena page size must be non-zero");
        Self {
            page_size: page_size.max(1),
            current: Default::default(),
            pages: 0,
            bytes_used: 0,
            bytes_wasted: 0,
        }
    }

    /// Size of a regular page in bytes.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Allocate a zeroed buffer of `size` bytes that lives for the rest of
    /// the process.
    ///
    /// Requests larger than a page get a dedicated page of their own and
    /// leave the current page untouched.
    pub fn allocate(&mut self, size: usize) -> &'static mut [u8] {
        if size > self.page_size {
            self.pages += 1;
            self.bytes_used += size;
            tracing::debug!(size, "arena: dedicated page for oversized request");
            return leak_page(size);
        }

        if self.current.len() < size {
            self.bytes_wasted += self.current.len();
            self.current = leak_page(self.page_size);
            self.pages += 1;
            tracing::debug!(
                pages = self.pages,
                page_size = self.page_size,
                "arena: allocated page"
            );
        }

        let page = std::mem::take(&mut self.current);
        let (head, tail) = page.split_at_mut(size);
        self.current = tail;
        self.bytes_used += size;
        head
    }

    /// Copy `text` into the arena.
    pub fn alloc_str(&mut self, text: &str) -> &'static str {
        let buf = self.allocate(text.len());
        buf.copy_from_slice(text.as_bytes());
        let buf: &'static [u8] = buf;
        std::str::from_utf8(buf).unwrap_or_else(|_| Box::leak(Box::from(text)))
    }

    /// Bytes left in the current page.
    pub fn remaining(&self) -> usize {
        self.current.len()
    }

    /// Snapshot of the allocation counters.
    pub fn stats(&self) -> ArenaStats {
        ArenaStats {
            pages: self.pages,
            bytes_used: self.bytes_used,
            bytes_wasted: self.bytes_wasted,
        }
    }
}

impl Default for EntryArena {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EntryArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryArena")
            .field("page_size", &self.page_size)
            .field("remaining", &self.current.len())
            .field("stats", &self.stats())
            .finish()
    }
}

fn leak_page(size: usize) -> &'static mut [u8] {
    Box::leak(vec![0u8; size].into_boxed_slice())
}

#[cfg(test)]
mod tests;
