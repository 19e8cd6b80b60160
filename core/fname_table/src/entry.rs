//! Interned name entries.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

/// Character width of an entry's payload.
///
/// Pure-ASCII names are `Narrow`; anything else is `Wide`. The payload is
/// UTF-8 either way. Entries of different encodings never compare equal,
/// so the tag doubles as a cheap first filter during chain scans.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Encoding {
    Narrow,
    Wide,
}

impl Encoding {
    #[inline]
    pub fn of(text: &str) -> Self {
        if text.is_ascii() {
            Encoding::Narrow
        } else {
            Encoding::Wide
        }
    }
}

/// One interned string.
///
/// Entries double as bucket-chain nodes: `next` links to the entry that was
/// the bucket head when this one was inserted. Apart from the replacement
/// spelling, nothing in an entry changes after it is published.
pub struct NameEntry {
    index: u32,
    encoding: Encoding,
    text: &'static str,
    /// Replacement spelling: spelling-table index + 1, 0 when unset.
    spelling: AtomicU32,
    /// Next chain entry: slot index + 1, 0 ends the chain.
    next: u32,
}

impl NameEntry {
    pub(crate) fn new(index: u32, text: &'static str, next: u32) -> Self {
        Self {
            index,
            encoding: Encoding::of(text),
            text,
            spelling: AtomicU32::new(0),
            next,
        }
    }

    /// Slot index of this entry.
    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[inline]
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    #[inline]
    pub fn is_wide(&self) -> bool {
        self.encoding == Encoding::Wide
    }

    /// Payload length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Spelling as first registered, ignoring any replacement.
    #[inline]
    pub fn original(&self) -> &'static str {
        self.text
    }

    /// Bytes this entry accounts for: the record plus its payload.
    pub fn footprint(&self) -> usize {
        std::mem::size_of::<Self>() + self.text.len()
    }

    #[inline]
    pub(crate) fn next_link(&self) -> u32 {
        self.next
    }

    #[inline]
    pub(crate) fn spelling(&self) -> Option<u32> {
        match self.spelling.load(Ordering::Acquire) {
            0 => None,
            link => Some(link - 1),
        }
    }

    pub(crate) fn set_spelling(&self, spelling_index: u32) {
        self.spelling.store(spelling_index + 1, Ordering::Release);
    }
}

impl fmt::Debug for NameEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameEntry")
            .field("index", &self.index)
            .field("encoding", &self.encoding)
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}
