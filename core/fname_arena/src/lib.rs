//! Storage primitives for the fname name table.
//!
//! Two pieces, both append-only and never freed individually:
//!
//! - [`EntryArena`]: a bump allocator handing out byte buffers carved from
//!   large pages. Buffers live for the rest of the process.
//! - [`BlockList`]: a growable table of write-once slots stored in
//!   fixed-size blocks, so a slot never moves once it exists.
//!
//! Neither type synchronizes its writers. The name table serializes every
//! allocation and every `grow` behind its single writer lock; readers of a
//! `BlockList` need no lock at all.

mod arena;
mod block_list;

pub use arena::{ArenaStats, EntryArena, DEFAULT_PAGE_SIZE};
pub use block_list::{BlockList, CapacityError, PublishError};
