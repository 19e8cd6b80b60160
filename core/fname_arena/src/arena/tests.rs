use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_no_page_until_first_request() {
    let arena = EntryArena::new();
    assert_eq!(arena.stats(), ArenaStats::default());
    assert_eq!(arena.remaining(), 0);
}

#[test]
fn test_bump_within_page() {
    let mut arena = EntryArena::with_page_size(64);
    let a = arena.allocate(10);
    let b = arena.allocate(20);
    assert_eq!(a.len(), 10);
    assert_eq!(b.len(), 20);
    assert_eq!(arena.remaining(), 34);
    assert_eq!(
        arena.stats(),
        ArenaStats {
            pages: 1,
            bytes_used: 30,
            bytes_wasted: 0,
        }
    );
}

#[test]
fn test_new_page_abandons_remainder() {
    let mut arena = EntryArena::with_page_size(16);
    arena.allocate(10);
    arena.allocate(10);
    let stats = arena.stats();
    assert_eq!(stats.pages, 2);
    assert_eq!(stats.bytes_wasted, 6);
    assert_eq!(arena.remaining(), 6);
}

#[test]
fn test_oversized_request_gets_dedicated_page() {
    let mut arena = EntryArena::with_page_size(16);
    arena.allocate(4);
    let big = arena.allocate(100);
    assert_eq!(big.len(), 100);
    // The current page keeps its remainder.
    assert_eq!(arena.remaining(), 12);
    assert_eq!(arena.stats().pages, 2);
    assert_eq!(arena.stats().bytes_wasted, 0);
}

#[test]
fn test_alloc_str_copies_bytes() {
    let mut arena = EntryArena::with_page_size(32);
    let mut source = String::from("Rocket");
    let stored = arena.alloc_str(&source);
    source.push_str("_changed");
    assert_eq!(stored, "Rocket");

    let wide = arena.alloc_str("Größe");
    assert_eq!(wide, "Größe");
}

#[test]
fn test_alloc_str_oversized_and_wide_across_pages() {
    let mut arena = EntryArena::with_page_size(8);
    let long = "Ünïcödé_".repeat(8);
    let stored = arena.alloc_str(&long);
    assert_eq!(stored, long);
    assert_eq!(arena.stats().bytes_used, long.len());

    // Fills the first page's tail, then spills to a fresh one.
    assert_eq!(arena.alloc_str("ßß"), "ßß");
    assert_eq!(arena.alloc_str("éééé"), "éééé");
    assert_eq!(arena.stats().bytes_used, long.len() + 12);
}

#[test]
fn test_buffers_do_not_overlap() {
    let mut arena = EntryArena::with_page_size(8);
    let a = arena.allocate(4);
    a.copy_from_slice(b"abcd");
    let b = arena.allocate(4);
    b.copy_from_slice(b"wxyz");
    assert_eq!(&a[..], b"abcd");
    assert_eq!(&b[..], b"wxyz");
}

#[test]
fn test_zero_sized_request() {
    let mut arena = EntryArena::with_page_size(8);
    let empty = arena.alloc_str("");
    assert_eq!(empty, "");
    assert_eq!(arena.stats().bytes_used, 0);
}
