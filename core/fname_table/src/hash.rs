//! Hashing and comparison for name lookup.
//!
//! Case-insensitive identity folds every character to lowercase: ASCII
//! through the byte fast path, everything else through Unicode lowercase
//! when it maps to exactly one character. Hash, equality and ordering all
//! use the same folding, so equal names always land in the same bucket.

use std::cmp::Ordering;

const CRC32_POLY: u32 = 0xEDB8_8320;

static CRC_TABLE: [u32; 256] = make_crc_table();

const fn make_crc_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        #[expect(clippy::cast_possible_truncation, reason = "i < 256")]
        let mut crc = i as u32;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 == 0 {
                crc >> 1
            } else {
                (crc >> 1) ^ CRC32_POLY
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

#[inline]
fn crc_update(crc: u32, byte: u8) -> u32 {
    (crc >> 8) ^ CRC_TABLE[((crc ^ u32::from(byte)) & 0xFF) as usize]
}

/// How two spellings are compared.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NameCase {
    /// Comparison identity: `"Foo"` and `"FOO"` are the same name.
    IgnoreCase,
    /// Display identity: only byte-identical spellings match.
    CaseSensitive,
}

impl NameCase {
    #[inline]
    pub fn hash(self, text: &str) -> u32 {
        match self {
            NameCase::IgnoreCase => strihash(text),
            NameCase::CaseSensitive => strcrc32(text),
        }
    }

    #[inline]
    pub fn matches(self, stored: &str, text: &str) -> bool {
        match self {
            NameCase::IgnoreCase => eq_ignore_case(stored, text),
            NameCase::CaseSensitive => stored == text,
        }
    }
}

/// Fold a character for case-insensitive comparison.
#[inline]
pub fn fold(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// CRC-32 of the UTF-8 bytes of `text`.
pub fn strcrc32(text: &str) -> u32 {
    !text.bytes().fold(!0, crc_update)
}

/// CRC-32 of the case-folded UTF-8 bytes of `text`.
pub fn strihash(text: &str) -> u32 {
    let mut crc = !0u32;
    let mut buf = [0u8; 4];
    for c in text.chars() {
        if c.is_ascii() {
            #[expect(clippy::cast_possible_truncation, reason = "ASCII fits in a byte")]
            let byte = c.to_ascii_lowercase() as u8;
            crc = crc_update(crc, byte);
        } else {
            for &byte in fold(c).encode_utf8(&mut buf).as_bytes() {
                crc = crc_update(crc, byte);
            }
        }
    }
    !crc
}

/// Case-insensitive equality under [`fold`].
#[inline]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.chars().map(fold).eq(b.chars().map(fold))
}

/// Case-insensitive ordering under [`fold`].
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars().map(fold).cmp(b.chars().map(fold))
}

/// Key used to detect case-insensitive collisions in bulk.
pub fn folded(text: &str) -> String {
    text.chars().map(fold).collect()
}

#[cfg(test)]
mod tests;
