//! Splitting `"Base_42"` literals into a base name and an instance number.
//!
//! Numbers are stored internally as `external + 1` so that `0` can mean
//! "no number". A name whose number was given explicitly is never split
//! again, otherwise `a_1_2_3` would change every time it was loaded.

/// Internal number meaning "no numeric suffix".
pub const NAME_NO_NUMBER: i32 = 0;

/// Convert a visible number to its stored form.
#[inline]
pub const fn external_to_internal(number: i32) -> i32 {
    number + 1
}

/// Convert a stored number to its visible form.
#[inline]
pub const fn internal_to_external(number: i32) -> i32 {
    number - 1
}

/// Split a trailing `_<digits>` suffix off `text`.
///
/// Returns the base name and the visible number. No split happens when:
/// - the last character is not an ASCII digit,
/// - the digit run is not preceded by `_` (the first character never counts
///   as part of the run),
/// - the run has more than one digit and starts with `0` (`Rocket_04`;
///   `Rocket_0` is fine),
/// - the value does not fit in `i32` with room for the stored `+ 1`.
///
/// The base may be empty (`_9` gives `("", 9)`); such names resolve to
/// `None`.
pub fn split_trailing_number(text: &str) -> Option<(&str, i32)> {
    let bytes = text.as_bytes();
    if !bytes.last()?.is_ascii_digit() {
        return None;
    }

    let mut start = bytes.len() - 1;
    while start > 0 && bytes[start - 1].is_ascii_digit() {
        start -= 1;
    }
    if start == 0 || bytes[start - 1] != b'_' {
        return None;
    }

    let digits = &text[start..];
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }

    let base = &text[..start - 1];
    let value: u64 = digits.parse().ok()?;
    let value = i32::try_from(value).ok().filter(|&v| v < i32::MAX)?;
    Some((base, value))
}
