//! `fname split`: show how names break into base string and number.

use fname_table::split_trailing_number;

/// One line per input: the base and visible number, or the input unsplit.
pub fn split_names<S: AsRef<str>>(texts: &[S]) -> Vec<String> {
    texts
        .iter()
        .map(|text| {
            let text = text.as_ref();
            match split_trailing_number(text) {
                Some(("", number)) => format!("{text}: number {number} with empty base, resolves to None"),
                Some((base, number)) => format!("{text}: base '{base}', number {number}"),
                None => format!("{text}: no number"),
            }
        })
        .collect()
}
