//! `fname display`: identifier-style names as human-readable labels.

use fname_table::to_display_string;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Treat inputs as bool properties and drop their `b` prefix.
    pub is_bool: bool,
}

pub fn display_names<S: AsRef<str>>(texts: &[S], options: DisplayOptions) -> Vec<String> {
    texts
        .iter()
        .map(|text| to_display_string(text.as_ref(), options.is_bool))
        .collect()
}
