//! `fname intern`: intern names and show their handles.

use std::fmt;

use fname_table::{
    validate_chars, FindName, Name, NameRegistry, INVALID_NAME_CHARACTERS,
    INVALID_OBJECTNAME_CHARACTERS,
};

/// How one input resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InternReport {
    pub text: String,
    pub name: Name,
    /// String form read back from the registry.
    pub resolved: String,
    /// Problems with the resolved string as a plain name or object name.
    pub warnings: Vec<String>,
}

impl fmt::Display for InternReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> comparison {}, display {}, number {} ('{}')",
            self.text,
            self.name.comparison_index(),
            self.name.display_index(),
            self.name.external_number().map_or_else(|| "none".to_string(), |n| n.to_string()),
            self.resolved
        )?;
        for warning in &self.warnings {
            write!(f, "\n    {warning}")?;
        }
        Ok(())
    }
}

/// Intern (or with `find_only`, look up) each input.
///
/// `exact` keeps any number suffix as part of the string.
pub fn intern_names<S: AsRef<str>>(
    registry: &NameRegistry,
    texts: &[S],
    find_only: bool,
    exact: bool,
) -> Vec<InternReport> {
    let mode = if find_only {
        FindName::Find
    } else {
        FindName::Add
    };
    texts
        .iter()
        .map(|text| {
            let text = text.as_ref();
            let name = if exact {
                registry.find_or_add_exact(text, mode)
            } else {
                registry.find_or_add(text, mode)
            };
            let mut warnings = Vec::new();
            if let Err(err) = validate_chars(text, INVALID_NAME_CHARACTERS) {
                warnings.push(format!("as a name: {err}"));
            } else if let Err(err) = validate_chars(text, INVALID_OBJECTNAME_CHARACTERS) {
                warnings.push(format!("as an object name: {err}"));
            }
            InternReport {
                text: text.to_string(),
                name,
                resolved: registry.name_string(name),
                warnings,
            }
        })
        .collect()
}
