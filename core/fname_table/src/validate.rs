//! Character validation for names used as identifiers, object names and
//! package paths.

use std::fmt;

use smallvec::SmallVec;

use crate::name::Name;
use crate::registry::NameRegistry;

/// Characters not allowed in plain names.
pub const INVALID_NAME_CHARACTERS: &str = "\"' ,\n\r\t";

/// Characters not allowed in object names.
pub const INVALID_OBJECTNAME_CHARACTERS: &str = "\"' ,/.:|&!~\n\r\t@#(){}[]=;^%$`";

/// Characters not allowed in long package names.
pub const INVALID_LONGPACKAGE_CHARACTERS: &str = "\\:*?\"<>|' ,.&!~\n\r\t@#";

/// A name contains characters from the rejected set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Name may not contain the following characters: {}", Printable(.matched))]
pub struct InvalidNameError {
    /// Offending characters, each once, in the order of the rejected set.
    pub matched: String,
}

/// Check `text` against a set of rejected characters.
pub fn validate_chars(text: &str, invalid: &str) -> Result<(), InvalidNameError> {
    let mut matched: SmallVec<[char; 8]> = SmallVec::new();
    for c in invalid.chars() {
        if !matched.contains(&c) && text.contains(c) {
            matched.push(c);
        }
    }
    if matched.is_empty() {
        Ok(())
    } else {
        Err(InvalidNameError {
            matched: matched.into_iter().collect(),
        })
    }
}

impl NameRegistry {
    /// Validate the full string form of `name` (number included).
    pub fn validate_name(&self, name: Name, invalid: &str) -> Result<(), InvalidNameError> {
        validate_chars(&self.name_string(name), invalid)
    }
}

/// Shows control characters escaped so the message stays on one line.
struct Printable<'a>(&'a str);

impl fmt::Display for Printable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                c => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}
