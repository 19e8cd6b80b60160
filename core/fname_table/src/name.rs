//! Name handles.
//!
//! A [`Name`] is three integers: the comparison slot (case-insensitive
//! identity), the display slot (case-preserving spelling, equal to the
//! comparison slot unless that feature is on) and the instance number.
//! Handles are `Copy` and independent of the registry once obtained;
//! turning one back into text goes through a registry.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::hash::cmp_ignore_case;
use crate::registry::{FindName, NameRegistry};
use crate::reserved::EName;
use crate::split::{
    external_to_internal, internal_to_external, split_trailing_number, NAME_NO_NUMBER,
};

/// Printed for indices that do not resolve to an entry.
pub const INVALID_NAME: &str = "*INVALID*";

/// Interned name handle.
///
/// Two names are equal iff their comparison index and number are equal;
/// case never matters for identity.
#[derive(Copy, Clone, Default)]
pub struct Name {
    comparison: u32,
    display: u32,
    number: i32,
}

crate::static_assert_size!(Name, 12);

impl Name {
    /// The reserved `None` name. Also the result of every miss and of
    /// empty or absent input.
    pub const NONE: Name = Name {
        comparison: 0,
        display: 0,
        number: NAME_NO_NUMBER,
    };

    #[inline]
    pub(crate) const fn from_parts(comparison: u32, display: u32, number: i32) -> Self {
        Name {
            comparison,
            display,
            number,
        }
    }

    /// Handle of a hardcoded name. Needs no registry lookup.
    #[inline]
    pub const fn hardcoded(name: EName) -> Self {
        Name::from_parts(name.index(), name.index(), NAME_NO_NUMBER)
    }

    #[inline]
    pub const fn comparison_index(self) -> u32 {
        self.comparison
    }

    #[inline]
    pub const fn display_index(self) -> u32 {
        self.display
    }

    /// Stored number: `0` for none, otherwise visible number + 1.
    #[inline]
    pub const fn number(self) -> i32 {
        self.number
    }

    /// Visible number, if the name has one.
    pub const fn external_number(self) -> Option<i32> {
        if self.number == NAME_NO_NUMBER {
            None
        } else {
            Some(internal_to_external(self.number))
        }
    }

    /// Whether this is the `None` name with no number.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.comparison == EName::None.index() && self.number == NAME_NO_NUMBER
    }

    /// Same string, different stored number.
    #[must_use]
    pub const fn with_number(self, number: i32) -> Self {
        Name::from_parts(self.comparison, self.display, number)
    }

    /// Order by comparison index, then number.
    ///
    /// Fast and consistent within a process, but not alphabetical.
    pub fn compare_indexes(self, other: Name) -> Ordering {
        self.comparison
            .cmp(&other.comparison)
            .then(self.number.cmp(&other.number))
    }

    /// Intern `text` in the global registry, splitting a number suffix.
    pub fn new(text: &str) -> Self {
        NameRegistry::global().name(text)
    }

    /// Look `text` up in the global registry without inserting.
    pub fn find(text: &str) -> Self {
        NameRegistry::global().find(text)
    }

    /// Intern optional text; `None` gives [`Name::NONE`].
    pub fn from_opt(text: Option<&str>) -> Self {
        NameRegistry::global().name_opt(text, FindName::Add)
    }

    /// Spelling without the number, from the global registry.
    pub fn plain_name_string(self) -> String {
        NameRegistry::global().plain_name(self).to_string()
    }

    /// Append the full name (with number) to `out`.
    pub fn append_string(self, out: &mut String) {
        NameRegistry::global().append_name(self, out);
    }

    /// Alphabetical (case-insensitive) comparison through the global
    /// registry.
    pub fn compare(self, other: Name) -> Ordering {
        NameRegistry::global().compare(self, other)
    }
}

impl PartialEq for Name {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.comparison == other.comparison && self.number == other.number
    }
}

impl Eq for Name {}

impl PartialEq<EName> for Name {
    #[inline]
    fn eq(&self, other: &EName) -> bool {
        self.comparison == other.index() && self.number == NAME_NO_NUMBER
    }
}

impl Hash for Name {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.comparison.hash(state);
        self.number.hash(state);
    }
}

impl From<EName> for Name {
    #[inline]
    fn from(name: EName) -> Self {
        Name::hardcoded(name)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name(comparison={}, display={}, number={})",
            self.comparison, self.display, self.number
        )
    }
}

/// Prints through the global registry.
impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = NameRegistry::global();
        f.write_str(registry.plain_name(*self))?;
        if let Some(number) = self.external_number() {
            write!(f, "_{number}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Name {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Name {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Name::new(&text))
    }
}

/// Handle construction and resolution.
impl NameRegistry {
    /// Find or insert `text`, splitting a trailing `_<number>` suffix.
    ///
    /// Empty text, over-long text and `Find` misses give [`Name::NONE`].
    pub fn find_or_add(&self, text: &str, mode: FindName) -> Name {
        self.make_name(text, NAME_NO_NUMBER, mode, true)
    }

    /// Find or insert `text` verbatim; a number suffix stays part of the
    /// string.
    pub fn find_or_add_exact(&self, text: &str, mode: FindName) -> Name {
        self.make_name(text, NAME_NO_NUMBER, mode, false)
    }

    /// Intern `text`, splitting a number suffix.
    pub fn name(&self, text: &str) -> Name {
        self.find_or_add(text, FindName::Add)
    }

    /// Look `text` up without inserting.
    pub fn find(&self, text: &str) -> Name {
        self.find_or_add(text, FindName::Find)
    }

    /// Intern `text` verbatim, as a serialized name table would.
    pub fn name_exact(&self, text: &str) -> Name {
        self.find_or_add_exact(text, FindName::Add)
    }

    /// Intern optional text; absent text gives [`Name::NONE`].
    pub fn name_opt(&self, text: Option<&str>, mode: FindName) -> Name {
        match text {
            Some(text) => self.find_or_add(text, mode),
            None => Name::NONE,
        }
    }

    /// Intern `text` with a stored `number`.
    ///
    /// A non-zero number is taken as given and `text` is not split again.
    pub fn name_with_number(&self, text: &str, number: i32, mode: FindName) -> Name {
        self.make_name(text, number, mode, true)
    }

    /// Rebuild a handle from a comparison index, e.g. one read off the
    /// wire. `None` if the slot is not populated.
    pub fn name_from_index(&self, comparison: u32, number: i32) -> Option<Name> {
        self.entry(comparison)?;
        Some(Name::from_parts(comparison, comparison, number))
    }

    fn make_name(&self, text: &str, number: i32, mode: FindName, split: bool) -> Name {
        let (text, number) = match split_trailing_number(text) {
            Some((base, visible)) if split && number == NAME_NO_NUMBER => {
                (base, external_to_internal(visible))
            }
            _ => (text, number),
        };

        if text.is_empty() {
            return Name::NONE;
        }
        let max = self.config().max_name_len;
        if text.len() > max && text.chars().count() > max {
            tracing::warn!(
                len = text.chars().count(),
                max,
                "name longer than the limit resolves to None"
            );
            return Name::NONE;
        }

        match self.find_or_add_indices(text, mode) {
            Some(indices) => Name::from_parts(indices.comparison, indices.display, number),
            None => Name::NONE,
        }
    }

    /// Display spelling without the number.
    ///
    /// Falls back to the comparison spelling, then to the empty string.
    pub fn plain_name(&self, name: Name) -> &'static str {
        self.resolve(name.display)
            .or_else(|| self.resolve(name.comparison))
            .unwrap_or("")
    }

    /// Comparison spelling (the first spelling registered for the name).
    pub fn comparison_name(&self, name: Name) -> &'static str {
        self.resolve(name.comparison).unwrap_or("")
    }

    /// Append the full name to `out` without an intermediate string.
    pub fn append_name(&self, name: Name, out: &mut String) {
        out.push_str(self.plain_name(name));
        if let Some(number) = name.external_number() {
            out.push('_');
            out.push_str(&number.to_string());
        }
    }

    /// Full name: display spelling plus `_<number>` when numbered.
    pub fn name_string(&self, name: Name) -> String {
        let plain = self.plain_name(name);
        let mut out = String::with_capacity(plain.len() + 6);
        self.append_name(name, &mut out);
        out
    }

    /// Case-insensitive alphabetical order, then number.
    ///
    /// Total within a process; not stable across processes.
    pub fn compare(&self, a: Name, b: Name) -> Ordering {
        if a.comparison == b.comparison {
            return a.number.cmp(&b.number);
        }
        cmp_ignore_case(self.comparison_name(a), self.comparison_name(b))
            .then(a.comparison.cmp(&b.comparison))
    }

    /// Debug rendering of a raw index that may not be valid.
    pub fn safe_string(&self, index: u32, number: i32) -> String {
        match self.entry(index) {
            Some(_) => self.name_string(Name::from_parts(index, index, number)),
            None => INVALID_NAME.to_string(),
        }
    }
}
