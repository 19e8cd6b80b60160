//! `fname stats`: hash table occupancy.

use std::fmt;

use fname_table::{HashStats, NameRegistry};

/// The one-line summary plus a detailed breakdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashReport {
    pub stats: HashStats,
    pub case_preserving: bool,
}

impl fmt::Display for HashReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.stats;
        writeln!(f, "{s}")?;
        writeln!(f, "  narrow names:     {}", s.narrow_names)?;
        writeln!(f, "  wide names:       {}", s.wide_names)?;
        writeln!(f, "  longest chain:    {}", s.longest_chain)?;
        if self.case_preserving {
            writeln!(f, "  display bins:     {}", s.used_display_bins)?;
        }
        write!(
            f,
            "  arena:            {} pages, {} bytes used, {} bytes wasted",
            s.arena_pages, s.arena_bytes_used, s.arena_bytes_wasted
        )
    }
}

/// Intern `extra` names first (e.g. to load the table), then report.
pub fn hash_report<S: AsRef<str>>(registry: &NameRegistry, extra: &[S]) -> HashReport {
    for text in extra {
        registry.name(text.as_ref());
    }
    HashReport {
        stats: registry.hash_stats(),
        case_preserving: registry.config().case_preserving,
    }
}
