//! `fname reserved`: list the hardcoded names.

use fname_table::{EName, NameRegistry};

/// Which part of the hardcoded table to list.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ReservedFilter {
    #[default]
    All,
    /// Only names that travel as compact integers.
    Networked,
    /// Only names above the network watermark.
    LocalOnly,
}

/// `index  text` lines in index order, with a marker after the last
/// networked index.
pub fn list_reserved(registry: &NameRegistry, filter: ReservedFilter) -> Vec<String> {
    let watermark = registry.config().network_watermark;
    let mut names: Vec<EName> = EName::ALL.to_vec();
    names.sort_unstable();

    let mut lines = Vec::with_capacity(names.len() + 1);
    let mut marked = false;
    for name in names {
        let networked = name.index() <= watermark;
        let keep = match filter {
            ReservedFilter::All => true,
            ReservedFilter::Networked => networked,
            ReservedFilter::LocalOnly => !networked,
        };
        if !keep {
            continue;
        }
        if filter == ReservedFilter::All && !networked && !marked {
            lines.push(format!("---- network watermark {watermark} ----"));
            marked = true;
        }
        let text = registry.resolve(name.index()).unwrap_or(name.as_str());
        lines.push(format!("{:>5}  {text}", name.index()));
    }
    lines
}
