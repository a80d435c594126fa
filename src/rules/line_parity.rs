//! Line-count parity rule.
//!
//! A coarse check that catalogs were edited in lockstep: with one key per
//! line, structurally identical catalogs have the same number of lines.
//! Independent of the structural check.

use crate::core::CatalogSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCount {
    pub language: String,
    pub lines: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineParityReport {
    /// Line count per catalog, in roster order.
    pub counts: Vec<LineCount>,
}

impl LineParityReport {
    /// True when every catalog has the same number of lines.
    pub fn is_consistent(&self) -> bool {
        self.counts.windows(2).all(|w| w[0].lines == w[1].lines)
    }
}

pub fn check_line_parity(catalogs: &CatalogSet) -> LineParityReport {
    LineParityReport {
        counts: catalogs
            .iter()
            .map(|c| LineCount {
                language: c.language.clone(),
                lines: c.line_count(),
            })
            .collect(),
    }
}
