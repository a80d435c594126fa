//! Reference-relative key count comparison.
//!
//! Reports, for every language, how many keys it has and how far that is
//! from the reference language, together with its missing and extra keys.

use crate::core::{CatalogSet, ExtractOptions, KeyPathSet};

use super::structure::LanguageDiff;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCountRow {
    pub language: String,
    pub key_count: usize,
    /// `key_count - reference key count`.
    pub difference: i64,
    pub diff: LanguageDiff,
}

impl KeyCountRow {
    pub fn is_reference_aligned(&self) -> bool {
        self.diff.is_consistent()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCountComparison {
    pub reference: String,
    pub reference_count: usize,
    /// One row per language in roster order. The reference's own row has a
    /// zero difference and empty sets.
    pub rows: Vec<KeyCountRow>,
}

impl KeyCountComparison {
    pub fn is_consistent(&self) -> bool {
        self.rows.iter().all(KeyCountRow::is_reference_aligned)
    }
}

pub fn compare_key_counts(
    catalogs: &CatalogSet,
    reference: &str,
    options: ExtractOptions,
) -> KeyCountComparison {
    let reference_keys: KeyPathSet = catalogs
        .get(reference)
        .map(|c| c.key_paths(options))
        .unwrap_or_default();
    let reference_count = reference_keys.len();

    let rows = catalogs
        .iter()
        .map(|catalog| {
            let keys = catalog.key_paths(options);
            KeyCountRow {
                language: catalog.language.clone(),
                key_count: keys.len(),
                difference: keys.len() as i64 - reference_count as i64,
                diff: LanguageDiff::between(&catalog.language, &reference_keys, &keys),
            }
        })
        .collect();

    KeyCountComparison {
        reference: reference.to_string(),
        reference_count,
        rows,
    }
}
