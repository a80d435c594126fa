//! Structural consistency rule.
//!
//! Compares every language's key path set with the baseline language and
//! records which keys are missing and which are extra.

use crate::core::{CatalogSet, ExtractOptions, KeyPathSet};

/// Missing and extra keys of one language relative to a baseline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageDiff {
    pub language: String,
    /// In the baseline but not in this language.
    pub missing: KeyPathSet,
    /// In this language but not in the baseline.
    pub extra: KeyPathSet,
}

impl LanguageDiff {
    pub fn between(language: &str, baseline_keys: &KeyPathSet, keys: &KeyPathSet) -> Self {
        Self {
            language: language.to_string(),
            missing: baseline_keys.difference(keys).cloned().collect(),
            extra: keys.difference(baseline_keys).cloned().collect(),
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Key count of one catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCount {
    pub language: String,
    pub count: usize,
}

/// Result of the structural check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureReport {
    pub baseline: String,
    /// Key count per language, in roster order.
    pub key_counts: Vec<KeyCount>,
    /// One entry per non-baseline language, in roster order.
    pub diffs: Vec<LanguageDiff>,
}

impl StructureReport {
    pub fn is_consistent(&self) -> bool {
        self.diffs.iter().all(LanguageDiff::is_consistent)
    }

    pub fn inconsistent(&self) -> impl Iterator<Item = &LanguageDiff> {
        self.diffs.iter().filter(|d| !d.is_consistent())
    }
}

/// Compare every catalog with `baseline`.
///
/// The baseline itself is never diffed. If it is not part of `catalogs`
/// every key of every other language counts as extra.
pub fn check_structure(
    catalogs: &CatalogSet,
    baseline: &str,
    options: ExtractOptions,
) -> StructureReport {
    let baseline_keys = catalogs
        .get(baseline)
        .map(|c| c.key_paths(options))
        .unwrap_or_default();

    let mut key_counts = Vec::with_capacity(catalogs.len());
    let mut diffs = Vec::new();

    for catalog in catalogs.iter() {
        let keys = catalog.key_paths(options);
        key_counts.push(KeyCount {
            language: catalog.language.clone(),
            count: keys.len(),
        });
        if catalog.language != baseline {
            diffs.push(LanguageDiff::between(&catalog.language, &baseline_keys, &keys));
        }
    }

    StructureReport {
        baseline: baseline.to_string(),
        key_counts,
        diffs,
    }
}
