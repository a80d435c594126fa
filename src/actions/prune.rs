//! Extra-key pruning.
//!
//! Removes, from every non-reference catalog, the keys the reference language
//! does not have. Missing keys are never added.

use std::{cmp::Ordering, path::PathBuf};

use anyhow::Result;
use serde_json::Value;
use tracing::{debug, warn};

use super::{
    catalog_writer::{render_catalog, write_catalog},
    stats::ActionStats,
};
use crate::{
    core::{CatalogSet, ExtractOptions, KeyPathSet},
    rules::LanguageDiff,
};

/// What happened to one key path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// An intermediate segment is absent or is not a mapping.
    SkippedBrokenParent,
    /// The parent mapping exists but has no such key.
    SkippedAbsentKey,
}

impl DeleteOutcome {
    pub fn is_deleted(self) -> bool {
        matches!(self, DeleteOutcome::Deleted)
    }
}

impl std::fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteOutcome::Deleted => write!(f, "deleted"),
            DeleteOutcome::SkippedBrokenParent => write!(f, "parent path not found"),
            DeleteOutcome::SkippedAbsentKey => write!(f, "key not found"),
        }
    }
}

/// One step of a key path: a mapping member or a sequence element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Key(&'a str),
    Index(usize),
}

/// Split a key path into segments.
///
/// `"steps[1].title"` becomes `steps`, `1`, `title`. A part whose bracket
/// suffix is not a plain index list is kept whole as a member name.
fn parse_key_path(key_path: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    for part in key_path.split('.') {
        let (name, suffix) = match part.find('[') {
            Some(pos) => part.split_at(pos),
            None => (part, ""),
        };
        match parse_indices(suffix) {
            Some(indices) => {
                if !name.is_empty() || indices.is_empty() {
                    segments.push(Segment::Key(name));
                }
                segments.extend(indices.into_iter().map(Segment::Index));
            }
            None => segments.push(Segment::Key(part)),
        }
    }
    segments
}

/// Parse `"[1][0]"` into `[1, 0]`; `None` if anything else is present.
fn parse_indices(mut suffix: &str) -> Option<Vec<usize>> {
    let mut indices = Vec::new();
    while let Some(rest) = suffix.strip_prefix('[') {
        let (digits, tail) = rest.split_once(']')?;
        indices.push(digits.parse().ok()?);
        suffix = tail;
    }
    suffix.is_empty().then_some(indices)
}

/// Order in which one pass deletes its keys.
///
/// Parents come before their children and member names sort ascending, but
/// sequence indices sort descending so removing an element never shifts one
/// that is still to be deleted.
fn deletion_order(a: &[Segment<'_>], b: &[Segment<'_>]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        let ordering = match (x, y) {
            (Segment::Key(x), Segment::Key(y)) => x.cmp(y),
            (Segment::Index(x), Segment::Index(y)) => y.cmp(x),
            (Segment::Key(_), Segment::Index(_)) => Ordering::Less,
            (Segment::Index(_), Segment::Key(_)) => Ordering::Greater,
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    a.len().cmp(&b.len())
}

/// Delete a key path (e.g. `"Common.submit"` or `"steps[1]"`) from a JSON
/// document.
///
/// Every segment but the last must name an existing mapping member or
/// sequence element. Object member order of the remaining keys is preserved;
/// later sequence elements move down by one.
pub fn delete_key_path(document: &mut Value, key_path: &str) -> DeleteOutcome {
    delete_segments(document, &parse_key_path(key_path))
}

fn delete_segments(document: &mut Value, segments: &[Segment<'_>]) -> DeleteOutcome {
    let Some((last, parents)) = segments.split_last() else {
        return DeleteOutcome::SkippedAbsentKey;
    };

    let mut current = document;
    for segment in parents {
        let child = match (segment, current) {
            (Segment::Key(key), Value::Object(map)) => map.get_mut(*key),
            (Segment::Index(index), Value::Array(items)) => items.get_mut(*index),
            _ => None,
        };
        match child {
            Some(child) => current = child,
            None => return DeleteOutcome::SkippedBrokenParent,
        }
    }

    match (last, current) {
        (Segment::Key(key), Value::Object(map)) => {
            if map.shift_remove(*key).is_some() {
                DeleteOutcome::Deleted
            } else {
                DeleteOutcome::SkippedAbsentKey
            }
        }
        (Segment::Index(index), Value::Array(items)) => {
            if *index < items.len() {
                items.remove(*index);
                DeleteOutcome::Deleted
            } else {
                DeleteOutcome::SkippedAbsentKey
            }
        }
        _ => DeleteOutcome::SkippedBrokenParent,
    }
}

/// Outcome of deleting one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOutcome {
    pub key: String,
    pub outcome: DeleteOutcome,
}

/// Delete `keys` from `document`, one outcome per key in deletion order.
///
/// A key whose parent an earlier deletion already removed is skipped.
pub fn prune_document(document: &mut Value, keys: &KeyPathSet) -> Vec<KeyOutcome> {
    let mut ordered: Vec<(&String, Vec<Segment<'_>>)> =
        keys.iter().map(|key| (key, parse_key_path(key))).collect();
    ordered.sort_by(|(_, a), (_, b)| deletion_order(a, b));

    ordered
        .into_iter()
        .map(|(key, segments)| KeyOutcome {
            key: key.clone(),
            outcome: delete_segments(document, &segments),
        })
        .collect()
}

/// Keys to remove from one catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrunePlan {
    pub language: String,
    pub path: PathBuf,
    pub extra: KeyPathSet,
}

impl PrunePlan {
    pub fn is_empty(&self) -> bool {
        self.extra.is_empty()
    }
}

/// Plan one prune per non-reference language that has extra keys.
pub fn plan_prune(
    catalogs: &CatalogSet,
    reference: &str,
    options: ExtractOptions,
) -> Vec<PrunePlan> {
    let reference_keys = catalogs
        .get(reference)
        .map(|c| c.key_paths(options))
        .unwrap_or_default();

    catalogs
        .iter()
        .filter(|c| c.language != reference)
        .map(|catalog| {
            let keys = catalog.key_paths(options);
            PrunePlan {
                language: catalog.language.clone(),
                path: catalog.path.clone(),
                extra: LanguageDiff::between(&catalog.language, &reference_keys, &keys).extra,
            }
        })
        .filter(|plan| !plan.is_empty())
        .collect()
}

/// Result of applying one plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneResult {
    pub language: String,
    pub path: PathBuf,
    pub outcomes: Vec<KeyOutcome>,
    /// Whether the catalog file was rewritten.
    pub rewritten: bool,
}

impl PruneResult {
    pub fn deleted(&self) -> impl Iterator<Item = &KeyOutcome> {
        self.outcomes.iter().filter(|o| o.outcome.is_deleted())
    }

    pub fn skipped(&self) -> impl Iterator<Item = &KeyOutcome> {
        self.outcomes.iter().filter(|o| !o.outcome.is_deleted())
    }
}

fn outcome_stats(outcomes: &[KeyOutcome]) -> ActionStats {
    let deleted = outcomes.iter().filter(|o| o.outcome.is_deleted()).count();
    ActionStats {
        processed: outcomes.len(),
        skipped: outcomes.len() - deleted,
        changes_applied: deleted,
        files_modified: usize::from(deleted > 0),
    }
}

/// Run `plans` against copies of the documents.
///
/// Reports exactly what [`apply_prune`] would do; nothing is modified.
pub fn preview_prune(
    catalogs: &CatalogSet,
    plans: &[PrunePlan],
) -> (Vec<PruneResult>, ActionStats) {
    let mut results = Vec::with_capacity(plans.len());
    let mut stats = ActionStats::default();

    for plan in plans {
        let Some(catalog) = catalogs.get(&plan.language) else {
            continue;
        };

        let mut document = catalog.document.clone();
        let outcomes = prune_document(&mut document, &plan.extra);
        stats += outcome_stats(&outcomes);

        results.push(PruneResult {
            language: plan.language.clone(),
            path: plan.path.clone(),
            outcomes,
            rewritten: false,
        });
    }

    (results, stats)
}

/// Apply `plans` to the in-memory catalogs and rewrite the changed files.
///
/// Each document is fully serialized before its file is replaced. Catalogs
/// where nothing was deleted are not written.
pub fn apply_prune(
    catalogs: &mut CatalogSet,
    plans: &[PrunePlan],
) -> Result<(Vec<PruneResult>, ActionStats)> {
    let mut results = Vec::with_capacity(plans.len());
    let mut stats = ActionStats::default();

    for plan in plans {
        let Some(catalog) = catalogs.get_mut(&plan.language) else {
            continue;
        };

        let outcomes = prune_document(&mut catalog.document, &plan.extra);
        for KeyOutcome { key, outcome } in &outcomes {
            if outcome.is_deleted() {
                debug!(language = %plan.language, key = %key, "deleted key");
            } else {
                warn!(language = %plan.language, key = %key, reason = %outcome, "skipped key");
            }
        }

        let plan_stats = outcome_stats(&outcomes);
        let rewritten = plan_stats.files_modified > 0;
        if rewritten {
            let content = render_catalog(&catalog.document)?;
            write_catalog(&catalog.path, &content)?;
            catalog.raw = content;
        }
        stats += plan_stats;

        results.push(PruneResult {
            language: plan.language.clone(),
            path: plan.path.clone(),
            outcomes,
            rewritten,
        });
    }

    Ok((results, stats))
}
