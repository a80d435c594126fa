//! Key path extraction.
//!
//! Walks a JSON document and collects the dotted path of every location in it.
//! Object members contribute `parent.key`, sequence elements contribute
//! `parent[index]`. Scalars contribute nothing beyond their own path.

use std::collections::BTreeSet;

use serde_json::Value;

/// All key paths reachable in one catalog.
///
/// A `BTreeSet` so that iteration (and therefore report output) is sorted.
pub type KeyPathSet = BTreeSet<String>;

/// Options controlling how sequences are walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Emit `key[index]` for each sequence element and recurse into it.
    /// When false, a sequence is an opaque leaf.
    pub index_sequences: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            index_sequences: true,
        }
    }
}

/// Collect every key path in `value`.
///
/// # Example
///
/// ```
/// use lockstep::core::{ExtractOptions, extract_key_paths};
/// use serde_json::json;
///
/// let doc = json!({"Common": {"save": "Save", "tags": ["a", "b"]}});
/// let keys = extract_key_paths(&doc, ExtractOptions::default());
///
/// assert!(keys.contains("Common"));
/// assert!(keys.contains("Common.save"));
/// assert!(keys.contains("Common.tags[1]"));
/// ```
pub fn extract_key_paths(value: &Value, options: ExtractOptions) -> KeyPathSet {
    extract_key_paths_with_prefix(value, "", options)
}

/// Collect every key path in `value`, rooted at `prefix`.
///
/// The prefix itself is not part of the result.
pub fn extract_key_paths_with_prefix(
    value: &Value,
    prefix: &str,
    options: ExtractOptions,
) -> KeyPathSet {
    let mut keys = KeyPathSet::new();
    walk(value, prefix, options, &mut keys);
    keys
}

fn walk(value: &Value, prefix: &str, options: ExtractOptions, keys: &mut KeyPathSet) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = join_key(prefix, key);
                walk(child, &path, options, keys);
                keys.insert(path);
            }
        }
        Value::Array(items) if options.index_sequences => {
            for (index, child) in items.iter().enumerate() {
                let path = format!("{}[{}]", prefix, index);
                walk(child, &path, options, keys);
                keys.insert(path);
            }
        }
        _ => {}
    }
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// The last `.`-separated segment of a key path.
///
/// `"Auth.Login.title"` -> `"title"`, `"items[0]"` -> `"items[0]"`.
pub fn last_segment(key_path: &str) -> &str {
    key_path.rsplit('.').next().unwrap_or(key_path)
}
