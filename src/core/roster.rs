//! Language roster resolution.
//!
//! The roster is the ordered list of language tags a run operates on. It comes
//! from, in order of preference:
//!
//! 1. An explicit list (`--languages` or the `languages` config field)
//! 2. A TypeScript/JavaScript module declaring
//!    `export const SUPPORTED_LANGUAGES = { ... } as const;` (`rosterFile`)
//! 3. The `*.json` files present in the catalog directory

use std::{fs, path::Path, sync::LazyLock};

use regex::Regex;
use tracing::debug;

use super::{catalog::CATALOG_EXTENSION, error::CatalogError};

static SUPPORTED_LANGUAGES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)export\s+const\s+SUPPORTED_LANGUAGES\s*=\s*\{(.+?)\}\s*as\s+const;")
        .expect("valid regex")
});

static LANGUAGE_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"['"]([a-z]{2,3}(?:-[A-Za-z0-9]{2,8})*)['"]\s*:"#).expect("valid regex")
});

/// Ordered, de-duplicated, non-empty list of language tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRoster {
    languages: Vec<String>,
}

impl LanguageRoster {
    /// Build a roster, dropping blank and repeated tags (first one wins).
    ///
    /// Fails if nothing is left.
    pub fn new(tags: impl IntoIterator<Item = String>) -> Result<Self, CatalogError> {
        let mut languages: Vec<String> = Vec::new();
        for tag in tags {
            let tag = tag.trim();
            if !tag.is_empty() && !languages.iter().any(|l| l == tag) {
                languages.push(tag.to_string());
            }
        }
        if languages.is_empty() {
            return Err(CatalogError::configuration("language roster is empty"));
        }
        Ok(Self { languages })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(String::as_str)
    }

    pub fn contains(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Fail with a configuration error unless `language` is rostered.
    pub fn require(&self, language: &str, role: &str) -> Result<(), CatalogError> {
        if self.contains(language) {
            Ok(())
        } else {
            Err(CatalogError::configuration(format!(
                "{} language '{}' is not in the roster ({})",
                role,
                language,
                self.languages.join(", ")
            )))
        }
    }
}

/// Extract language tags from a `SUPPORTED_LANGUAGES` declaration.
///
/// Only quoted object keys are taken, so nested metadata such as
/// `{ 'en-US': { name: 'English' } }` yields just `en-US`.
pub fn parse_roster_declaration(source: &str) -> Result<Vec<String>, CatalogError> {
    let body = SUPPORTED_LANGUAGES_RE
        .captures(source)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| {
            CatalogError::configuration("could not find SUPPORTED_LANGUAGES declaration")
        })?;

    let tags: Vec<String> = LANGUAGE_KEY_RE
        .captures_iter(body.as_str())
        .map(|caps| caps[1].to_string())
        .collect();

    if tags.is_empty() {
        return Err(CatalogError::configuration(
            "SUPPORTED_LANGUAGES declares no languages",
        ));
    }
    Ok(tags)
}

/// Read a roster declaration file.
pub fn load_roster_file(path: &Path) -> Result<LanguageRoster, CatalogError> {
    let source = fs::read_to_string(path).map_err(|e| {
        CatalogError::configuration(format!(
            "cannot read language roster {}: {}",
            path.display(),
            e
        ))
    })?;
    let tags = parse_roster_declaration(&source).map_err(|e| match e {
        CatalogError::Configuration(msg) => {
            CatalogError::Configuration(format!("{} in {}", msg, path.display()))
        }
        other => other,
    })?;
    debug!(path = %path.display(), count = tags.len(), "loaded roster declaration");
    LanguageRoster::new(tags)
}

/// Use the catalog files present in `catalog_dir`, sorted by tag.
pub fn discover_roster(catalog_dir: &Path) -> Result<LanguageRoster, CatalogError> {
    let entries = fs::read_dir(catalog_dir).map_err(|e| {
        CatalogError::configuration(format!(
            "cannot list catalog directory {}: {}",
            catalog_dir.display(),
            e
        ))
    })?;

    let mut tags: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(CATALOG_EXTENSION)
        })
        .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(String::from))
        .collect();
    tags.sort();

    LanguageRoster::new(tags).map_err(|_| {
        CatalogError::configuration(format!(
            "no catalogs found in {}",
            catalog_dir.display()
        ))
    })
}
