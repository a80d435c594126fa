use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tracing::debug;

use super::{
    error::CatalogError,
    key_path::{ExtractOptions, KeyPathSet, extract_key_paths, last_segment},
    roster::LanguageRoster,
};

/// File extension of catalog documents.
pub const CATALOG_EXTENSION: &str = "json";

/// One language's translation document.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Language tag, e.g. `"en-US"`.
    pub language: String,
    pub path: PathBuf,
    /// Parsed document. Object member order follows the file.
    pub document: Value,
    /// The text the document was parsed from.
    pub raw: String,
}

impl Catalog {
    pub fn key_paths(&self, options: ExtractOptions) -> KeyPathSet {
        extract_key_paths(&self.document, options)
    }

    /// Number of lines in the file, counted the way a line reader would:
    /// a final line without a trailing newline still counts.
    pub fn line_count(&self) -> usize {
        self.raw.lines().count()
    }

    /// Best-effort line number of a key in this file.
    ///
    /// Returns the first 1-based line containing `"<last segment>":`. The
    /// same leaf name under another parent will also match; callers treat the
    /// result as a hint only.
    pub fn find_key_line(&self, key_path: &str) -> Option<usize> {
        let pattern = format!("\"{}\":", last_segment(key_path));
        self.raw
            .lines()
            .position(|line| line.contains(&pattern))
            .map(|index| index + 1)
    }
}

/// Expected location of a language's catalog.
pub fn catalog_path(catalog_dir: &Path, language: &str) -> PathBuf {
    catalog_dir.join(format!("{}.{}", language, CATALOG_EXTENSION))
}

/// Load a single catalog file.
pub fn load_catalog(path: &Path, language: &str) -> Result<Catalog, CatalogError> {
    let bytes = fs::read(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            CatalogError::MissingFile {
                language: language.to_string(),
                path: path.to_path_buf(),
            }
        } else {
            CatalogError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let document: Value =
        serde_json::from_slice(&bytes).map_err(|source| CatalogError::MalformedDocument {
            language: language.to_string(),
            path: path.to_path_buf(),
            source,
        })?;

    Ok(Catalog {
        language: language.to_string(),
        path: path.to_path_buf(),
        document,
        raw: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

/// All catalogs of one run, in roster order.
#[derive(Debug, Clone, Default)]
pub struct CatalogSet {
    catalogs: Vec<Catalog>,
}

impl CatalogSet {
    pub fn new(catalogs: Vec<Catalog>) -> Self {
        Self { catalogs }
    }

    pub fn get(&self, language: &str) -> Option<&Catalog> {
        self.catalogs.iter().find(|c| c.language == language)
    }

    pub fn get_mut(&mut self, language: &str) -> Option<&mut Catalog> {
        self.catalogs.iter_mut().find(|c| c.language == language)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Catalog> {
        self.catalogs.iter()
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.catalogs.iter().map(|c| c.language.as_str())
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }
}

/// Load one catalog per rostered language from `catalog_dir`.
///
/// All-or-nothing: the first missing or malformed file aborts the load.
pub fn load_catalogs(
    roster: &LanguageRoster,
    catalog_dir: &Path,
) -> Result<CatalogSet, CatalogError> {
    let mut catalogs = Vec::with_capacity(roster.len());
    for language in roster.iter() {
        let path = catalog_path(catalog_dir, language);
        let catalog = load_catalog(&path, language)?;
        debug!(language, path = %path.display(), "loaded catalog");
        catalogs.push(catalog);
    }
    Ok(CatalogSet::new(catalogs))
}
