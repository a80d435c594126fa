use std::{
    env,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context as _, Result};
use tracing::debug;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        CatalogError, CatalogSet, ExtractOptions, LanguageRoster, discover_roster,
        load_catalogs, load_roster_file,
    },
};

/// Everything one command invocation works on.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g. `--baseline zh-CN`)
/// 2. `.lockstep.json` config file
/// 3. Built-in defaults
///
/// Construction resolves the roster and loads every catalog up front, so a
/// missing or malformed file aborts before any analysis starts.
pub struct CatalogContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,

    pub roster: LanguageRoster,

    pub catalogs: CatalogSet,
}

impl CatalogContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let start_dir = match &args.root {
            Some(root) => root.clone(),
            None => env::current_dir().context("Failed to determine the current directory")?,
        };
        let start_dir = start_dir
            .canonicalize()
            .with_context(|| format!("Failed to resolve root directory {}", start_dir.display()))?;

        let loaded = load_config(&start_dir)?;
        if let Some(path) = &loaded.path {
            debug!(path = %path.display(), "using config file");
        }
        // Relative settings are relative to the directory holding the config.
        let root_dir = loaded
            .path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or(start_dir);
        let config = merge_args(loaded.config, args);
        config.validate()?;

        let catalog_dir = resolve_path(&root_dir, &config.messages_root);
        let roster = resolve_roster(&config, &root_dir, &catalog_dir)?;
        debug!(
            languages = %roster.iter().collect::<Vec<_>>().join(", "),
            "resolved language roster"
        );

        let catalogs = load_catalogs(&roster, &catalog_dir)
            .with_context(|| format!("Failed to load catalogs from {}", catalog_dir.display()))?;

        Ok(Self {
            config,
            root_dir,
            roster,
            catalogs,
        })
    }

    pub fn extract_options(&self) -> ExtractOptions {
        self.config.extract_options()
    }

    /// Structural baseline, checked against the roster.
    pub fn baseline(&self) -> Result<&str, CatalogError> {
        self.roster.require(&self.config.baseline_locale, "baseline")?;
        Ok(&self.config.baseline_locale)
    }

    /// Compare/prune reference, checked against the roster.
    pub fn reference(&self) -> Result<&str, CatalogError> {
        self.roster
            .require(&self.config.reference_locale, "reference")?;
        Ok(&self.config.reference_locale)
    }
}

fn merge_args(mut config: Config, args: &CommonArgs) -> Config {
    if let Some(messages_root) = &args.messages_root {
        config.messages_root = messages_root.to_string_lossy().to_string();
    }
    if let Some(baseline) = &args.baseline {
        config.baseline_locale = baseline.clone();
    }
    if let Some(reference) = &args.reference {
        config.reference_locale = reference.clone();
    }
    if !args.languages.is_empty() {
        config.languages = Some(args.languages.clone());
    }
    config
}

/// Join `path` onto `root` without `.` components, so reports show
/// `/project/messages/en-US.json` rather than `/project/./messages/en-US.json`.
fn resolve_path(root: &Path, path: impl AsRef<Path>) -> PathBuf {
    let relative: PathBuf = path
        .as_ref()
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect();
    if relative.as_os_str().is_empty() {
        root.to_path_buf()
    } else {
        root.join(relative)
    }
}

fn resolve_roster(
    config: &Config,
    root_dir: &Path,
    catalog_dir: &Path,
) -> Result<LanguageRoster, CatalogError> {
    if let Some(languages) = &config.languages {
        return LanguageRoster::new(languages.iter().cloned());
    }
    if let Some(roster_file) = &config.roster_file {
        return load_roster_file(&resolve_path(root_dir, roster_file));
    }
    discover_roster(catalog_dir)
}
