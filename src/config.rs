use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{CatalogError, ExtractOptions};

pub const CONFIG_FILE_NAME: &str = ".lockstep.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_messages_root", alias = "messagesDir")]
    pub messages_root: String,
    /// Language every other catalog is structurally compared against.
    #[serde(default = "default_baseline_locale")]
    pub baseline_locale: String,
    /// Language used by `compare` and `remove-extra`.
    #[serde(default = "default_reference_locale")]
    pub reference_locale: String,
    /// Explicit roster. Takes precedence over `roster_file`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    /// TypeScript/JavaScript module declaring `SUPPORTED_LANGUAGES`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roster_file: Option<String>,
    #[serde(default = "default_index_sequences")]
    pub index_sequences: bool,
}

fn default_messages_root() -> String {
    "./messages".to_string()
}

fn default_baseline_locale() -> String {
    "zh-CN".to_string()
}

fn default_reference_locale() -> String {
    "en-US".to_string()
}

fn default_index_sequences() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_root: default_messages_root(),
            baseline_locale: default_baseline_locale(),
            reference_locale: default_reference_locale(),
            languages: None,
            roster_file: None,
            index_sequences: default_index_sequences(),
        }
    }
}

impl Config {
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            index_sequences: self.index_sequences,
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.messages_root.trim().is_empty() {
            return Err(CatalogError::configuration("'messagesRoot' must not be empty"));
        }
        if self.baseline_locale.trim().is_empty() {
            return Err(CatalogError::configuration(
                "'baselineLocale' must not be empty",
            ));
        }
        if self.reference_locale.trim().is_empty() {
            return Err(CatalogError::configuration(
                "'referenceLocale' must not be empty",
            ));
        }
        if let Some(languages) = &self.languages
            && languages.iter().all(|l| l.trim().is_empty())
        {
            return Err(CatalogError::configuration("'languages' must not be empty"));
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was loaded from, `None` if using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .map_err(|e| CatalogError::configuration(format!("{:?}: {}", path, e)))?;
            let config: Config = serde_json::from_str(&content).map_err(|e| {
                CatalogError::configuration(format!(
                    "failed to parse config file {:?}: {}",
                    path, e
                ))
            })?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
