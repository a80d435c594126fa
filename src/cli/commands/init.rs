use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary, helper::finish};
use crate::{
    cli::args::InitCommand,
    config::{CONFIG_FILE_NAME, default_config_json},
};

/// Write a default config file; refuses to overwrite an existing one.
pub fn init(cmd: InitCommand) -> Result<CommandResult> {
    let root = cmd.root.unwrap_or_else(|| PathBuf::from("."));
    let config_path = root.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(finish(
        CommandSummary::Init(InitSummary { created: true }),
        0,
        0,
        true,
    ))
}
