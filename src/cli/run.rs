//! Dispatch a parsed command to its handler.
//!
//! # Returns
//! - `Ok(CommandResult)` with the findings and exit behavior
//! - `Err` if the command could not run (bad config, missing or malformed catalog)
use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, compare::compare, detect_missing::detect_missing, init::init,
        remove_extra::remove_extra,
        validate::{quick_check, validate},
    },
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::DetectMissing(cmd)) => detect_missing(cmd),
        Some(Command::Validate(cmd)) => validate(cmd),
        Some(Command::QuickCheck(cmd)) => quick_check(cmd),
        Some(Command::Compare(cmd)) => compare(cmd),
        Some(Command::RemoveExtra(cmd)) => remove_extra(cmd),
        Some(Command::Init(cmd)) => init(cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
