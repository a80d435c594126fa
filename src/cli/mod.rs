//! Command-line interface layer.
//!
//! Parses arguments, runs one command against the loaded catalogs, prints
//! its report and maps the outcome to an exit status.

use anyhow::Result;

pub mod args;
pub mod commands;
pub mod exit_status;
pub mod logging;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result);

    Ok(ExitStatus::from_result(&result))
}
