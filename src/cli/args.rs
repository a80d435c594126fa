//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `detect-missing`: List missing and extra keys per language, with line hints
//! - `validate`: Check line-count parity and structural consistency
//! - `quick-check`: Silent `validate` with a one-line verdict
//! - `compare`: Compare key counts against the reference language
//! - `remove-extra`: Delete keys the reference language does not have
//! - `init`: Write a default `.lockstep.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::DetectMissing(cmd)) => cmd.common.verbose,
            Some(Command::Validate(cmd)) => cmd.common.verbose,
            Some(Command::QuickCheck(cmd)) => cmd.common.verbose,
            Some(Command::Compare(cmd)) => cmd.common.verbose,
            Some(Command::RemoveExtra(cmd)) => cmd.common.verbose,
            Some(Command::Init(cmd)) => cmd.verbose,
            None => false,
        }
    }
}

/// Common arguments shared by all catalog commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root directory (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Catalog directory, relative to the root (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Comma-separated language tags (overrides config file and roster)
    #[arg(long, value_delimiter = ',')]
    pub languages: Vec<String>,

    /// Structural baseline language (overrides config file)
    #[arg(long)]
    pub baseline: Option<String>,

    /// Reference language for compare and remove-extra (overrides config file)
    #[arg(long)]
    pub reference: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct DetectMissingCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ValidateCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print nothing; report the result through the exit code only
    #[arg(long)]
    pub silent: bool,
}

#[derive(Debug, Args)]
pub struct QuickCheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CompareCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// List the missing and extra keys of every language
    #[arg(long)]
    pub details: bool,
}

#[derive(Debug, Args)]
pub struct RemoveExtraCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Only show what would be removed (files are left untouched)
    #[arg(long)]
    pub dry: bool,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to create the config file in (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List keys missing from or extra to each language, compared with the baseline
    DetectMissing(DetectMissingCommand),
    /// Check that all catalogs have the same line count and key structure
    Validate(ValidateCommand),
    /// Validate silently and print a one-line verdict
    QuickCheck(QuickCheckCommand),
    /// Compare every language's key count with the reference language
    Compare(CompareCommand),
    /// Remove keys the reference language does not have from all other catalogs
    RemoveExtra(RemoveExtraCommand),
    /// Initialize a new .lockstep.json configuration file
    Init(InitCommand),
}
