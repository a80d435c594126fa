use anyhow::Result;
use tracing::debug;

use super::{CommandResult, CommandSummary, ValidateSummary, helper::finish};
use crate::{
    cli::args::{CommonArgs, QuickCheckCommand, ValidateCommand},
    core::CatalogContext,
    rules::{check_line_parity, check_structure},
};

/// Run the line-parity and structure checks.
///
/// Both checks always run; the command fails if either one does.
pub fn validate(cmd: ValidateCommand) -> Result<CommandResult> {
    let (summary, error_count, files) = run_checks(&cmd.common, cmd.silent)?;
    Ok(finish(
        CommandSummary::Validate(summary),
        error_count,
        files,
        true,
    ))
}

/// Silent validation reduced to a pass/fail verdict.
pub fn quick_check(cmd: QuickCheckCommand) -> Result<CommandResult> {
    let (summary, error_count, files) = run_checks(&cmd.common, true)?;
    Ok(finish(
        CommandSummary::QuickCheck(summary),
        error_count,
        files,
        true,
    ))
}

fn run_checks(common: &CommonArgs, silent: bool) -> Result<(ValidateSummary, usize, usize)> {
    let ctx = CatalogContext::new(common)?;
    let baseline = ctx.baseline()?;

    let line_parity = check_line_parity(&ctx.catalogs);
    let structure = check_structure(&ctx.catalogs, baseline, ctx.extract_options());

    let error_count =
        usize::from(!line_parity.is_consistent()) + structure.inconsistent().count();
    debug!(
        line_parity = line_parity.is_consistent(),
        structure = structure.is_consistent(),
        "validation finished"
    );

    let summary = ValidateSummary {
        silent,
        line_parity,
        structure,
    };
    Ok((summary, error_count, ctx.catalogs.len()))
}
