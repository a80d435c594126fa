use anyhow::Result;
use tracing::debug;

use super::{CommandResult, CommandSummary, DetectMissingSummary, helper::finish};
use crate::{cli::args::DetectMissingCommand, core::CatalogContext, rules::check_structure};

/// List the keys each language is missing or has in excess of the baseline.
pub fn detect_missing(cmd: DetectMissingCommand) -> Result<CommandResult> {
    let ctx = CatalogContext::new(&cmd.common)?;
    let baseline = ctx.baseline()?;

    let report = check_structure(&ctx.catalogs, baseline, ctx.extract_options());
    let inconsistent = report.inconsistent().count();
    debug!(baseline, inconsistent, "structure check finished");

    let summary = DetectMissingSummary {
        baseline_catalog: ctx.catalogs.get(baseline).cloned(),
        report,
    };

    Ok(finish(
        CommandSummary::DetectMissing(summary),
        inconsistent,
        ctx.catalogs.len(),
        true,
    ))
}
