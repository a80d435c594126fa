use anyhow::Result;

use super::{CommandResult, CommandSummary, CompareSummary, helper::finish};
use crate::{cli::args::CompareCommand, core::CatalogContext, rules::compare_key_counts};

/// Compare every language's key count with the reference language.
pub fn compare(cmd: CompareCommand) -> Result<CommandResult> {
    let ctx = CatalogContext::new(&cmd.common)?;
    let reference = ctx.reference()?;

    let comparison = compare_key_counts(&ctx.catalogs, reference, ctx.extract_options());
    let differing = comparison
        .rows
        .iter()
        .filter(|row| !row.is_reference_aligned())
        .count();

    Ok(finish(
        CommandSummary::Compare(CompareSummary {
            comparison,
            details: cmd.details,
        }),
        differing,
        ctx.catalogs.len(),
        true,
    ))
}
