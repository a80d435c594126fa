use anyhow::Result;
use tracing::info;

use super::{CommandResult, CommandSummary, RemoveExtraSummary, helper::finish};
use crate::{
    actions::{apply_prune, plan_prune, preview_prune},
    cli::args::RemoveExtraCommand,
    core::CatalogContext,
};

/// Remove keys the reference language does not have from every other catalog.
///
/// With `--dry` the deletions run on copies and only the outcome is reported.
/// Keys that cannot be located are
/// skipped and do not fail the command.
pub fn remove_extra(cmd: RemoveExtraCommand) -> Result<CommandResult> {
    let mut ctx = CatalogContext::new(&cmd.common)?;
    let reference = ctx.reference()?.to_string();

    let plans = plan_prune(&ctx.catalogs, &reference, ctx.extract_options());
    let is_apply = !cmd.dry;

    let (results, stats) = if is_apply {
        apply_prune(&mut ctx.catalogs, &plans)?
    } else {
        preview_prune(&ctx.catalogs, &plans)
    };
    if is_apply {
        info!(
            deleted = stats.changes_applied,
            skipped = stats.skipped,
            files = stats.files_modified,
            "remove-extra finished"
        );
    }

    let files = ctx.catalogs.len();
    Ok(finish(
        CommandSummary::RemoveExtra(RemoveExtraSummary {
            reference,
            is_apply,
            plans,
            results,
            stats,
        }),
        0,
        files,
        false,
    ))
}
