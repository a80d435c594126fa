use super::{CommandResult, CommandSummary};

pub fn finish(
    summary: CommandSummary,
    error_count: usize,
    locale_files_checked: usize,
    exit_on_errors: bool,
) -> CommandResult {
    CommandResult {
        summary,
        error_count,
        exit_on_errors,
        locale_files_checked,
    }
}
