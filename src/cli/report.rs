//! Report formatting and printing utilities.
//!
//! Every command result is rendered here, separate from the checks themselves
//! so the rules and actions can be used as a library. All printers write to a
//! caller-supplied writer; write errors are ignored.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, CompareSummary, DetectMissingSummary, InitSummary,
    RemoveExtraSummary, ValidateSummary,
};
use crate::{
    config::CONFIG_FILE_NAME,
    core::Catalog,
    rules::{KeyCountRow, LanguageDiff, LineParityReport, StructureReport},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout.
pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::DetectMissing(summary) => print_detect_missing(summary, writer),
        CommandSummary::Validate(summary) => {
            print_validate(summary, result.locale_files_checked, writer)
        }
        CommandSummary::QuickCheck(summary) => print_quick_check(summary, writer),
        CommandSummary::Compare(summary) => print_compare(summary, writer),
        CommandSummary::RemoveExtra(summary) => print_remove_extra(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

// ============================================================
// detect-missing
// ============================================================

fn print_detect_missing<W: Write>(summary: &DetectMissingSummary, writer: &mut W) {
    let report = &summary.report;
    print_key_counts(report, writer);

    for diff in &report.diffs {
        print_language_diff(diff, &report.baseline, writer);
        for key in &diff.missing {
            let hint = line_hint(summary.baseline_catalog.as_ref(), key);
            let _ = writeln!(
                writer,
                "    {} {} {}",
                "missing".red(),
                key,
                format!("({})", hint).dimmed()
            );
        }
        for key in &diff.extra {
            let _ = writeln!(writer, "    {} {}", "extra".yellow(), key);
        }
    }

    print_structure_verdict(report, writer);
}

/// Approximate location of a key in the baseline file, e.g. `line ~12`.
fn line_hint(baseline: Option<&Catalog>, key: &str) -> String {
    match baseline.and_then(|catalog| catalog.find_key_line(key)) {
        Some(line) => format!("line ~{}", line),
        None => "line unknown".to_string(),
    }
}

// ============================================================
// validate / quick-check
// ============================================================

fn print_validate<W: Write>(summary: &ValidateSummary, files: usize, writer: &mut W) {
    if summary.silent {
        return;
    }

    print_line_parity(&summary.line_parity, writer);
    let _ = writeln!(writer);

    print_key_counts(&summary.structure, writer);
    for diff in &summary.structure.diffs {
        print_language_diff(diff, &summary.structure.baseline, writer);
    }
    print_structure_verdict(&summary.structure, writer);
    let _ = writeln!(writer);

    if summary.is_consistent() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("All validations passed ({} catalog files)", files).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            "Validation failed".red().bold()
        );
    }
}

fn print_quick_check<W: Write>(summary: &ValidateSummary, writer: &mut W) {
    if summary.is_consistent() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "Quick check passed".green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            "Quick check failed".red().bold()
        );
    }
}

fn print_line_parity<W: Write>(report: &LineParityReport, writer: &mut W) {
    let _ = writeln!(writer, "{}", "Line counts:".bold());
    let width = column_width(report.counts.iter().map(|c| c.language.as_str()));
    for count in &report.counts {
        let _ = writeln!(
            writer,
            "  {:<width$}  {}",
            count.language,
            count.lines,
            width = width
        );
    }

    if report.is_consistent() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "All files have the same line count".green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            "File line counts are inconsistent".red()
        );
    }
}

// ============================================================
// Shared structure output
// ============================================================

fn print_key_counts<W: Write>(report: &StructureReport, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        "Key counts".bold(),
        format!("(baseline {}):", report.baseline).dimmed()
    );
    let width = column_width(report.key_counts.iter().map(|c| c.language.as_str()));
    for count in &report.key_counts {
        let _ = writeln!(
            writer,
            "  {:<width$}  {}",
            count.language,
            count.count,
            width = width
        );
    }
}

fn print_language_diff<W: Write>(diff: &LanguageDiff, baseline: &str, writer: &mut W) {
    if diff.is_consistent() {
        let _ = writeln!(
            writer,
            "{} {}: structure matches {}",
            SUCCESS_MARK.green(),
            diff.language.bold(),
            baseline
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}: {} missing, {} extra",
            FAILURE_MARK.red(),
            diff.language.bold(),
            diff.missing.len(),
            diff.extra.len()
        );
    }
}

fn print_structure_verdict<W: Write>(report: &StructureReport, writer: &mut W) {
    let total = report.diffs.len();
    let inconsistent = report.inconsistent().count();

    if inconsistent == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "All {} language(s) match baseline {}",
                total, report.baseline
            )
            .green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "{} of {} language(s) differ from baseline {}",
                inconsistent, total, report.baseline
            )
            .red()
        );
    }
}

// ============================================================
// compare
// ============================================================

fn print_compare<W: Write>(summary: &CompareSummary, writer: &mut W) {
    let comparison = &summary.comparison;
    let _ = writeln!(
        writer,
        "{} {} keys",
        format!("Reference {}:", comparison.reference).bold(),
        comparison.reference_count
    );

    let width = column_width(comparison.rows.iter().map(|r| r.language.as_str()));
    for row in &comparison.rows {
        print_compare_row(row, &comparison.reference, width, writer);
        if summary.details && !row.is_reference_aligned() {
            for key in &row.diff.missing {
                let _ = writeln!(writer, "      {} {}", "missing".red(), key);
            }
            for key in &row.diff.extra {
                let _ = writeln!(writer, "      {} {}", "extra".yellow(), key);
            }
        }
    }

    let differing = comparison
        .rows
        .iter()
        .filter(|row| !row.is_reference_aligned())
        .count();
    if differing == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("All languages match {}", comparison.reference).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "{} language(s) differ from {}",
                differing, comparison.reference
            )
            .red()
        );
        if !summary.details {
            let _ = writeln!(
                writer,
                "Run with {} to list the differing keys.",
                "--details".cyan()
            );
        }
    }
}

fn print_compare_row<W: Write>(row: &KeyCountRow, reference: &str, width: usize, writer: &mut W) {
    let label = if row.language == reference {
        "(reference)".dimmed().to_string()
    } else if row.is_reference_aligned() {
        SUCCESS_MARK.green().to_string()
    } else if row.difference == 0 {
        format!(
            "{} same count, different keys ({} missing, {} extra)",
            FAILURE_MARK.red(),
            row.diff.missing.len(),
            row.diff.extra.len()
        )
    } else {
        format!(
            "{} {} missing, {} extra",
            FAILURE_MARK.red(),
            row.diff.missing.len(),
            row.diff.extra.len()
        )
    };

    let _ = writeln!(
        writer,
        "  {:<width$}  {:>6}  {:>6}  {}",
        row.language,
        row.key_count,
        format_difference(row.difference),
        label,
        width = width
    );
}

fn format_difference(difference: i64) -> String {
    if difference == 0 {
        "0".to_string()
    } else {
        format!("{:+}", difference)
    }
}

// ============================================================
// remove-extra
// ============================================================

fn print_remove_extra<W: Write>(summary: &RemoveExtraSummary, writer: &mut W) {
    if summary.plans.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("No extra keys found (reference {})", summary.reference).green()
        );
        return;
    }

    let (removed, skipped) = if summary.is_apply {
        ("removed".green(), "skipped".yellow())
    } else {
        ("would remove".normal(), "would skip".yellow())
    };
    for result in &summary.results {
        print_plan_header(&result.language, &result.path.display().to_string(), writer);
        for outcome in result.deleted() {
            let _ = writeln!(writer, "    {} {}", removed, outcome.key);
        }
        for outcome in result.skipped() {
            let _ = writeln!(
                writer,
                "    {} {} {}",
                skipped,
                outcome.key,
                format!("({})", outcome.outcome).dimmed()
            );
        }
    }

    let stats = &summary.stats;
    if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} {} key(s) in {} file(s) (processed {} key(s)).",
            "Deleted".green().bold(),
            stats.changes_applied,
            stats.files_modified,
            stats.processed
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} key(s) in {} file(s).",
            "Would delete".yellow().bold(),
            stats.changes_applied,
            stats.files_modified
        );
    }
    if stats.skipped > 0 {
        let _ = writeln!(writer, "  - skipped: {} key(s)", stats.skipped);
    }
    if !summary.is_apply {
        let _ = writeln!(
            writer,
            "Run without {} to delete these keys.",
            "--dry".cyan()
        );
    }
}

fn print_plan_header<W: Write>(language: &str, path: &str, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        language.bold(),
        format!("({})", path).dimmed()
    );
}

// ============================================================
// init
// ============================================================

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

fn column_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(str::len).max().unwrap_or(0)
}

// ============================================================
// Tests
// ============================================================
