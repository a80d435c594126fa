use crate::{
    actions::{ActionStats, PrunePlan, PruneResult},
    core::Catalog,
    rules::{KeyCountComparison, LineParityReport, StructureReport},
};

#[derive(Debug)]
pub enum CommandSummary {
    DetectMissing(DetectMissingSummary),
    Validate(ValidateSummary),
    QuickCheck(ValidateSummary),
    Compare(CompareSummary),
    RemoveExtra(RemoveExtraSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct DetectMissingSummary {
    pub report: StructureReport,
    /// Baseline catalog, used to print line hints for missing keys.
    pub baseline_catalog: Option<Catalog>,
}

#[derive(Debug)]
pub struct ValidateSummary {
    pub silent: bool,
    pub line_parity: LineParityReport,
    pub structure: StructureReport,
}

impl ValidateSummary {
    pub fn is_consistent(&self) -> bool {
        self.line_parity.is_consistent() && self.structure.is_consistent()
    }
}

#[derive(Debug)]
pub struct CompareSummary {
    pub comparison: KeyCountComparison,
    pub details: bool,
}

#[derive(Debug)]
pub struct RemoveExtraSummary {
    pub reference: String,
    pub is_apply: bool,
    pub plans: Vec<PrunePlan>,
    /// Per-catalog outcomes; simulated in dry-run mode.
    pub results: Vec<PruneResult>,
    pub stats: ActionStats,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a lockstep command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Number of findings that make the catalogs inconsistent.
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (used for commands that repair rather than check).
    pub exit_on_errors: bool,
    /// Number of catalog files that were loaded.
    pub locale_files_checked: usize,
}
