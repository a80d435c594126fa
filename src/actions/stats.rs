/// Statistics from running an action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionStats {
    /// Number of keys processed.
    pub processed: usize,
    /// Number of keys skipped (parent chain broken or key already gone).
    pub skipped: usize,
    /// Number of keys actually removed.
    pub changes_applied: usize,
    /// Number of files rewritten.
    pub files_modified: usize,
}

impl std::ops::AddAssign for ActionStats {
    fn add_assign(&mut self, other: Self) {
        self.processed += other.processed;
        self.skipped += other.skipped;
        self.changes_applied += other.changes_applied;
        self.files_modified += other.files_modified;
    }
}
