//! Consistency rules.
//!
//! Pure functions over a loaded [`CatalogSet`](crate::core::CatalogSet). Each
//! takes only the inputs it needs and returns a report value; printing is left
//! to the CLI layer.
//!
//! - `structure`: missing/extra keys relative to the baseline language
//! - `line_parity`: raw line counts across catalog files
//! - `key_count`: key counts and differences relative to the reference language

pub mod key_count;
pub mod line_parity;
pub mod structure;

pub use key_count::{KeyCountComparison, KeyCountRow, compare_key_counts};
pub use line_parity::{LineCount, LineParityReport, check_line_parity};
pub use structure::{KeyCount, LanguageDiff, StructureReport, check_structure};
