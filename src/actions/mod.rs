//! Actions that modify catalog files.
//!
//! ## Architecture
//!
//! ```text
//! CatalogSet + reference language
//!     ↓
//! PrunePlan (extra keys per language)
//!     ↓
//! prune_document (in-memory deletion, one outcome per key)
//!     ↓
//! render_catalog + write_catalog (full serialization, then atomic replace)
//! ```
//!
//! A dry run runs `prune_document` on copies of the documents and writes
//! nothing.

mod catalog_writer;
mod prune;
mod stats;

pub use catalog_writer::{render_catalog, write_catalog};
pub use prune::{
    DeleteOutcome, KeyOutcome, PrunePlan, PruneResult, apply_prune, delete_key_path, plan_prune,
    preview_prune, prune_document,
};
pub use stats::ActionStats;
