//! Core catalog model.
//!
//! - `key_path`: key path extraction over JSON documents
//! - `catalog`: loading catalogs for a language roster
//! - `roster`: resolving the language roster
//! - `context`: per-invocation context (config + roster + catalogs)
//! - `error`: the error taxonomy shared by all of the above

pub mod catalog;
pub mod context;
pub mod error;
pub mod key_path;
pub mod roster;

pub use catalog::{Catalog, CatalogSet, catalog_path, load_catalog, load_catalogs};
pub use context::CatalogContext;
pub use error::CatalogError;
pub use key_path::{
    ExtractOptions, KeyPathSet, extract_key_paths, extract_key_paths_with_prefix, last_segment,
};
pub use roster::{LanguageRoster, discover_roster, load_roster_file, parse_roster_declaration};
