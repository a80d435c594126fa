//! Lockstep - consistency checker for JSON translation catalogs
//!
//! Lockstep keeps a set of per-language JSON message catalogs structurally
//! aligned. It finds keys missing from or extra to each language, checks that
//! the files have matching line counts, compares key counts against a
//! reference language, and removes keys the reference does not have.
//!
//! ## Module Structure
//!
//! - `actions`: Catalog rewriting (extra-key pruning, atomic writes)
//! - `cli`: Command-line interface layer (commands, reports, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Key path extraction, catalog loading, language roster
//! - `rules`: Consistency checks over a loaded catalog set

pub mod actions;
pub mod cli;
pub mod config;
pub mod core;
pub mod rules;
