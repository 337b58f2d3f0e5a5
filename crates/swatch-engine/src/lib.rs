//! Filter/sort/expand engine for the Swatch token table.
//!
//! This crate derives the visible row sequence of a token table,
//! independent of any rendering framework:
//! - Dataset registry keyed by normalized CSS prefix
//! - Token flattener (nested dataset files -> flat entry list)
//! - Pattern filter and row derivation
//! - Destructive column sort
//! - Position-keyed expansion state on the visible rows

mod engine;
mod filter;
mod flatten;
mod registry;

pub use engine::TableEngine;
pub use filter::{derive_rows, PatternFilter};
pub use flatten::flatten_files;
pub use registry::{normalize_prefix, DatasetRegistry};
