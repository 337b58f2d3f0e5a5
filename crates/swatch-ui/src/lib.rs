//! Widget layer for the Swatch token table.
//!
//! This crate connects the engine to its two external collaborators - a
//! rendering surface and a search input - without rendering anything
//! itself:
//! - TokenTable widget wiring engine operations to surface events
//! - TableSurface trait and frame types
//! - Debounced query handling

pub mod debounce;
pub mod surface;
pub mod widget;

// Re-export commonly used types
pub use debounce::Debouncer;
pub use surface::{Column, TableEvent, TableFrame, TableSurface};
pub use swatch_core::{SortColumn, SortDirection, TableOptions};
pub use widget::TokenTable;
