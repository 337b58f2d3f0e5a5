//! Error types for the Swatch token table.

use thiserror::Error;

/// Engine errors - surfaced to callers and rendering surfaces.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Search pattern failed to compile.
    #[error("Invalid search pattern: {0}")]
    Pattern(String),

    /// Expansion toggle addressed a row outside the visible sequence.
    #[error("Row index {index} out of range ({len} visible rows)")]
    RowOutOfRange { index: usize, len: usize },

    /// Sort request addressed a positional index with no data column.
    #[error("No sortable column at index {0}")]
    UnknownColumn(usize),
}

/// Dataset loading errors.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),
}
