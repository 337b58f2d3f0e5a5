//! Rendering surface integration.
//!
//! The widget never renders. A rendering surface receives immutable frames
//! (columns, rows, sort state) and reports user intent back as
//! `TableEvent`s. The trait is rendering-framework-independent and mockable
//! for testing.

use serde::Serialize;

use swatch_core::{Row, SortDirection, SortState};

// =============================================================================
// Columns
// =============================================================================

/// A table column as presented to surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Header text.
    pub title: String,

    /// Whether header clicks may request a sort.
    pub sortable: bool,

    /// Whether cells in this column carry the expansion toggle.
    pub expandable: bool,
}

impl Column {
    /// A plain sortable column.
    pub fn sortable(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sortable: true,
            expandable: false,
        }
    }

    /// Mark this column as the expansion-toggle carrier.
    pub fn with_toggle(mut self) -> Self {
        self.expandable = true;
        self
    }
}

// =============================================================================
// Frames and Events
// =============================================================================

/// One immutable snapshot handed to a rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableFrame {
    /// Columns, in display order.
    pub columns: Vec<Column>,

    /// Visible rows, detail rows included.
    pub rows: Vec<Row>,

    /// Sort indicator.
    pub sort: SortState,
}

/// Events a surface reports back to the widget.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    /// Search text changed. Raw and undebounced - the widget applies the
    /// debounce window before filtering.
    QueryChanged(String),

    /// Header click: sort by positional column index (0 is the expansion
    /// toggle, 1..=4 the data columns, regardless of selector visibility).
    SortRequested {
        index: usize,
        direction: SortDirection,
    },

    /// Expansion toggle on a visible row.
    ToggleRequested { row_index: usize, is_open: bool },
}

// =============================================================================
// Surface Trait
// =============================================================================

/// Trait for rendering surfaces.
///
/// Implementations decide how to draw frames; this crate only produces
/// them. Frames arrive on the task that mutated the table or on the
/// forwarding task started by `TokenTable::attach`.
pub trait TableSurface: Send + Sync {
    /// Present a fresh frame. Called on every visible-row change.
    fn present(&self, frame: TableFrame);

    /// Report a search pattern that failed to compile. The previously
    /// presented frame stays valid.
    fn filter_error(&self, message: String);
}

// =============================================================================
// Mock Surface for Testing
// =============================================================================
