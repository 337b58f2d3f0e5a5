//! Table Engine
//!
//! The TableEngine owns the flat token list and derives the visible row
//! sequence from it:
//!
//! ```text
//! dataset files
//!       │
//!       ▼
//!   flatten (once, at construction)
//!       │
//!       ▼
//!   flat list ◄── sort events reorder it in place
//!       │
//!       ▼
//!   filter (current pattern)
//!       │
//!       ▼
//!   visible rows ◄── expansion toggles flip open flags in place
//!       │
//!       ▼
//!   broadcast to subscribers
//! ```
//!
//! Sort is destructive: it reorders the full unfiltered list, so the
//! ordering persists across later filters (rows the user cannot currently
//! see are reordered too). Every recompute replaces the visible rows
//! wholesale, which resets all expansion flags to closed.

use parking_lot::Mutex;
use tokio::sync::watch;

use swatch_core::{EngineError, Row, SortColumn, SortDirection, SortState, TokenEntry, TokenFile};

use crate::filter::{derive_rows, PatternFilter};
use crate::flatten::flatten_files;

mod observable_rows;

use observable_rows::ObservableRows;

/// The filter/sort/expand engine behind one token table.
///
/// There is exactly one logical owner per instance (the containing widget);
/// interior mutability only guards against torn reads from subscriber
/// threads.
pub struct TableEngine {
    /// Flat token list - the shared source of truth for sorting and
    /// filtering. Mutated only by re-sorting in place.
    flat: Mutex<Vec<TokenEntry>>,

    /// Last compiled filter; sort events re-filter with it.
    filter: Mutex<PatternFilter>,

    /// Sort indicator state for rendering surfaces.
    sort: Mutex<SortState>,

    /// Visible rows - observable, mutations auto-broadcast.
    rows: ObservableRows,

    /// Whether display rows omit the selector cell.
    hide_selector_column: bool,
}

impl TableEngine {
    /// Create an engine over a flat entry list.
    ///
    /// The initial visible rows are the unfiltered derivation.
    pub fn new(entries: Vec<TokenEntry>, hide_selector_column: bool) -> Self {
        let filter = PatternFilter::match_all();
        let rows = derive_rows(&entries, &filter, hide_selector_column);
        tracing::debug!(
            "Engine created: {} entries, {} initial rows",
            entries.len(),
            rows.len()
        );
        Self {
            flat: Mutex::new(entries),
            filter: Mutex::new(filter),
            sort: Mutex::new(SortState::default()),
            rows: ObservableRows::new(rows),
            hide_selector_column,
        }
    }

    /// Create an engine by flattening dataset files.
    pub fn from_files(files: &[TokenFile], hide_selector_column: bool) -> Self {
        Self::new(flatten_files(files), hide_selector_column)
    }

    // =========================================================================
    // Read Methods
    // =========================================================================

    /// Subscribe to visible-row changes.
    ///
    /// Clone the receiver for multiple subscribers.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Row>> {
        self.rows.subscribe()
    }

    /// Snapshot of the current visible rows.
    pub fn rows(&self) -> Vec<Row> {
        self.rows.snapshot()
    }

    /// Snapshot of the flat entry list in its current order.
    pub fn entries(&self) -> Vec<TokenEntry> {
        self.flat.lock().clone()
    }

    /// Number of currently visible rows (detail rows included).
    pub fn visible_count(&self) -> usize {
        self.rows.len()
    }

    /// The current sort indicator.
    pub fn sort_state(&self) -> SortState {
        *self.sort.lock()
    }

    // =========================================================================
    // Filter Flow
    // =========================================================================

    /// Compile a search string and recompute the visible rows.
    ///
    /// A malformed pattern fails here and leaves the previous rows (and the
    /// previous filter) untouched. An empty string clears the filter.
    pub fn set_filter(&self, input: &str) -> Result<(), EngineError> {
        let filter = PatternFilter::compile(input)?;
        let (rows, total) = {
            let flat = self.flat.lock();
            (
                derive_rows(&flat, &filter, self.hide_selector_column),
                flat.len(),
            )
        };
        tracing::debug!("Filter applied: {} visible rows from {} entries", rows.len(), total);
        *self.filter.lock() = filter;
        self.rows.replace(rows);
        Ok(())
    }

    /// Drop the filter and show every entry again.
    pub fn clear_filter(&self) {
        let filter = PatternFilter::match_all();
        let rows = {
            let flat = self.flat.lock();
            derive_rows(&flat, &filter, self.hide_selector_column)
        };
        *self.filter.lock() = filter;
        self.rows.replace(rows);
    }

    // =========================================================================
    // Sort Flow
    // =========================================================================

    /// Reorder the flat list by a column and recompute the visible rows
    /// with the current filter.
    ///
    /// Plain lexicographic byte-wise comparison on the column's string
    /// value; descending reverses the comparator. The reorder is
    /// destructive and persists across subsequent filters. Sorting by the
    /// selector column is permitted even when that column is hidden.
    pub fn sort(&self, column: SortColumn, direction: SortDirection) {
        let rows = {
            let mut flat = self.flat.lock();
            flat.sort_by(|a, b| {
                let ord = a.field(column).cmp(b.field(column));
                match direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
            let filter = self.filter.lock();
            derive_rows(&flat, &filter, self.hide_selector_column)
        };
        *self.sort.lock() = SortState {
            column: Some(column),
            direction,
        };
        tracing::debug!("Sorted by {:?} {:?}", column, direction);
        self.rows.replace(rows);
    }

    // =========================================================================
    // Expansion Flow
    // =========================================================================

    /// Record an open flag on the visible row at `row_index`.
    ///
    /// Toggling never changes which rows are present or their order. The
    /// flag is keyed by position in the current visible sequence, so any
    /// recompute (new filter or sort) resets every expandable row to
    /// closed - callers must not assume open state survives.
    pub fn set_open(&self, row_index: usize, is_open: bool) -> Result<(), EngineError> {
        self.rows.set_open(row_index, is_open)
    }
}

// =============================================================================
// Tests
// =============================================================================
