//! TokenTable widget.
//!
//! Owns one engine instance, builds the column set, and translates surface
//! events into engine operations. Ephemeral per-render state stays on the
//! surface; everything here is framework-independent.

use std::sync::Arc;

use parking_lot::Mutex;

use swatch_core::{EngineError, SortColumn, SortDirection, TableOptions};
use swatch_engine::{DatasetRegistry, TableEngine};

use crate::debounce::Debouncer;
use crate::surface::{Column, TableEvent, TableFrame, TableSurface};

/// The token table widget.
///
/// Construction resolves the requested datasets, flattens them, and derives
/// the initial visible rows. Afterwards the widget only reacts to surface
/// events; every recompute is broadcast to attached surfaces.
pub struct TokenTable {
    engine: Arc<TableEngine>,
    columns: Vec<Column>,
    debouncer: Debouncer,
    surfaces: Mutex<Vec<Arc<dyn TableSurface>>>,
}

impl TokenTable {
    /// Create a table over the datasets an options set asks for.
    pub fn new(registry: &DatasetRegistry, options: &TableOptions) -> Self {
        let files = registry.files_for(options);
        let engine = Arc::new(TableEngine::from_files(&files, options.hide_selector_column));
        tracing::debug!(
            "Token table created for prefixes {:?}: {} visible rows",
            options.prefixes,
            engine.visible_count()
        );
        Self {
            engine,
            columns: build_columns(options.hide_selector_column),
            debouncer: Debouncer::new(options.debounce()),
            surfaces: Mutex::new(Vec::new()),
        }
    }

    /// The engine behind this table.
    pub fn engine(&self) -> &Arc<TableEngine> {
        &self.engine
    }

    /// The column set, in display order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Build a frame from the current state.
    pub fn frame(&self) -> TableFrame {
        TableFrame {
            columns: self.columns.clone(),
            rows: self.engine.rows(),
            sort: self.engine.sort_state(),
        }
    }

    /// Attach a rendering surface.
    ///
    /// Presents the current frame immediately, then forwards every
    /// visible-row broadcast as a fresh frame from a spawned task. Must be
    /// called within a tokio runtime context.
    pub fn attach(&self, surface: Arc<dyn TableSurface>) {
        surface.present(self.frame());
        self.surfaces.lock().push(surface.clone());

        let mut rx = self.engine.subscribe();
        // Mark the current state seen before spawning: the frame presented
        // above covers it, and the task must not miss changes made between
        // now and its first poll.
        rx.borrow_and_update();
        let engine = self.engine.clone();
        let columns = self.columns.clone();
        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let rows = rx.borrow().clone();
                surface.present(TableFrame {
                    columns: columns.clone(),
                    rows,
                    sort: engine.sort_state(),
                });
            }
        });
    }

    /// Handle one surface event.
    ///
    /// Query changes are applied through the debounce window on a spawned
    /// task (so they need a tokio runtime context); a pattern that fails to
    /// compile there is reported to attached surfaces via `filter_error`.
    /// Sort and toggle events apply synchronously and return their errors.
    pub fn handle_event(&self, event: TableEvent) -> Result<(), EngineError> {
        match event {
            TableEvent::QueryChanged(query) => {
                self.apply_query_debounced(query);
                Ok(())
            }
            TableEvent::SortRequested { index, direction } => {
                self.sort_by_index(index, direction)
            }
            TableEvent::ToggleRequested { row_index, is_open } => {
                self.engine.set_open(row_index, is_open)
            }
        }
    }

    /// Apply a query immediately, bypassing the debounce.
    pub fn set_filter_now(&self, query: &str) -> Result<(), EngineError> {
        self.engine.set_filter(query)
    }

    /// Sort by a surface's positional column index.
    pub fn sort_by_index(
        &self,
        index: usize,
        direction: SortDirection,
    ) -> Result<(), EngineError> {
        let column =
            SortColumn::from_index(index).ok_or(EngineError::UnknownColumn(index))?;
        self.engine.sort(column, direction);
        Ok(())
    }

    fn apply_query_debounced(&self, query: String) {
        // Claim the window now so rapid events stay ordered by arrival.
        let window = self.debouncer.begin();
        let engine = self.engine.clone();
        let debouncer = self.debouncer.clone();
        let surfaces: Vec<Arc<dyn TableSurface>> = self.surfaces.lock().clone();
        tokio::spawn(async move {
            if !debouncer.settle(window).await {
                // Superseded by a newer query.
                return;
            }
            if let Err(e) = engine.set_filter(&query) {
                tracing::warn!("Search pattern rejected: {}", e);
                for surface in &surfaces {
                    surface.filter_error(e.to_string());
                }
            }
        });
    }
}

/// Column set: `Selector | Variable | Token | Value`, with the selector
/// column carrying the expansion toggle and dropped entirely when hidden.
fn build_columns(hide_selector_column: bool) -> Vec<Column> {
    let mut columns = Vec::new();
    if !hide_selector_column {
        columns.push(Column::sortable("Selector").with_toggle());
    }
    columns.extend([
        Column::sortable("Variable"),
        Column::sortable("Token"),
        Column::sortable("Value"),
    ]);
    columns
}

// =============================================================================
// Tests
// =============================================================================
