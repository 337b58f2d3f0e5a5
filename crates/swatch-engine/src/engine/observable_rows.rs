//! Observable visible-row state with automatic change notifications.
//!
//! The key insight: mutation = notification. Every method that changes the
//! visible rows also broadcasts the new snapshot. Callers cannot mutate
//! without notifying.

use parking_lot::RwLock;
use tokio::sync::watch;

use swatch_core::{EngineError, Row};

/// The visible row sequence, broadcast to subscribers on every change.
///
/// Uses `parking_lot::RwLock` for the rows (never poisons) and
/// `tokio::sync::watch` for broadcasts. Multiple threads can read
/// concurrently; writes are exclusive.
pub struct ObservableRows {
    inner: RwLock<Vec<Row>>,
    tx: watch::Sender<Vec<Row>>,
    rx: watch::Receiver<Vec<Row>>,
}

impl ObservableRows {
    /// Create with an initial row sequence, broadcast as the first state.
    pub fn new(rows: Vec<Row>) -> Self {
        let (tx, rx) = watch::channel(rows.clone());
        Self {
            inner: RwLock::new(rows),
            tx,
            rx,
        }
    }

    // =========================================================================
    // Mutation Methods (all broadcast automatically)
    // =========================================================================

    /// Replace the whole visible sequence (after a filter or sort).
    ///
    /// Broadcasts the new state.
    pub fn replace(&self, rows: Vec<Row>) {
        let snapshot = {
            let mut inner = self.inner.write();
            *inner = rows;
            inner.clone()
        };
        let _ = self.tx.send(snapshot);
    }

    /// Record an open flag directly on the row at `index`.
    ///
    /// Membership and order never change - only the flag does. Out-of-range
    /// indices are a reported error with no state change.
    /// Broadcasts the new state on success.
    pub fn set_open(&self, index: usize, is_open: bool) -> Result<(), EngineError> {
        let snapshot = {
            let mut inner = self.inner.write();
            let len = inner.len();
            let row = inner
                .get_mut(index)
                .ok_or(EngineError::RowOutOfRange { index, len })?;
            row.is_open = Some(is_open);
            inner.clone()
        };
        let _ = self.tx.send(snapshot);
        Ok(())
    }

    // =========================================================================
    // Read Methods
    // =========================================================================

    /// Get a snapshot of the current visible rows.
    pub fn snapshot(&self) -> Vec<Row> {
        self.inner.read().clone()
    }

    /// Number of visible rows.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    // =========================================================================
    // Subscription
    // =========================================================================

    /// Subscribe to row changes.
    ///
    /// The receiver gets the current state immediately and all future
    /// changes. Clone the receiver for multiple subscribers.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Row>> {
        self.rx.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(key: &str, expandable: bool) -> Row {
        Row {
            key: key.to_string(),
            cells: vec![],
            is_open: expandable.then_some(false),
            parent: None,
            full_width: false,
        }
    }

    #[test]
    fn test_replace_broadcasts() {
        let rows = ObservableRows::new(vec![]);
        let rx = rows.subscribe();
        assert!(rx.borrow().is_empty());

        rows.replace(vec![row("a", false), row("b", true)]);
        assert_eq!(rx.borrow().len(), 2);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_set_open_broadcasts() {
        let rows = ObservableRows::new(vec![row("a", true)]);
        let rx = rows.subscribe();

        rows.set_open(0, true).unwrap();
        assert_eq!(rx.borrow()[0].is_open, Some(true));

        rows.set_open(0, false).unwrap();
        assert_eq!(rx.borrow()[0].is_open, Some(false));
    }

    #[test]
    fn test_set_open_out_of_range() {
        let rows = ObservableRows::new(vec![row("a", true)]);
        let err = rows.set_open(5, true).unwrap_err();
        assert!(matches!(
            err,
            EngineError::RowOutOfRange { index: 5, len: 1 }
        ));
        // No state change
        assert_eq!(rows.snapshot()[0].is_open, Some(false));
    }

    #[test]
    fn test_set_open_preserves_membership_and_order() {
        let rows = ObservableRows::new(vec![row("a", true), row("b", false), row("c", true)]);
        rows.set_open(2, true).unwrap();

        let snapshot = rows.snapshot();
        let keys: Vec<&str> = snapshot.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }
}
