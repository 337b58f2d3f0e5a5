//! Display-ready rows derived from token entries.

use serde::{Deserialize, Serialize};

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Cell {
    /// Plain text cell.
    Text { text: String },

    /// Value cell. `swatch` asks the surface to render a color chip
    /// next to the text.
    Value { text: String, swatch: bool },

    /// The body of a detail row: the parent property plus its sub-values,
    /// rendered as an indented list.
    Detail {
        property: String,
        values: Vec<String>,
    },
}

impl Cell {
    /// Text cell helper.
    pub fn text(text: impl Into<String>) -> Self {
        Cell::Text { text: text.into() }
    }

    /// Value cell helper; derives the swatch flag from the value text.
    pub fn value(text: impl Into<String>) -> Self {
        let text = text.into();
        let swatch = is_color_value(&text);
        Cell::Value { text, swatch }
    }
}

/// A display row in the visible sequence.
///
/// Rows are pure derivations: recomputed wholesale on every filter or sort
/// event. The open flag is the only per-row mutable state and is keyed by
/// position in the current visible sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Key derived from selector + property.
    pub key: String,

    /// Display cells, in column order.
    pub cells: Vec<Cell>,

    /// `Some(false)` on expandable rows at derivation time; `None` on
    /// everything else.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_open: Option<bool>,

    /// On a detail row, the index of the row it expands - an index into
    /// the visible sequence, not the flat list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<usize>,

    /// Detail rows span the full table width.
    #[serde(default)]
    pub full_width: bool,
}

impl Row {
    /// Whether this row owns a collapsible detail row.
    pub fn is_expandable(&self) -> bool {
        self.is_open.is_some()
    }

    /// Whether this is a synthetic detail row.
    pub fn is_detail(&self) -> bool {
        self.parent.is_some()
    }
}

/// Whether a value should be rendered with a color chip (`#...` / `rgb...`).
pub fn is_color_value(value: &str) -> bool {
    value.starts_with('#') || value.starts_with("rgb")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_values() {
        assert!(is_color_value("#fff"));
        assert!(is_color_value("rgb(0, 0, 0)"));
        assert!(is_color_value("rgba(0, 0, 0, 0.5)"));
        assert!(!is_color_value("4px"));
        assert!(!is_color_value("var(--pf-global--Color--100)"));
    }

    #[test]
    fn test_value_cell_swatch_flag() {
        assert_eq!(
            Cell::value("#fff"),
            Cell::Value {
                text: "#fff".to_string(),
                swatch: true
            }
        );
        assert_eq!(
            Cell::value("1rem"),
            Cell::Value {
                text: "1rem".to_string(),
                swatch: false
            }
        );
    }

    #[test]
    fn test_row_kind_helpers() {
        let row = Row {
            key: "k".to_string(),
            cells: vec![],
            is_open: Some(false),
            parent: None,
            full_width: false,
        };
        assert!(row.is_expandable());
        assert!(!row.is_detail());

        let detail = Row {
            key: "k".to_string(),
            cells: vec![],
            is_open: None,
            parent: Some(0),
            full_width: true,
        };
        assert!(!detail.is_expandable());
        assert!(detail.is_detail());
    }
}
