//! Token entry and dataset file types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::sort::SortColumn;

/// One declaration as it appears in a dataset file, before flattening.
///
/// Datasets carry no schema guarantees: absent fields deserialize to empty
/// strings and flow through without validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    /// CSS property name, e.g. `--pf-c-button--FontSize`.
    #[serde(default)]
    pub property: String,

    /// Generated binding identifier for this token.
    #[serde(default)]
    pub token: String,

    /// Resolved value (color, length, reference, ...).
    #[serde(default)]
    pub value: String,

    /// Sub-values when this token expands into multiple declarations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

/// One dataset file: selector -> declarations, in file order.
///
/// Iteration order is load-bearing (it determines flat-list order), so this
/// is an insertion-ordered map.
pub type TokenFile = IndexMap<String, Vec<RawEntry>>;

/// One CSS variable occurrence in the flat list.
///
/// Everything the table sorts, filters, and displays is a `TokenEntry`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenEntry {
    /// Selector or grouping key this token belongs to.
    pub selector: String,

    /// CSS property name.
    pub property: String,

    /// Generated binding identifier.
    pub token: String,

    /// Resolved value.
    pub value: String,

    /// Sub-values when present; makes the entry expandable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl TokenEntry {
    /// Build an entry from a raw declaration plus the selector it was
    /// keyed under.
    pub fn from_raw(selector: impl Into<String>, raw: RawEntry) -> Self {
        Self {
            selector: selector.into(),
            property: raw.property,
            token: raw.token,
            value: raw.value,
            values: raw.values,
        }
    }

    /// An entry with a sub-value list gets an expandable detail row.
    pub fn is_expandable(&self) -> bool {
        self.values.is_some()
    }

    /// Per-row key for UI state. Duplicates are tolerated, never
    /// deduplicated.
    pub fn row_key(&self) -> String {
        format!("{}_{}", self.selector, self.property)
    }

    /// The sortable field for a column.
    pub fn field(&self, column: SortColumn) -> &str {
        match column {
            SortColumn::Selector => &self.selector,
            SortColumn::Property => &self.property,
            SortColumn::Token => &self.token,
            SortColumn::Value => &self.value,
        }
    }

    /// JSON serialization of `values` - the searchable form of the
    /// sub-value list. `None` when the entry is not expandable.
    pub fn serialized_values(&self) -> Option<String> {
        self.values
            .as_ref()
            .map(|v| serde_json::to_string(v).unwrap_or_default())
    }
}
