//! Sort column and direction types.

use serde::{Deserialize, Serialize};

/// A sortable column of the token table.
///
/// Columns are addressed positionally by rendering surfaces: index 0 is the
/// expansion-toggle column, 1..=4 are the data columns. The mapping does not
/// change when the selector column is hidden - identifiers map by position,
/// not visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    Selector,
    Property,
    Token,
    Value,
}

impl SortColumn {
    /// Resolve a surface's positional column index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            1 => Some(SortColumn::Selector),
            2 => Some(SortColumn::Property),
            3 => Some(SortColumn::Token),
            4 => Some(SortColumn::Value),
            _ => None,
        }
    }

    /// The positional index surfaces use for this column.
    pub fn index(self) -> usize {
        match self {
            SortColumn::Selector => 1,
            SortColumn::Property => 2,
            SortColumn::Token => 3,
            SortColumn::Value => 4,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// a-to-z.
    #[default]
    Ascending,
    /// z-to-a.
    Descending,
}

/// The sort indicator shown by a rendering surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// Column last sorted by, `None` until the first sort event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<SortColumn>,

    /// Direction of the last sort.
    pub direction: SortDirection,
}
