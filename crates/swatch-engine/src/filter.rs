//! Row filter and visible-row derivation.

use regex::{Regex, RegexBuilder};

use swatch_core::{Cell, EngineError, Row, TokenEntry};

/// Compiled case-insensitive search filter.
///
/// An empty input compiles to the match-everything filter. A malformed
/// pattern is a visible error for the caller, never a silent
/// match-nothing or match-all.
#[derive(Debug, Clone, Default)]
pub struct PatternFilter {
    pattern: Option<Regex>,
}

impl PatternFilter {
    /// The filter that passes every entry.
    pub fn match_all() -> Self {
        Self::default()
    }

    /// Compile a search string.
    pub fn compile(input: &str) -> Result<Self, EngineError> {
        if input.is_empty() {
            return Ok(Self::match_all());
        }
        let pattern = RegexBuilder::new(input)
            .case_insensitive(true)
            .build()
            .map_err(|e| EngineError::Pattern(e.to_string()))?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// Whether this is the match-everything filter.
    pub fn is_match_all(&self) -> bool {
        self.pattern.is_none()
    }

    /// An entry passes iff the pattern matches any of selector, property,
    /// token, value, or the serialized sub-value list.
    pub fn passes(&self, entry: &TokenEntry) -> bool {
        let Some(re) = &self.pattern else {
            return true;
        };
        re.is_match(&entry.selector)
            || re.is_match(&entry.property)
            || re.is_match(&entry.token)
            || re.is_match(&entry.value)
            || entry
                .serialized_values()
                .is_some_and(|v| re.is_match(&v))
    }
}

/// Derive the visible row sequence from the flat list.
///
/// Entries are visited in flat-list order; each passing entry emits one
/// display row, immediately followed by one detail row when the entry is
/// expandable. Detail rows point at their parent by index into the output
/// sequence. Expandable rows always come out closed - open state does not
/// survive a recompute.
pub fn derive_rows(
    flat: &[TokenEntry],
    filter: &PatternFilter,
    hide_selector_column: bool,
) -> Vec<Row> {
    let mut rows = Vec::new();
    for entry in flat {
        if !filter.passes(entry) {
            continue;
        }

        let key = entry.row_key();
        let mut cells = Vec::new();
        if !hide_selector_column {
            cells.push(Cell::text(&entry.selector));
        }
        cells.push(Cell::text(&entry.property));
        cells.push(Cell::text(&entry.token));
        cells.push(Cell::value(&entry.value));

        let parent_index = rows.len();
        rows.push(Row {
            key: key.clone(),
            cells,
            is_open: entry.values.as_ref().map(|_| false),
            parent: None,
            full_width: false,
        });

        if let Some(values) = &entry.values {
            rows.push(Row {
                key,
                cells: vec![Cell::Detail {
                    property: entry.property.clone(),
                    values: values.clone(),
                }],
                is_open: None,
                parent: Some(parent_index),
                full_width: true,
            });
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(selector: &str, property: &str, token: &str, value: &str) -> TokenEntry {
        TokenEntry {
            selector: selector.to_string(),
            property: property.to_string(),
            token: token.to_string(),
            value: value.to_string(),
            values: None,
        }
    }

    fn expandable(selector: &str, property: &str, values: &[&str]) -> TokenEntry {
        TokenEntry {
            values: Some(values.iter().map(|v| v.to_string()).collect()),
            ..entry(selector, property, "t", "0")
        }
    }

    #[test]
    fn test_compile_empty_matches_all() {
        let filter = PatternFilter::compile("").unwrap();
        assert!(filter.is_match_all());
        assert!(filter.passes(&entry(".x", "p", "t", "v")));
    }

    #[test]
    fn test_compile_invalid_pattern() {
        let err = PatternFilter::compile("fo(o").unwrap_err();
        assert!(matches!(err, EngineError::Pattern(_)));
    }

    #[test]
    fn test_passes_each_searchable_field() {
        let plain = entry(".foo", "color", "t_color", "#fff");
        for pattern in ["foo", "color", "t_col", "fff"] {
            let filter = PatternFilter::compile(pattern).unwrap();
            assert!(filter.passes(&plain), "pattern {:?} should pass", pattern);
        }

        // Sub-values are searched through their JSON serialization.
        let multi = expandable(".foo", "spacing", &["4px", "8px"]);
        let filter = PatternFilter::compile("8px").unwrap();
        assert!(filter.passes(&multi));

        let filter = PatternFilter::compile("absent").unwrap();
        assert!(!filter.passes(&plain));
        assert!(!filter.passes(&multi));
    }

    #[test]
    fn test_case_insensitive() {
        let filter = PatternFilter::compile("FONTSIZE").unwrap();
        assert!(filter.passes(&entry(".x", "--FontSize", "t", "1rem")));
    }

    #[test]
    fn test_detail_row_adjacency_and_parent_index() {
        let flat = vec![
            entry(".foo", "color", "t_color", "#fff"),
            expandable(".foo", "spacing", &["4px", "8px"]),
            entry(".bar", "width", "t_width", "10px"),
        ];
        let rows = derive_rows(&flat, &PatternFilter::match_all(), false);
        assert_eq!(rows.len(), 4);

        assert!(!rows[0].is_expandable());
        assert!(rows[1].is_expandable());
        assert_eq!(rows[1].is_open, Some(false));

        let detail = &rows[2];
        assert!(detail.is_detail());
        assert_eq!(detail.parent, Some(1));
        assert!(detail.full_width);
        assert_eq!(
            detail.cells,
            vec![Cell::Detail {
                property: "spacing".to_string(),
                values: vec!["4px".to_string(), "8px".to_string()],
            }]
        );

        assert!(!rows[3].is_detail());
    }

    #[test]
    fn test_parent_index_counts_output_not_source() {
        // The first entry is filtered out, so the surviving expandable
        // entry's row lands at output index 0.
        let flat = vec![
            entry(".zap", "color", "t_color", "#fff"),
            expandable(".foo", "spacing", &["4px"]),
        ];
        let filter = PatternFilter::compile("foo").unwrap();
        let rows = derive_rows(&flat, &filter, false);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].parent, Some(0));
    }

    #[test]
    fn test_hidden_selector_column_drops_cell() {
        let flat = vec![entry(".foo", "color", "t_color", "#fff")];
        let rows = derive_rows(&flat, &PatternFilter::match_all(), true);
        assert_eq!(rows[0].cells.len(), 3);
        assert_eq!(rows[0].cells[0], Cell::text("color"));
    }

    #[test]
    fn test_value_cell_swatch() {
        let flat = vec![entry(".foo", "color", "t_color", "#fff")];
        let rows = derive_rows(&flat, &PatternFilter::match_all(), false);
        assert_eq!(
            rows[0].cells[3],
            Cell::Value {
                text: "#fff".to_string(),
                swatch: true
            }
        );
    }

    #[test]
    fn test_filter_idempotence() {
        let flat = vec![
            entry(".foo", "color", "t_color", "#fff"),
            expandable(".foo", "spacing", &["4px", "8px"]),
        ];
        let filter = PatternFilter::compile("foo").unwrap();
        let first = derive_rows(&flat, &filter, false);
        let second = derive_rows(&flat, &filter, false);
        assert_eq!(first, second);
    }
}
