//! Table options.
//!
//! Options are fixed at widget construction time. Sites typically ship them
//! alongside the page that embeds the table; the demo binary reads them from
//! a TOML file.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Construction-time options for a token table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableOptions {
    /// CSS prefixes whose datasets the table shows, e.g. `pf-c-button`.
    #[serde(default)]
    pub prefixes: Vec<String>,

    /// Narrow each dataset file to a single selector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,

    /// Drop the selector column from display. Sorting by selector stays
    /// possible - columns are addressed by position, not visibility.
    #[serde(default)]
    pub hide_selector_column: bool,

    /// Milliseconds to wait after typing stops before filtering.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            prefixes: Vec::new(),
            selector: None,
            hide_selector_column: false,
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl TableOptions {
    /// Options for a single prefix, everything else defaulted.
    pub fn for_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefixes: vec![prefix.into()],
            ..Self::default()
        }
    }

    /// The debounce window as a `Duration`.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn default_debounce_ms() -> u64 {
    500
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = TableOptions::default();
        assert!(options.prefixes.is_empty());
        assert!(options.selector.is_none());
        assert!(!options.hide_selector_column);
        assert_eq!(options.debounce(), Duration::from_millis(500));
    }

    #[test]
    fn test_toml_round_trip_defaults() {
        let options: TableOptions = toml::from_str(
            r#"
            prefixes = ["pf-c-button"]
            hide_selector_column = true
            "#,
        )
        .unwrap();
        assert_eq!(options.prefixes, vec!["pf-c-button".to_string()]);
        assert!(options.hide_selector_column);
        assert_eq!(options.debounce_ms, 500);
    }
}
