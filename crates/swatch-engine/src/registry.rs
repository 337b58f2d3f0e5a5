//! Dataset Registry
//!
//! Token datasets are grouped by CSS prefix. The registry is a declared
//! mapping from normalized prefix key to dataset file, injected into the
//! table at construction - the caller decides which datasets exist.

use std::path::Path;

use indexmap::IndexMap;

use swatch_core::{DatasetError, TableOptions, TokenFile};

/// Normalize a CSS prefix into its registry key.
///
/// Strips one leading `pf-` and collapses runs of `-` into a single `_`:
/// `pf-c-button` -> `c_button`, `pf-global--spacer` -> `global_spacer`.
pub fn normalize_prefix(prefix: &str) -> String {
    let stripped = prefix.strip_prefix("pf-").unwrap_or(prefix);
    let mut key = String::with_capacity(stripped.len());
    let mut in_dashes = false;
    for ch in stripped.chars() {
        if ch == '-' {
            if !in_dashes {
                key.push('_');
            }
            in_dashes = true;
        } else {
            key.push(ch);
            in_dashes = false;
        }
    }
    key
}

/// A declared mapping from normalized prefix key to dataset file.
#[derive(Debug, Clone, Default)]
pub struct DatasetRegistry {
    files: IndexMap<String, TokenFile>,
}

impl DatasetRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dataset file under a normalized prefix key.
    pub fn insert(&mut self, key: impl Into<String>, file: TokenFile) {
        self.files.insert(key.into(), file);
    }

    /// Parse a registry from JSON of the form
    /// `{ "<key>": { "<selector>": [ {property, token, value, values?}, ... ] } }`.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let files: IndexMap<String, TokenFile> =
            serde_json::from_str(json).map_err(|e| DatasetError::Parse(e.to_string()))?;
        Ok(Self { files })
    }

    /// Load a registry from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let json =
            std::fs::read_to_string(path).map_err(|e| DatasetError::Io(e.to_string()))?;
        Self::from_json(&json)
    }

    /// Number of registered datasets.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Resolve the dataset files an options set asks for.
    ///
    /// Each requested prefix is normalized and looked up; prefixes with no
    /// registered dataset are skipped with a warning (the table just shows
    /// fewer rows). Matches are ordered by key, then narrowed to a single
    /// selector when the options name one.
    pub fn files_for(&self, options: &TableOptions) -> Vec<TokenFile> {
        let wanted: Vec<String> = options
            .prefixes
            .iter()
            .map(|p| normalize_prefix(p))
            .collect();

        for (prefix, key) in options.prefixes.iter().zip(&wanted) {
            if !self.files.contains_key(key) {
                tracing::warn!("No dataset registered for prefix '{}' (key '{}')", prefix, key);
            }
        }

        let mut matched: Vec<(&String, &TokenFile)> = self
            .files
            .iter()
            .filter(|(key, _)| wanted.iter().any(|w| w == *key))
            .collect();
        matched.sort_by(|(a, _), (b, _)| a.cmp(b));

        matched
            .into_iter()
            .map(|(_, file)| match &options.selector {
                Some(selector) => narrow_to_selector(file, selector),
                None => file.clone(),
            })
            .collect()
    }
}

/// Shrink a file to a single selector's entries; a file without that
/// selector shrinks to empty.
fn narrow_to_selector(file: &TokenFile, selector: &str) -> TokenFile {
    let mut narrowed = TokenFile::new();
    if let Some(entries) = file.get(selector) {
        narrowed.insert(selector.to_string(), entries.clone());
    }
    narrowed
}
