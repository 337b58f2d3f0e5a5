//! Token flattener.

use swatch_core::{TokenEntry, TokenFile};

/// Flatten dataset files into the single ordered entry list.
///
/// Pure and order-preserving: files in input order, selectors in map
/// insertion order, entries in per-selector list order. No filtering,
/// deduplication, sorting, or validation.
pub fn flatten_files(files: &[TokenFile]) -> Vec<TokenEntry> {
    let mut list = Vec::new();
    for file in files {
        for (selector, entries) in file {
            for raw in entries {
                list.push(TokenEntry::from_raw(selector.clone(), raw.clone()));
            }
        }
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_core::RawEntry;

    fn raw(property: &str) -> RawEntry {
        RawEntry {
            property: property.to_string(),
            token: format!("t_{}", property),
            value: "0".to_string(),
            values: None,
        }
    }

    #[test]
    fn test_preserves_traversal_order() {
        let mut first = TokenFile::new();
        first.insert(".b".to_string(), vec![raw("p1"), raw("p2")]);
        first.insert(".a".to_string(), vec![raw("p3")]);
        let mut second = TokenFile::new();
        second.insert(".c".to_string(), vec![raw("p4")]);

        let flat = flatten_files(&[first, second]);
        assert_eq!(flat.len(), 4);
        // Insertion order wins over key order: .b before .a
        let order: Vec<(&str, &str)> = flat
            .iter()
            .map(|e| (e.selector.as_str(), e.property.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![(".b", "p1"), (".b", "p2"), (".a", "p3"), (".c", "p4")]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(flatten_files(&[]).is_empty());
        assert!(flatten_files(&[TokenFile::new()]).is_empty());
    }

    #[test]
    fn test_malformed_entries_pass_through() {
        let mut file = TokenFile::new();
        file.insert(
            ".x".to_string(),
            vec![RawEntry {
                property: String::new(),
                token: String::new(),
                value: String::new(),
                values: None,
            }],
        );
        let flat = flatten_files(&[file]);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].property, "");
    }
}
