//! Shared text cleanup for feature extraction.
//!
//! Feature extractors compare values drawn from differently curated
//! source registries, so every comparison goes through the same cheap
//! normalization: case folding and UAX #29 word splitting.

use std::collections::BTreeSet;

use unicode_segmentation::UnicodeSegmentation;

/// Fold case and collapse a value to its space-joined words.
///
/// Returns `None` when nothing word-like remains.
pub(crate) fn clean(value: &str) -> Option<String> {
    let words: Vec<String> = value
        .unicode_words()
        .map(|word| word.to_lowercase())
        .collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

/// Clean every value, dropping the ones with no word content.
pub(crate) fn clean_set(values: &[String]) -> BTreeSet<String> {
    values.iter().filter_map(|value| clean(value)).collect()
}

/// The set of individual folded words across all values.
pub(crate) fn word_set(values: &[String]) -> BTreeSet<String> {
    values
        .iter()
        .flat_map(|value| value.unicode_words())
        .map(|word| word.to_lowercase())
        .collect()
}

/// Proportion of shared elements, measured against the smaller set.
///
/// 0.0 when either set is empty.
pub(crate) fn overlap_ratio(left: &BTreeSet<String>, right: &BTreeSet<String>) -> f64 {
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }
    let common = left.intersection(right).count();
    let smaller = left.len().min(right.len()).max(1);
    common as f64 / smaller as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean() {
        assert_eq!(clean("  John   SMITH "), Some("john smith".to_string()));
        assert_eq!(clean("--"), None);
        assert_eq!(clean(""), None);
    }

    #[test]
    fn test_word_set_merges_values() {
        let values = vec!["John Smith".to_string(), "Smith, J.".to_string()];
        let words = word_set(&values);
        assert!(words.contains("john"));
        assert!(words.contains("smith"));
        assert!(words.contains("j"));
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn test_overlap_ratio() {
        let left: BTreeSet<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let right: BTreeSet<String> = ["b", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(overlap_ratio(&left, &right), 1.0);
        assert_eq!(overlap_ratio(&left, &BTreeSet::new()), 0.0);
    }
}
