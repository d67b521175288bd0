//! Keyword extraction and normalization

use std::collections::HashSet;

/// Closed stop-word set. Part of the numeric contract: changing membership
/// changes scores, so this list is fixed.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "with", "by",
    "from", "up", "about", "into", "over", "after",
];

/// Extract the set of significant, normalized keywords from free text.
///
/// Normalization: lower-case, every character that is not a letter, digit,
/// or whitespace becomes a space, then the text is split on whitespace runs.
/// Tokens of length <= 2 and stop-words are dropped; duplicates collapse.
pub fn extract_keywords(text: &str) -> HashSet<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    normalized
        .split_whitespace()
        .filter(|word| word.chars().count() > 2)
        .filter(|word| !STOP_WORDS.contains(word))
        .map(|word| word.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_is_case_insensitive() {
        assert_eq!(extract_keywords("Python"), extract_keywords("python"));
    }

    #[test]
    fn test_stop_words_and_short_tokens_dropped() {
        assert!(extract_keywords("the and for to").is_empty());
        assert!(extract_keywords("a an ok go").is_empty());
    }

    #[test]
    fn test_punctuation_becomes_separator() {
        let keywords = extract_keywords("C++/Rust, Python-3; (backend)");
        assert!(keywords.contains("rust"));
        assert!(keywords.contains("python"));
        assert!(keywords.contains("backend"));
        // "c" and "3" fall below the length threshold once stripped
        assert!(!keywords.contains("c"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let keywords = extract_keywords("rust rust RUST Rust");
        assert_eq!(keywords.len(), 1);
        assert!(keywords.contains("rust"));
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("   \t\n  ").is_empty());
    }
}
