// ============================================================
// Layer 4 — Word Tokenizer
// ============================================================
// Splits a context string into lowercase word tokens.
//
// The vectorizer depends on this being deterministic: the same
// string must always produce the same token sequence, because
// the vocabulary is built during fitting and looked up strictly
// afterwards. No stopword removal, no stemming — every surface
// word is a candidate class for the CBOW objective.

use regex::Regex;

/// Regex-based word tokenizer.
pub struct WordTokenizer {
    word_regex: Regex,
}

impl WordTokenizer {
    /// Create a new tokenizer with the default word pattern
    /// (runs of letters, digits and apostrophes).
    pub fn new() -> Self {
        Self {
            // Unwrap is fine: the pattern is a compile-time constant
            word_regex: Regex::new(r"[A-Za-z0-9']+").unwrap(),
        }
    }

    /// Tokenize a text string into lowercase tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.word_regex
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect()
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        let tok = WordTokenizer::new();
        assert_eq!(tok.tokenize("the cat sat"), vec!["the", "cat", "sat"]);
    }

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let tok = WordTokenizer::new();
        assert_eq!(tok.tokenize("The cat, sat!"), vec!["the", "cat", "sat"]);
    }

    #[test]
    fn test_keeps_apostrophes_and_digits() {
        let tok = WordTokenizer::new();
        assert_eq!(tok.tokenize("don't stop 42"), vec!["don't", "stop", "42"]);
    }

    #[test]
    fn test_empty_input() {
        let tok = WordTokenizer::new();
        assert!(tok.tokenize("").is_empty());
        assert!(tok.tokenize("  \t ").is_empty());
    }

    #[test]
    fn test_deterministic() {
        let tok = WordTokenizer::new();
        assert_eq!(tok.tokenize("a b c"), tok.tokenize("a b c"));
    }
}
