// ============================================================
// Layer 3 — Vocabulary
// ============================================================
// Bidirectional token <-> index mapping with two reserved slots:
//
//   index 0 — <mask>  the padding index; vectorized contexts are
//                     right-padded with this value
//   index 1 — <unk>   reserved unknown slot; kept so the index
//                     layout matches the usual CBOW convention,
//                     but lookups are STRICT — an absent token is
//                     an error, never a silent fallback to <unk>.
//                     The vocabulary is built from the same table
//                     the lookups come from, so a miss means the
//                     caller fed the model out-of-corpus text.
//
// Indices are assigned in insertion order, so building the
// vocabulary twice from the same rows yields identical mappings.

use std::collections::HashMap;

use crate::error::{Error, Result};

pub const MASK_TOKEN: &str = "<mask>";
pub const UNK_TOKEN: &str = "<unk>";

/// Insertion-ordered token <-> index map.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    token_to_index: HashMap<String, usize>,
    index_to_token: Vec<String>,
    mask_index: usize,
    unk_index: usize,
}

impl Vocabulary {
    /// Create an empty vocabulary containing only the reserved tokens.
    pub fn new() -> Self {
        let mut vocab = Self {
            token_to_index: HashMap::new(),
            index_to_token: Vec::new(),
            mask_index: 0,
            unk_index: 0,
        };
        vocab.mask_index = vocab.add_token(MASK_TOKEN);
        vocab.unk_index = vocab.add_token(UNK_TOKEN);
        vocab
    }

    /// Add a token, returning its index. Adding a token that is
    /// already present is a no-op and returns the existing index.
    pub fn add_token(&mut self, token: &str) -> usize {
        if let Some(&index) = self.token_to_index.get(token) {
            return index;
        }
        let index = self.index_to_token.len();
        self.token_to_index.insert(token.to_string(), index);
        self.index_to_token.push(token.to_string());
        index
    }

    /// Forward lookup: token → index. Strict — see module docs.
    pub fn lookup_token(&self, token: &str) -> Result<usize> {
        self.token_to_index
            .get(token)
            .copied()
            .ok_or_else(|| Error::UnknownToken(token.to_string()))
    }

    /// Reverse lookup: index → token.
    pub fn lookup_index(&self, index: usize) -> Result<&str> {
        self.index_to_token
            .get(index)
            .map(String::as_str)
            .ok_or(Error::UnknownIndex(index, self.index_to_token.len()))
    }

    /// The reserved padding index (always 0)
    pub fn mask_index(&self) -> usize {
        self.mask_index
    }

    /// The reserved unknown index (always 1)
    pub fn unk_index(&self) -> usize {
        self.unk_index
    }

    /// Total number of entries, reserved tokens included
    pub fn len(&self) -> usize {
        self.index_to_token.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index_to_token.is_empty()
    }

    /// True if the token has an index
    pub fn contains(&self, token: &str) -> bool {
        self.token_to_index.contains_key(token)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_indices() {
        let vocab = Vocabulary::new();
        assert_eq!(vocab.mask_index(), 0);
        assert_eq!(vocab.unk_index(), 1);
        assert_eq!(vocab.len(), 2);
    }

    #[test]
    fn test_insertion_order_is_stable() {
        let mut vocab = Vocabulary::new();
        assert_eq!(vocab.add_token("the"), 2);
        assert_eq!(vocab.add_token("cat"), 3);
        assert_eq!(vocab.add_token("sat"), 4);
        // Re-adding never reassigns
        assert_eq!(vocab.add_token("the"), 2);
        assert_eq!(vocab.len(), 5);
    }

    #[test]
    fn test_round_trip_lookup() {
        let mut vocab = Vocabulary::new();
        let idx = vocab.add_token("cat");
        assert_eq!(vocab.lookup_token("cat").unwrap(), idx);
        assert_eq!(vocab.lookup_index(idx).unwrap(), "cat");
    }

    #[test]
    fn test_unknown_token_is_an_error() {
        let vocab = Vocabulary::new();
        let err = vocab.lookup_token("missing").unwrap_err();
        assert!(matches!(err, Error::UnknownToken(_)));
    }

    #[test]
    fn test_out_of_range_index_is_an_error() {
        let vocab = Vocabulary::new();
        assert!(vocab.lookup_index(99).is_err());
    }
}
