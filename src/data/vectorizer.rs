// ============================================================
// Layer 4 — CBOW Vectorizer
// ============================================================
// Converts a context string into a fixed-length array of
// vocabulary indices.
//
// Fitting scans the full source table exactly once and records
// two things:
//   1. the shared vocabulary — every token from every context
//      AND every standalone target (one vocabulary serves as
//      both input and output space in this model)
//   2. the maximum context length seen, which becomes the fixed
//      output length of every vector produced afterwards
//
// After fitting, vectorize() is a pure function: tokenize, look
// up each token, right-pad with the mask index up to the fitted
// length. Contexts longer than the fitted length are truncated.

use crate::data::tokenizer::WordTokenizer;
use crate::domain::record::TextRecord;
use crate::domain::vocabulary::Vocabulary;
use crate::error::Result;

/// Text → fixed-length index array converter.
///
/// Owns the tokenizer and the vocabulary it was fitted with;
/// both are immutable after construction.
pub struct CbowVectorizer {
    tokenizer: WordTokenizer,
    vocabulary: Vocabulary,
    max_context: usize,
}

impl CbowVectorizer {
    /// Fit a vectorizer over the full source table.
    ///
    /// The tokenizer is passed in explicitly (no ambient registry):
    /// the caller decides which tokenization the pipeline uses.
    pub fn fit(records: &[TextRecord], tokenizer: WordTokenizer) -> Self {
        let mut vocabulary = Vocabulary::new();
        let mut max_context = 0usize;

        for record in records {
            let tokens = tokenizer.tokenize(&record.context);
            max_context = max_context.max(tokens.len());
            for token in &tokens {
                vocabulary.add_token(token);
            }
            vocabulary.add_token(&record.target);
        }

        tracing::info!(
            "Vectorizer fitted: vocabulary={} tokens, max_context={}",
            vocabulary.len(),
            max_context
        );

        Self {
            tokenizer,
            vocabulary,
            max_context,
        }
    }

    /// Convert one context string into exactly `max_context` indices.
    ///
    /// Positions past the token count are filled with the mask
    /// index; tokens past `max_context` are dropped. A token that
    /// was never seen during fitting is an UnknownToken error and
    /// propagates to the caller.
    pub fn vectorize(&self, context: &str) -> Result<Vec<u32>> {
        let tokens = self.tokenizer.tokenize(context);

        let mut indices = Vec::with_capacity(tokens.len());
        for token in &tokens {
            indices.push(self.vocabulary.lookup_token(token)? as u32);
        }
        indices.truncate(self.max_context);

        let mask = self.vocabulary.mask_index() as u32;
        indices.resize(self.max_context, mask);

        Ok(indices)
    }

    /// Resolve a target word to its class index
    pub fn target_index(&self, target: &str) -> Result<u32> {
        Ok(self.vocabulary.lookup_token(target)? as u32)
    }

    /// The shared input/output vocabulary
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Fixed output length of every produced vector
    pub fn max_context(&self) -> usize {
        self.max_context
    }
}
