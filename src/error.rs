//! Error types for the CBOW classifier pipeline.

use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// All failure modes surfaced by this crate.
///
/// Malformed rows (missing column, unrecognised split label) are NOT
/// represented here — they are silently dropped during loading and
/// splitting, which is a deliberate tolerance policy. Only failures the
/// caller must handle become errors.
#[derive(Error, Debug)]
pub enum Error {
    /// A token was looked up that is not in the vocabulary.
    /// The vocabulary is built from the full training table, so this
    /// only happens when inference input contains unseen words.
    #[error("unknown token: '{0}' is not in the vocabulary")]
    UnknownToken(String),

    /// A vocabulary index was out of range for reverse lookup
    #[error("unknown index: {0} is outside the vocabulary (size {1})")]
    UnknownIndex(usize, usize),

    /// Pre-trained embedding matrix does not match the vocabulary
    /// or has ragged rows
    #[error("embedding shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Reading values back out of a tensor failed
    #[error("tensor data error: {0}")]
    TensorData(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
