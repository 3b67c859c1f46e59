// ============================================================
// Layer 3 — Text Record Domain Type
// ============================================================
// Represents a single row of the source table. This is a plain
// data struct with no behaviour — a context window of text, the
// target word the model should predict, and a split label that
// decides which subset the row lands in.

use serde::{Deserialize, Serialize};

/// One labelled training row.
///
/// The `split` field is kept as the raw string from the source
/// table; mapping it onto a recognised [`Split`] happens at
/// partition time so that rows with unrecognised labels can be
/// silently excluded rather than rejected up front.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRecord {
    /// The context window — the words surrounding the target
    pub context: String,

    /// The word the classifier learns to predict
    pub target: String,

    /// Raw split label: "train", "val" or "test"
    pub split: String,
}

impl TextRecord {
    /// Create a new TextRecord.
    /// Uses impl Into<String> so callers can pass &str or String.
    pub fn new(
        context: impl Into<String>,
        target: impl Into<String>,
        split: impl Into<String>,
    ) -> Self {
        Self {
            context: context.into(),
            target: target.into(),
            split: split.into(),
        }
    }

    /// The recognised split this row belongs to, if any
    pub fn split_label(&self) -> Option<Split> {
        Split::from_label(&self.split)
    }
}

/// The three recognised dataset partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Split {
    Train,
    Val,
    Test,
}

impl Split {
    /// Map a raw label onto a split. Anything other than the three
    /// exact labels returns None — the row is then excluded from
    /// every subset (tolerance policy, no diagnostic per row).
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "train" => Some(Split::Train),
            "val" => Some(Split::Val),
            "test" => Some(Split::Test),
            _ => None,
        }
    }
}
