// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types we can
// swap implementations without changing the code that uses them.
// The data layer only ever sees a RecordSource, so a future
// loader for another tabular format slots in without touching
// the vectorizer or splitter.

use crate::domain::record::TextRecord;
use crate::error::Result;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Any component that can yield labelled text records.
///
/// Implementations:
///   - CsvLoader → loads from a CSV file with context/target/split columns
pub trait RecordSource {
    /// Load all available records from this source.
    fn load_all(&self) -> Result<Vec<TextRecord>>;
}
