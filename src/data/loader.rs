// ============================================================
// Layer 4 — Record Loader
// ============================================================
// Loads the source table from a CSV file using the csv crate.
//
// Expected columns (header row required):
//   context — free text, the words surrounding the target
//   target  — the word to predict
//   split   — "train", "val" or "test"
//
// Tolerance policy: a row that fails to deserialize (missing
// column, bad encoding) is dropped, not raised. The aggregate
// drop count is logged once after the read so a corrupt file is
// still visible in the logs without failing the whole run.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::domain::record::TextRecord;
use crate::domain::traits::RecordSource;
use crate::error::Result;

/// Loads all rows of a CSV source table.
/// Implements the RecordSource trait from Layer 3.
pub struct CsvLoader {
    path: PathBuf,
}

impl CsvLoader {
    /// Create a new CsvLoader pointed at a file
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RecordSource for CsvLoader {
    fn load_all(&self) -> Result<Vec<TextRecord>> {
        let file = File::open(&self.path)?;
        let mut reader = csv::Reader::from_reader(file);

        let mut records = Vec::new();
        let mut dropped = 0usize;

        for row in reader.deserialize::<TextRecord>() {
            match row {
                Ok(record) => records.push(record),
                // Malformed row — excluded, not raised
                Err(_) => dropped += 1,
            }
        }

        if dropped > 0 {
            tracing::warn!(
                "Dropped {} malformed row(s) while reading '{}'",
                dropped,
                self.path.display()
            );
        }
        tracing::info!(
            "Loaded {} records from '{}'",
            records.len(),
            self.path.display()
        );

        Ok(records)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_loads_well_formed_rows() {
        let file = write_csv(
            "context,target,split\n\
             the cat,sat,train\n\
             a dog,ran,val\n",
        );
        let loader = CsvLoader::new(file.path());
        let records = loader.load_all().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].context, "the cat");
        assert_eq!(records[0].target, "sat");
        assert_eq!(records[1].split, "val");
    }

    #[test]
    fn test_malformed_rows_are_dropped() {
        // Second row is missing the split column entirely
        let file = write_csv(
            "context,target,split\n\
             the cat,sat,train\n\
             a dog,ran\n\
             big bird,flew,test\n",
        );
        let loader = CsvLoader::new(file.path());
        let records = loader.load_all().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].target, "flew");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let loader = CsvLoader::new("no/such/file.csv");
        assert!(loader.load_all().is_err());
    }
}
