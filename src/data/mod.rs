// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from the raw CSV table to tensor batches.
//
// The pipeline flows in this order:
//
//   source CSV (context, target, split)
//       │
//       ▼
//   CsvLoader         → reads rows, drops malformed ones
//       │
//       ▼
//   WordTokenizer     → splits a context string into tokens
//       │
//       ▼
//   CbowVectorizer    → fits the vocabulary, maps text to
//       │               fixed-length index arrays
//       ▼
//   DatasetSplits     → partitions rows into train/val/test
//       │
//       ▼
//   CbowBatcher       → stacks samples into tensor batches
//       │
//       ▼
//   DataLoader        → feeds batches to a training driver
//
// Each module is responsible for exactly one step.

/// Loads the source table from a CSV file
pub mod loader;

/// Splits raw text into lowercase word tokens
pub mod tokenizer;

/// Fits the vocabulary and converts text to index arrays
pub mod vectorizer;

/// Implements Burn's Dataset trait for CBOW samples
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;

/// Partitions vectorized rows into train/val/test subsets
pub mod splitter;
