// ============================================================
// Layer 4 — Dataset Splitter
// ============================================================
// Vectorizes every row of the source table and partitions the
// results into train/val/test subsets keyed by the split label.
//
// Partition rules:
//   - the three subsets are disjoint — a row lands in exactly
//     the subset its label names
//   - a row with an unrecognised label lands in NO subset
//     (tolerance policy: excluded, not raised)
//   - row order within a subset follows the source table; only
//     the training DataLoader shuffles, at iteration time
//
// Vectorization and target lookup errors are NOT tolerated —
// they propagate, because the vocabulary was fitted on this very
// table and a miss means the vectorizer and table disagree.

use std::sync::Arc;

use burn::data::dataloader::{DataLoader, DataLoaderBuilder};
use burn::prelude::Backend;

use crate::data::batcher::{CbowBatch, CbowBatcher};
use crate::data::dataset::{CbowDataset, CbowSample};
use crate::data::vectorizer::CbowVectorizer;
use crate::domain::record::{Split, TextRecord};
use crate::error::Result;

/// Seed for the training loader's shuffle
const SHUFFLE_SEED: u64 = 42;

/// The three disjoint, batch-ready subsets of the source table.
pub struct DatasetSplits {
    train: Vec<CbowSample>,
    val: Vec<CbowSample>,
    test: Vec<CbowSample>,
    train_batch_size: usize,
    val_batch_size: usize,
    test_batch_size: usize,
}

impl DatasetSplits {
    /// Vectorize all rows and partition them by split label.
    /// The single batch size applies to all three subsets;
    /// use [`with_batch_sizes`](Self::with_batch_sizes) to override.
    pub fn from_records(
        records: &[TextRecord],
        vectorizer: &CbowVectorizer,
        batch_size: usize,
    ) -> Result<Self> {
        let mut train = Vec::new();
        let mut val = Vec::new();
        let mut test = Vec::new();
        let mut excluded = 0usize;

        for record in records {
            let subset = match record.split_label() {
                Some(Split::Train) => &mut train,
                Some(Split::Val) => &mut val,
                Some(Split::Test) => &mut test,
                None => {
                    excluded += 1;
                    continue;
                }
            };
            subset.push(CbowSample {
                context_ids: vectorizer.vectorize(&record.context)?,
                target: vectorizer.target_index(&record.target)?,
            });
        }

        tracing::info!(
            "Dataset split: {} train, {} val, {} test ({} excluded)",
            train.len(),
            val.len(),
            test.len(),
            excluded
        );

        Ok(Self {
            train,
            val,
            test,
            train_batch_size: batch_size,
            val_batch_size: batch_size,
            test_batch_size: batch_size,
        })
    }

    /// Give each subset its own batch size
    pub fn with_batch_sizes(mut self, train: usize, val: usize, test: usize) -> Self {
        self.train_batch_size = train;
        self.val_batch_size = val;
        self.test_batch_size = test;
        self
    }

    pub fn train_dataset(&self) -> CbowDataset {
        CbowDataset::new(self.train.clone())
    }

    pub fn val_dataset(&self) -> CbowDataset {
        CbowDataset::new(self.val.clone())
    }

    pub fn test_dataset(&self) -> CbowDataset {
        CbowDataset::new(self.test.clone())
    }

    /// Training loader — shuffled each epoch
    pub fn train_loader<B: Backend>(&self, device: &B::Device) -> Arc<dyn DataLoader<CbowBatch<B>>> {
        DataLoaderBuilder::new(CbowBatcher::<B>::new(device.clone()))
            .batch_size(self.train_batch_size)
            .shuffle(SHUFFLE_SEED)
            .num_workers(1)
            .build(self.train_dataset())
    }

    /// Validation loader — source order preserved
    pub fn val_loader<B: Backend>(&self, device: &B::Device) -> Arc<dyn DataLoader<CbowBatch<B>>> {
        DataLoaderBuilder::new(CbowBatcher::<B>::new(device.clone()))
            .batch_size(self.val_batch_size)
            .num_workers(1)
            .build(self.val_dataset())
    }

    /// Test loader — source order preserved
    pub fn test_loader<B: Backend>(&self, device: &B::Device) -> Arc<dyn DataLoader<CbowBatch<B>>> {
        DataLoaderBuilder::new(CbowBatcher::<B>::new(device.clone()))
            .batch_size(self.test_batch_size)
            .num_workers(1)
            .build(self.test_dataset())
    }
}
