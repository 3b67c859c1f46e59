// ============================================================
// Layer 4 — CBOW Batcher
// ============================================================
// Implements Burn's Batcher trait to convert a Vec<CbowSample>
// into tensors.
//
// How batching works here:
//   Input:  Vec of N CbowSamples, each with context length S
//   Output: CbowBatch with a contexts tensor of shape [N, S]
//           and a targets tensor of shape [N]
//
// We flatten all context_ids into one long Vec, then reshape:
//   [s1_t1, ..., s1_tS, s2_t1, ..., sN_tS] → [N, S]
//
// This is simple because every sample is already padded to the
// vectorizer's fixed context length — no dynamic padding needed.

use burn::{data::dataloader::batcher::Batcher, prelude::*};

use crate::data::dataset::CbowSample;

// ─── CbowBatch ────────────────────────────────────────────────────────────────
/// A batch of CBOW samples ready for the model forward pass.
///
/// B is the Burn Backend (e.g. NdArray, Wgpu) — generic so the
/// same batcher works on any device.
#[derive(Debug, Clone)]
pub struct CbowBatch<B: Backend> {
    /// Context index arrays — shape: [batch_size, max_context]
    pub contexts: Tensor<B, 2, Int>,

    /// Target class indices — shape: [batch_size]
    pub targets: Tensor<B, 1, Int>,
}

// ─── CbowBatcher ──────────────────────────────────────────────────────────────
/// Holds the target device so tensors are created in the right place.
#[derive(Clone, Debug)]
pub struct CbowBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> CbowBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

impl<B: Backend> Batcher<CbowSample, CbowBatch<B>> for CbowBatcher<B> {
    fn batch(&self, items: Vec<CbowSample>) -> CbowBatch<B> {
        let batch_size = items.len();
        // All samples share the vectorizer's fixed context length
        let context_len = items[0].context_ids.len();

        let contexts_flat: Vec<i32> = items
            .iter()
            .flat_map(|s| s.context_ids.iter().map(|&x| x as i32))
            .collect();

        let targets_flat: Vec<i32> = items.iter().map(|s| s.target as i32).collect();

        let contexts = Tensor::<B, 1, Int>::from_ints(contexts_flat.as_slice(), &self.device)
            .reshape([batch_size, context_len]);

        let targets = Tensor::<B, 1, Int>::from_ints(targets_flat.as_slice(), &self.device);

        CbowBatch { contexts, targets }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray<f32>;

    #[test]
    fn test_batch_shapes() {
        let device = Default::default();
        let batcher = CbowBatcher::<TestBackend>::new(device);

        let items = vec![
            CbowSample {
                context_ids: vec![2, 3, 0, 0],
                target: 4,
            },
            CbowSample {
                context_ids: vec![4, 2, 3, 0],
                target: 2,
            },
            CbowSample {
                context_ids: vec![3, 0, 0, 0],
                target: 5,
            },
        ];

        let batch = batcher.batch(items);
        assert_eq!(batch.contexts.dims(), [3, 4]);
        assert_eq!(batch.targets.dims(), [3]);
    }

    #[test]
    fn test_batch_preserves_values() {
        let device = Default::default();
        let batcher = CbowBatcher::<TestBackend>::new(device);

        let items = vec![CbowSample {
            context_ids: vec![2, 3, 0, 0],
            target: 4,
        }];

        let batch = batcher.batch(items);
        // NdArray's IntElem is i64, so values come back as i64
        let contexts: Vec<i64> = batch.contexts.into_data().to_vec().unwrap();
        let targets: Vec<i64> = batch.targets.into_data().to_vec().unwrap();
        assert_eq!(contexts, vec![2i64, 3, 0, 0]);
        assert_eq!(targets, vec![4i64]);
    }
}
