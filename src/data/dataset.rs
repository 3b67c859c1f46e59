use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

/// One fully vectorized training sample: a fixed-length context
/// index array and the class index of its target word.
/// All samples in one dataset share the same context length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CbowSample {
    pub context_ids: Vec<u32>,
    pub target: u32,
}

impl CbowSample {
    pub fn context_len(&self) -> usize {
        self.context_ids.len()
    }
}

pub struct CbowDataset {
    samples: Vec<CbowSample>,
}

impl CbowDataset {
    pub fn new(samples: Vec<CbowSample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[CbowSample] {
        &self.samples
    }
}

impl Dataset<CbowSample> for CbowDataset {
    fn get(&self, index: usize) -> Option<CbowSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}
