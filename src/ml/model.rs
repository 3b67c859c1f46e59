use burn::{
    module::Param,
    nn::{Dropout, DropoutConfig, Embedding, EmbeddingConfig, Linear, LinearConfig},
    prelude::*,
};

// Only the error type is imported here: the crate's one-generic
// `Result` alias must stay out of this module's namespace or the
// Config derive's generated serde impls pick it up.
use crate::error::Error;

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct CbowClassifierConfig {
    /// Number of classes AND number of embedding rows — the model
    /// predicts over the same vocabulary it embeds
    pub vocab_size: usize,

    /// Embedding dimension for randomly initialised tables.
    /// Ignored when pre-trained vectors are supplied — their
    /// dimension wins.
    #[config(default = 50)]
    pub embedding_dim: usize,

    /// Dropout applied to the pooled vector
    #[config(default = 0.3)]
    pub dropout: f64,

    /// The vocabulary's padding index
    #[config(default = 0)]
    pub mask_index: usize,
}

impl CbowClassifierConfig {
    /// Random trainable embedding table of `embedding_dim`.
    pub fn init<B: Backend>(&self, device: &B::Device) -> CbowClassifier<B> {
        tracing::info!("Not using pre-trained word embeddings...");
        let embedding = EmbeddingConfig::new(self.vocab_size, self.embedding_dim).init(device);
        self.assemble(embedding, self.embedding_dim, device)
    }

    /// Embedding table seeded from externally loaded pre-trained
    /// vectors, one row per vocabulary entry. The vector dimension
    /// dictates the model's embedding dimension, overriding
    /// `embedding_dim`.
    pub fn init_with_embeddings<B: Backend>(
        &self,
        vectors: &[Vec<f32>],
        device: &B::Device,
    ) -> Result<CbowClassifier<B>, Error> {
        if vectors.len() != self.vocab_size {
            return Err(Error::ShapeMismatch(format!(
                "expected {} embedding rows, got {}",
                self.vocab_size,
                vectors.len()
            )));
        }
        let dim = vectors
            .first()
            .map(Vec::len)
            .filter(|&d| d > 0)
            .ok_or_else(|| Error::ShapeMismatch("empty embedding matrix".to_string()))?;
        if let Some(bad) = vectors.iter().find(|row| row.len() != dim) {
            return Err(Error::ShapeMismatch(format!(
                "ragged embedding matrix: expected dimension {}, found row of {}",
                dim,
                bad.len()
            )));
        }

        tracing::info!("Using pre-trained word embeddings...");
        let flat: Vec<f32> = vectors.iter().flatten().copied().collect();
        let weight =
            Tensor::<B, 1>::from_floats(flat.as_slice(), device).reshape([self.vocab_size, dim]);

        let mut embedding = EmbeddingConfig::new(self.vocab_size, dim).init(device);
        embedding.weight = Param::from_tensor(weight);

        Ok(self.assemble(embedding, dim, device))
    }

    fn assemble<B: Backend>(
        &self,
        embedding: Embedding<B>,
        embedding_dim: usize,
        device: &B::Device,
    ) -> CbowClassifier<B> {
        CbowClassifier {
            embedding,
            fc: LinearConfig::new(embedding_dim, self.vocab_size).init(device),
            dropout: DropoutConfig::new(self.dropout).init(),
            embedding_dim,
            mask_index: self.mask_index,
        }
    }
}

/// Simplified CBOW model: embed, sum-pool, dropout, project.
#[derive(Module, Debug)]
pub struct CbowClassifier<B: Backend> {
    pub embedding: Embedding<B>,
    pub fc: Linear<B>,
    pub dropout: Dropout,
    pub embedding_dim: usize,
    pub mask_index: usize,
}

impl<B: Backend> CbowClassifier<B> {
    /// contexts: [batch, context_len] → logits: [batch, vocab_size]
    ///
    /// Raw scores, no softmax — pair with a cross-entropy loss for
    /// training, or with the predictor's decode step for inference.
    /// Dropout is only active on autodiff backends, so inference on
    /// a plain backend is deterministic.
    pub fn forward(&self, contexts: Tensor<B, 2, Int>) -> Tensor<B, 2> {
        let [batch_size, _context_len] = contexts.dims();

        // Mask positions are excluded from the pool: their embedding
        // rows are zeroed before summation, so padding contributes
        // exactly nothing regardless of what the table has learned
        // at the mask row.
        let keep = contexts
            .clone()
            .not_equal_elem(self.mask_index as i32)
            .float()
            .unsqueeze_dim::<3>(2); // [batch, context_len, 1]

        let embedded = self.embedding.forward(contexts); // [batch, context_len, dim]
        let pooled = (embedded * keep)
            .sum_dim(1)
            .reshape([batch_size, self.embedding_dim]);

        let pooled = self.dropout.forward(pooled);
        self.fc.forward(pooled)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray<f32>;

    fn close(a: &[f32], b: &[f32]) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b) {
            assert!((x - y).abs() < 1e-5, "{x} != {y}");
        }
    }

    #[test]
    fn test_forward_shape() {
        let device = Default::default();
        let model = CbowClassifierConfig::new(10)
            .with_embedding_dim(8)
            .init::<TestBackend>(&device);

        let contexts = Tensor::<TestBackend, 1, Int>::from_ints(
            [2, 3, 0, 0, 4, 2, 3, 0, 5, 0, 0, 0].as_slice(),
            &device,
        )
        .reshape([3, 4]);

        let logits = model.forward(contexts);
        assert_eq!(logits.dims(), [3, 10]);
    }

    #[test]
    fn test_mask_positions_contribute_nothing() {
        let device = Default::default();
        let model = CbowClassifierConfig::new(6).init::<TestBackend>(&device);

        // Same real tokens, different amounts of padding
        let short = Tensor::<TestBackend, 1, Int>::from_ints([2, 3].as_slice(), &device)
            .reshape([1, 2]);
        let padded = Tensor::<TestBackend, 1, Int>::from_ints([2, 3, 0, 0, 0].as_slice(), &device)
            .reshape([1, 5]);

        let a: Vec<f32> = model.forward(short).into_data().to_vec().unwrap();
        let b: Vec<f32> = model.forward(padded).into_data().to_vec().unwrap();
        close(&a, &b);
    }

    #[test]
    fn test_pooling_is_order_invariant() {
        let device = Default::default();
        let model = CbowClassifierConfig::new(6).init::<TestBackend>(&device);

        let ab = Tensor::<TestBackend, 1, Int>::from_ints([2, 3].as_slice(), &device)
            .reshape([1, 2]);
        let ba = Tensor::<TestBackend, 1, Int>::from_ints([3, 2].as_slice(), &device)
            .reshape([1, 2]);

        let a: Vec<f32> = model.forward(ab).into_data().to_vec().unwrap();
        let b: Vec<f32> = model.forward(ba).into_data().to_vec().unwrap();
        close(&a, &b);
    }

    #[test]
    fn test_pretrained_dimension_overrides_config() {
        let device = Default::default();
        let vectors: Vec<Vec<f32>> = (0..4).map(|i| vec![i as f32; 7]).collect();

        // Configured dim 50 is ignored: pre-trained vectors are 7-wide
        let model = CbowClassifierConfig::new(4)
            .init_with_embeddings::<TestBackend>(&vectors, &device)
            .unwrap();
        assert_eq!(model.embedding_dim, 7);
        assert_eq!(model.embedding.weight.val().dims(), [4, 7]);
    }

    #[test]
    fn test_pretrained_row_count_mismatch() {
        let device = Default::default();
        let vectors: Vec<Vec<f32>> = (0..3).map(|_| vec![0.0; 7]).collect();

        let err = CbowClassifierConfig::new(4)
            .init_with_embeddings::<TestBackend>(&vectors, &device)
            .unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch(_)));
    }

    #[test]
    fn test_pretrained_ragged_rows() {
        let device = Default::default();
        let vectors = vec![vec![0.0; 7], vec![0.0; 7], vec![0.0; 5], vec![0.0; 7]];

        let err = CbowClassifierConfig::new(4)
            .init_with_embeddings::<TestBackend>(&vectors, &device)
            .unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch(_)));
    }
}
