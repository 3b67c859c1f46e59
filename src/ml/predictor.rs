// ============================================================
// Layer 5 — Predictor
// ============================================================
// End-to-end inference wrapper. Converts a JSON request of the
// form {"inputs": ["some text", ...]} into one batched tensor,
// runs the classifier, softmaxes the logits, and returns the
// single highest-probability class per input:
//   {"outputs": [{"class": "...", "probability": 0.7}, ...]}
//
// Output order always matches input order. Ties in maximum
// probability resolve to the first index of the maximum value.

use burn::prelude::*;
use burn::tensor::activation::softmax;
use serde::{Deserialize, Serialize};

use crate::data::vectorizer::CbowVectorizer;
use crate::error::{Error, Result};
use crate::ml::model::CbowClassifier;

// ─── Wire types ───────────────────────────────────────────────────────────────
/// Inference request: a list of raw text strings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub inputs: Vec<String>,
}

/// One ranked result: the predicted class token and its
/// softmax probability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub class: String,
    pub probability: f32,
}

/// Inference response: one prediction per input, same order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub outputs: Vec<Prediction>,
}

// ─── Predictor ────────────────────────────────────────────────────────────────
/// Wraps a trained classifier and the vectorizer it was trained
/// with. Holds no mutable state — every call is a pure function
/// of its inputs.
///
/// Use a non-autodiff backend here: that is what disables dropout
/// and makes inference deterministic.
pub struct Predictor<B: Backend> {
    model: CbowClassifier<B>,
    vectorizer: CbowVectorizer,
    device: B::Device,
}

impl<B: Backend> Predictor<B> {
    pub fn new(model: CbowClassifier<B>, vectorizer: CbowVectorizer, device: B::Device) -> Self {
        Self {
            model,
            vectorizer,
            device,
        }
    }

    /// Run inference over a typed request.
    pub fn predict(&self, request: &PredictRequest) -> Result<PredictResponse> {
        if request.inputs.is_empty() {
            return Ok(PredictResponse {
                outputs: Vec::new(),
            });
        }

        let contexts = self.batch_inputs(&request.inputs)?;
        let logits = self.model.forward(contexts);
        let outputs = self.decode(logits)?;

        Ok(PredictResponse { outputs })
    }

    /// JSON-string convenience wrapper around [`predict`](Self::predict).
    pub fn predict_json(&self, json: &str) -> Result<String> {
        let request: PredictRequest = serde_json::from_str(json)?;
        let response = self.predict(&request)?;
        Ok(serde_json::to_string(&response)?)
    }

    /// Vectorize each input independently and stack the index
    /// arrays into one [batch, max_context] tensor.
    fn batch_inputs(&self, inputs: &[String]) -> Result<Tensor<B, 2, Int>> {
        let batch_size = inputs.len();
        let context_len = self.vectorizer.max_context();

        let mut flat: Vec<i32> = Vec::with_capacity(batch_size * context_len);
        for input in inputs {
            let indices = self.vectorizer.vectorize(input)?;
            flat.extend(indices.iter().map(|&x| x as i32));
        }

        Ok(
            Tensor::<B, 1, Int>::from_ints(flat.as_slice(), &self.device)
                .reshape([batch_size, context_len]),
        )
    }

    /// Softmax the logits and pick each row's top class.
    fn decode(&self, logits: Tensor<B, 2>) -> Result<Vec<Prediction>> {
        let [batch_size, n_classes] = logits.dims();
        let probabilities = softmax(logits, 1);

        let flat: Vec<f32> = probabilities
            .into_data()
            .to_vec()
            .map_err(|e| Error::TensorData(format!("{e:?}")))?;

        let mut outputs = Vec::with_capacity(batch_size);
        for row in flat.chunks(n_classes) {
            let best = stable_argmax(row);
            let class = self
                .vectorizer
                .vocabulary()
                .lookup_index(best)?
                .to_string();
            outputs.push(Prediction {
                class,
                probability: row[best],
            });
        }

        Ok(outputs)
    }
}

/// Index of the maximum value; the FIRST maximum wins on ties.
fn stable_argmax(row: &[f32]) -> usize {
    let mut best = 0usize;
    let mut best_value = f32::NEG_INFINITY;
    for (index, &value) in row.iter().enumerate() {
        if value > best_value {
            best = index;
            best_value = value;
        }
    }
    best
}
